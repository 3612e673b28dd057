// Copyright (c) 2026  Les contributeurs de DpeEcs

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Bâtiment et installation solaire

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Type de bâtiment
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum BuildingType {
    /// Single family house
    HOUSE,
    /// Apartment
    APARTMENT,
    /// Apartment building
    APARTMENT_BUILDING,
}

/// Zone climatique
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum ClimateZone {
    /// Zone H1a
    H1A,
    /// Zone H1b
    H1B,
    /// Zone H1c
    H1C,
    /// Zone H2a
    H2A,
    /// Zone H2b
    H2B,
    /// Zone H2c
    H2C,
    /// Zone H2d
    H2D,
    /// Zone H3
    H3,
}

/// Usage du système solaire
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum SolarUsage {
    /// Solar water heater for DHW only
    DHW_ONLY,
    /// Combined solar system for DHW and space heating
    DHW_AND_HEATING,
}

/// Installation solaire
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solar {
    /// Usage of the solar system
    #[serde(default)]
    pub usage: Option<SolarUsage>,
    /// User supplied solar fraction, bypasses the table lookup
    #[serde(default)]
    pub fecs: Option<f32>,
}

/// Bâtiment audité
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Building type
    #[serde(rename = "type")]
    pub btype: BuildingType,
    /// Climate zone
    pub climate_zone: ClimateZone,
    /// Year the installation was built
    pub installation_year: i32,
    /// Year of the calculation (current year when absent)
    #[serde(default)]
    pub calculation_year: Option<i32>,
}

impl Building {
    /// Age of the installation at the calculation year
    pub fn installation_age(&self, calculation_year: i32) -> i32 {
        calculation_year - self.installation_year
    }
}
