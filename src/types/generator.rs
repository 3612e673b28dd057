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

//! Générateurs d'eau chaude sanitaire

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::ByScenario;
use crate::error::EcsError;

/// Type de générateur d'eau chaude sanitaire
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GeneratorType {
    /// Instantaneous water heater
    INSTANTANEOUS,
    /// Vertical storage water heater
    VERTICAL_TANK,
    /// Horizontal storage water heater
    HORIZONTAL_TANK,
    /// Boiler
    BOILER,
    /// Boiler serving several buildings
    MULTI_BUILDING_BOILER,
    /// Storage water heater with fuel accumulation
    FUEL_ACCUMULATOR,
    /// Wood stove with boiler
    WOOD_STOVE_BOILER,
    /// Thermodynamic water heater on ambient air
    HEAT_PUMP_AMBIENT_AIR,
    /// Thermodynamic water heater on outdoor air
    HEAT_PUMP_OUTDOOR_AIR,
    /// Thermodynamic water heater on exhaust air
    HEAT_PUMP_EXHAUST_AIR,
    /// Heat pump for both heating and DHW
    DUAL_SERVICE_HEAT_PUMP,
    /// Heat pump serving several buildings
    MULTI_BUILDING_HEAT_PUMP,
    /// Exchanger on a district heat network
    DISTRICT_NETWORK,
}

impl GeneratorType {
    /// All generator types
    pub const ALL: [GeneratorType; 13] = [
        GeneratorType::INSTANTANEOUS,
        GeneratorType::VERTICAL_TANK,
        GeneratorType::HORIZONTAL_TANK,
        GeneratorType::BOILER,
        GeneratorType::MULTI_BUILDING_BOILER,
        GeneratorType::FUEL_ACCUMULATOR,
        GeneratorType::WOOD_STOVE_BOILER,
        GeneratorType::HEAT_PUMP_AMBIENT_AIR,
        GeneratorType::HEAT_PUMP_OUTDOOR_AIR,
        GeneratorType::HEAT_PUMP_EXHAUST_AIR,
        GeneratorType::DUAL_SERVICE_HEAT_PUMP,
        GeneratorType::MULTI_BUILDING_HEAT_PUMP,
        GeneratorType::DISTRICT_NETWORK,
    ];
}

impl str::FromStr for GeneratorType {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<GeneratorType, Self::Err> {
        use GeneratorType::*;
        match s {
            "INSTANTANEOUS" => Ok(INSTANTANEOUS),
            "VERTICAL_TANK" => Ok(VERTICAL_TANK),
            "HORIZONTAL_TANK" => Ok(HORIZONTAL_TANK),
            "BOILER" => Ok(BOILER),
            "MULTI_BUILDING_BOILER" => Ok(MULTI_BUILDING_BOILER),
            "FUEL_ACCUMULATOR" => Ok(FUEL_ACCUMULATOR),
            "WOOD_STOVE_BOILER" => Ok(WOOD_STOVE_BOILER),
            "HEAT_PUMP_AMBIENT_AIR" => Ok(HEAT_PUMP_AMBIENT_AIR),
            "HEAT_PUMP_OUTDOOR_AIR" => Ok(HEAT_PUMP_OUTDOOR_AIR),
            "HEAT_PUMP_EXHAUST_AIR" => Ok(HEAT_PUMP_EXHAUST_AIR),
            "DUAL_SERVICE_HEAT_PUMP" => Ok(DUAL_SERVICE_HEAT_PUMP),
            "MULTI_BUILDING_HEAT_PUMP" => Ok(MULTI_BUILDING_HEAT_PUMP),
            "DISTRICT_NETWORK" => Ok(DISTRICT_NETWORK),
            _ => Err(EcsError::ParseError(s.into())),
        }
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Chaudières
///
/// Subset of generator types that are boilers.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoilerType {
    /// Boiler
    BOILER,
    /// Boiler serving several buildings
    MULTI_BUILDING_BOILER,
}

impl str::FromStr for BoilerType {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<BoilerType, Self::Err> {
        match s {
            "BOILER" => Ok(BoilerType::BOILER),
            "MULTI_BUILDING_BOILER" => Ok(BoilerType::MULTI_BUILDING_BOILER),
            _ => Err(EcsError::ParseError(s.into())),
        }
    }
}

impl std::convert::From<BoilerType> for GeneratorType {
    fn from(value: BoilerType) -> Self {
        match value {
            BoilerType::BOILER => GeneratorType::BOILER,
            BoilerType::MULTI_BUILDING_BOILER => GeneratorType::MULTI_BUILDING_BOILER,
        }
    }
}

/// Énergie du générateur
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergySource {
    /// Electricity
    ELECTRICITY,
    /// Natural gas
    NATURAL_GAS,
    /// LPG - Liquefied petroleum gas
    LPG,
    /// Fuel oil
    FUEL_OIL,
    /// Wood logs
    WOOD_LOGS,
    /// Wood pellets
    WOOD_PELLETS,
    /// Wood chips
    WOOD_CHIPS,
    /// Heat delivered by a district network
    HEAT_NETWORK,
}

impl EnergySource {
    /// Is this a fuel burnt by the generator?
    pub fn is_combustible(&self) -> bool {
        use EnergySource::*;
        match self {
            NATURAL_GAS | LPG | FUEL_OIL | WOOD_LOGS | WOOD_PELLETS | WOOD_CHIPS => true,
            ELECTRICITY | HEAT_NETWORK => false,
        }
    }
}

impl str::FromStr for EnergySource {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<EnergySource, Self::Err> {
        use EnergySource::*;
        match s {
            "ELECTRICITY" => Ok(ELECTRICITY),
            "NATURAL_GAS" => Ok(NATURAL_GAS),
            "LPG" => Ok(LPG),
            "FUEL_OIL" => Ok(FUEL_OIL),
            "WOOD_LOGS" => Ok(WOOD_LOGS),
            "WOOD_PELLETS" => Ok(WOOD_PELLETS),
            "WOOD_CHIPS" => Ok(WOOD_CHIPS),
            "HEAT_NETWORK" => Ok(HEAT_NETWORK),
            _ => Err(EcsError::ParseError(s.into())),
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Label du générateur
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum Label {
    /// NF Électricité Performance label
    NF_PERFORMANCE,
    /// NF Électricité Performance, category C (vertical tanks)
    NF_PERFORMANCE_C,
}

/// Caractéristiques de performance du générateur
///
/// Nameplate performance figures. Absent values take the neutral value of the formula
/// where they appear.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Full load efficiency [-]
    #[serde(default)]
    pub rpn: Option<f32>,
    /// Standby losses [W]
    #[serde(default)]
    pub qp0: Option<f32>,
    /// Pilot light power [W]
    #[serde(default)]
    pub pveilleuse: Option<f32>,
    /// Coefficient of performance [-]
    #[serde(default)]
    pub cop: Option<f32>,
}

/// Générateur d'eau chaude sanitaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    /// Generator type
    #[serde(rename = "type")]
    pub gtype: GeneratorType,
    /// Energy used by the generator
    pub energy: EnergySource,
    /// Nameplate performance
    #[serde(default)]
    pub performance: Performance,
    /// Label
    #[serde(default)]
    pub label: Option<Label>,
    /// Generator serves a collective installation
    #[serde(default)]
    pub collective: bool,
    /// Production takes place inside the heated volume
    #[serde(default)]
    pub in_heated_volume: Option<bool>,
    /// Storage losses of the generator itself [Wh]
    #[serde(default)]
    pub storage_losses: ByScenario<f32>,
}

impl Generator {
    /// Generator without performance data, label or storage losses
    pub fn new(gtype: GeneratorType, energy: EnergySource) -> Self {
        Self {
            gtype,
            energy,
            performance: Performance::default(),
            label: None,
            collective: false,
            in_heated_volume: None,
            storage_losses: ByScenario::default(),
        }
    }
}
