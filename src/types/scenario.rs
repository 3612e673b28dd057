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

//! Scénarios d'usage et valeurs par scénario

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::EcsError;

/// Scénario d'usage de l'eau chaude sanitaire
///
/// Usage scenario. The engine is evaluated once per scenario, in declaration order.
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Scenario {
    /// Conventional usage
    CONVENTIONAL,
    /// High consumption usage
    INTENSIVE,
}

impl str::FromStr for Scenario {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<Scenario, Self::Err> {
        match s {
            "CONVENTIONAL" => Ok(Scenario::CONVENTIONAL),
            "INTENSIVE" => Ok(Scenario::INTENSIVE),
            _ => Err(EcsError::ParseError(s.into())),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mois de l'année
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Month {
    /// January
    JANUARY,
    /// February
    FEBRUARY,
    /// March
    MARCH,
    /// April
    APRIL,
    /// May
    MAY,
    /// June
    JUNE,
    /// July
    JULY,
    /// August
    AUGUST,
    /// September
    SEPTEMBER,
    /// October
    OCTOBER,
    /// November
    NOVEMBER,
    /// December
    DECEMBER,
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Valeur définie pour chaque scénario d'usage
///
/// Value defined for every usage scenario. Having one field per scenario makes a missing
/// scenario value unrepresentable.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByScenario<T> {
    /// Value for the conventional scenario
    pub conventional: T,
    /// Value for the high consumption scenario
    pub intensive: T,
}

impl<T: Copy> ByScenario<T> {
    /// Same value for every scenario
    pub fn uniform(value: T) -> Self {
        Self {
            conventional: value,
            intensive: value,
        }
    }

    /// Value for a scenario
    pub fn get(&self, scenario: Scenario) -> T {
        match scenario {
            Scenario::CONVENTIONAL => self.conventional,
            Scenario::INTENSIVE => self.intensive,
        }
    }

    /// Mutable reference to the value of a scenario
    pub fn get_mut(&mut self, scenario: Scenario) -> &mut T {
        match scenario {
            Scenario::CONVENTIONAL => &mut self.conventional,
            Scenario::INTENSIVE => &mut self.intensive,
        }
    }
}

impl ByScenario<f32> {
    /// Elementwise sum
    pub fn add(&self, other: &ByScenario<f32>) -> ByScenario<f32> {
        ByScenario {
            conventional: self.conventional + other.conventional,
            intensive: self.intensive + other.intensive,
        }
    }
}
