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

//! Réseau de distribution d'eau chaude sanitaire

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EcsError;

/// Type de bouclage du réseau collectif
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Looping {
    /// Network without loop
    UNLOOPED,
    /// Looped network
    LOOPED,
    /// Network kept warm by heat tracing
    HEAT_TRACED,
}

impl str::FromStr for Looping {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<Looping, Self::Err> {
        match s {
            "UNLOOPED" => Ok(Looping::UNLOOPED),
            "LOOPED" => Ok(Looping::LOOPED),
            "HEAT_TRACED" => Ok(Looping::HEAT_TRACED),
            _ => Err(EcsError::ParseError(s.into())),
        }
    }
}

impl fmt::Display for Looping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Isolation du réseau
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkInsulation {
    /// Insulated network
    INSULATED,
    /// Uninsulated network
    UNINSULATED,
    /// Unknown insulation
    UNKNOWN,
}

impl Default for NetworkInsulation {
    fn default() -> Self {
        NetworkInsulation::UNKNOWN
    }
}

impl str::FromStr for NetworkInsulation {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<NetworkInsulation, Self::Err> {
        match s {
            "INSULATED" => Ok(NetworkInsulation::INSULATED),
            "UNINSULATED" => Ok(NetworkInsulation::UNINSULATED),
            "UNKNOWN" => Ok(NetworkInsulation::UNKNOWN),
            _ => Err(EcsError::ParseError(s.into())),
        }
    }
}

impl fmt::Display for NetworkInsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Réseau de distribution
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Looping of the collective network, if any
    #[serde(default)]
    pub looping: Option<Looping>,
    /// Supplied rooms are contiguous to the production
    #[serde(default)]
    pub contiguous: Option<bool>,
    /// Network insulation
    #[serde(default)]
    pub insulation: NetworkInsulation,
}
