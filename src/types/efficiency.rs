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

/*!
Rendements
==========

Résultats du moteur de rendement: un enregistrement par scénario d'usage.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Scenario;

/// Rendements d'un scénario d'usage
///
/// Efficiency record of a usage scenario
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    /// Usage scenario
    pub scenario: Scenario,
    /// Solar coverage fraction [-]
    pub fecs: f32,
    /// Distribution yield [-]
    pub rd: f32,
    /// Storage yield [-]
    pub rs: f32,
    /// Generation yield [-]
    pub rg: f32,
    /// Generation with storage yield [-]
    pub rgs: f32,
    /// Consumption index [-]
    pub iecs: f32,
}

impl Efficiency {
    /// Final energy delivered by the solar contribution [Wh]
    pub fn solar_production(&self, becs: f32) -> f32 {
        becs * self.fecs * self.iecs
    }

    /// Final energy consumption of the non solar part [Wh]
    pub fn consumption(&self, becs: f32) -> f32 {
        becs * (1.0 - self.fecs) * self.iecs
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {:.3}, {:.3}, {:.3}, {:.3}, {:.3}, {:.3}",
            self.scenario, self.fecs, self.rd, self.rs, self.rg, self.rgs, self.iecs
        )
    }
}

/// Rendements de tous les scénarios d'usage
///
/// Records are kept in scenario order, one per scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Efficiencies(Vec<Efficiency>);

impl Efficiencies {
    pub(crate) fn new(values: Vec<Efficiency>) -> Self {
        Efficiencies(values)
    }

    /// Record of a scenario
    pub fn get(&self, scenario: Scenario) -> Option<&Efficiency> {
        self.0.iter().find(|e| e.scenario == scenario)
    }

    /// Iterate records in scenario order
    pub fn iter(&self) -> std::slice::Iter<'_, Efficiency> {
        self.0.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Efficiencies {
    type Item = &'a Efficiency;
    type IntoIter = std::slice::Iter<'a, Efficiency>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derived_energies() {
        let e = Efficiency {
            scenario: Scenario::CONVENTIONAL,
            fecs: 0.25,
            rd: 1.0,
            rs: 1.0,
            rg: 1.0,
            rgs: 1.0,
            iecs: 2.0,
        };
        assert_eq!(e.solar_production(1000.0), 500.0);
        assert_eq!(e.consumption(1000.0), 1500.0);
        assert_eq!(
            format!("{}", e),
            "CONVENTIONAL, 0.250, 1.000, 1.000, 1.000, 1.000, 2.000"
        );
    }
}
