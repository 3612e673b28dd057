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
Description du système
======================

Instantané de l'installation d'eau chaude sanitaire évaluée par le moteur de rendement.

Toutes les données nécessaires au calcul sont rassemblées dans une structure plate et
immuable, construite par l'appelant avant le calcul.
*/

use std::str;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::{ByScenario, Building, Generator, Network, Scenario, Solar};
use crate::error::EcsError;

/// Système d'eau chaude sanitaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    /// Audited building
    pub building: Building,
    /// DHW generator
    pub generator: Generator,
    /// Distribution network
    #[serde(default)]
    pub network: Network,
    /// Storage losses of the installation, excluding the generator's own [Wh]
    #[serde(default)]
    pub storage_losses: ByScenario<f32>,
    /// Annual DHW need [Wh]
    pub needs: ByScenario<f32>,
    /// Solar contribution
    #[serde(default)]
    pub solar: Option<Solar>,
}

impl System {
    /// Storage losses of the installation and of the generator for a scenario [Wh]
    pub fn total_storage_losses(&self, scenario: Scenario) -> f32 {
        self.storage_losses
            .add(&self.generator.storage_losses)
            .get(scenario)
    }

    /// Annual DHW need for a scenario [Wh]
    pub fn becs(&self, scenario: Scenario) -> f32 {
        self.needs.get(scenario)
    }

    /// Vérifie les données numériques avant le calcul
    ///
    /// Checks the numeric inputs the formulas rely on:
    /// - storage losses are non negative for every scenario
    /// - the need is strictly positive when some formula divides by it
    /// - rpn is strictly positive when a combustion formula applies
    /// - qp0 and pveilleuse, when present, are non negative
    /// - cop, when present, is strictly positive
    pub fn check(&self) -> Result<(), EcsError> {
        use crate::engine::{
            rg_combustion_applicable, rgs_combustion_applicable, rs_applicable,
        };

        let gtype = self.generator.gtype;
        let energy = self.generator.energy;
        let combustion = rg_combustion_applicable(gtype, energy)
            || rgs_combustion_applicable(gtype, energy);
        let needs_divisor = combustion || rs_applicable(gtype, energy);

        for scenario in Scenario::iter() {
            for (origin, losses) in &[
                ("installation", self.storage_losses.get(scenario)),
                ("générateur", self.generator.storage_losses.get(scenario)),
            ] {
                if !losses.is_finite() || *losses < 0.0 {
                    return Err(EcsError::Precondition(format!(
                        "pertes de stockage ({}) du scénario {}: {}",
                        origin, scenario, losses
                    )));
                }
            }
            let becs = self.becs(scenario);
            if needs_divisor && !(becs.is_finite() && becs > 0.0) {
                return Err(EcsError::Precondition(format!(
                    "besoin Becs du scénario {} doit être positif: {}",
                    scenario, becs
                )));
            }
        }

        if let Some(cop) = self.generator.performance.cop {
            if !(cop.is_finite() && cop > 0.0) {
                return Err(EcsError::Precondition(format!(
                    "coefficient de performance COP du générateur {} ({}): {}",
                    gtype, energy, cop
                )));
            }
        }

        if combustion {
            let perf = &self.generator.performance;
            match perf.rpn {
                Some(rpn) if rpn.is_finite() && rpn > 0.0 => (),
                other => {
                    return Err(EcsError::Precondition(format!(
                        "rendement à pleine charge Rpn du générateur {} ({}): {:?}",
                        gtype, energy, other
                    )))
                }
            }
            for (name, value) in &[("qp0", perf.qp0), ("pveilleuse", perf.pveilleuse)] {
                if let Some(v) = value {
                    if !v.is_finite() || *v < 0.0 {
                        return Err(EcsError::Precondition(format!("{}: {}", name, v)));
                    }
                }
            }
        }
        Ok(())
    }
}

impl str::FromStr for System {
    type Err = EcsError;

    /// Read a system description from its JSON representation
    fn from_str(s: &str) -> Result<System, Self::Err> {
        serde_json::from_str(s).map_err(|e| EcsError::ParseError(e.to_string()))
    }
}
