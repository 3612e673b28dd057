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
Pertes
======

Pertes mensuelles par scénario et leur agrégation.
*/

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::{ByScenario, Month, Scenario};
use crate::error::EcsError;

/// Type de perte
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum LossKind {
    /// Generation losses
    GENERATION,
    /// Storage losses
    STORAGE,
    /// Distribution losses
    DISTRIBUTION,
}

/// Perte mensuelle
///
/// Monthly loss for a scenario. Magnitudes are non negative, which is checked by
/// `Loss::new`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Loss {
    scenario: Scenario,
    month: Month,
    kind: LossKind,
    losses: f32,
    recoverable_losses: f32,
}

impl Loss {
    /// Constructor. Fails when a magnitude is negative or not a finite number.
    pub fn new(
        scenario: Scenario,
        month: Month,
        kind: LossKind,
        losses: f32,
        recoverable_losses: f32,
    ) -> Result<Self, EcsError> {
        if !losses.is_finite() || losses < 0.0 {
            return Err(EcsError::Precondition(format!(
                "pertes négatives ou non numériques ({}, {}, {}): {}",
                scenario, month, kind, losses
            )));
        }
        if !recoverable_losses.is_finite() || recoverable_losses < 0.0 {
            return Err(EcsError::Precondition(format!(
                "pertes récupérables négatives ou non numériques ({}, {}, {}): {}",
                scenario, month, kind, recoverable_losses
            )));
        }
        Ok(Self {
            scenario,
            month,
            kind,
            losses,
            recoverable_losses,
        })
    }

    /// Usage scenario
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Month
    pub fn month(&self) -> Month {
        self.month
    }

    /// Loss category
    pub fn kind(&self) -> LossKind {
        self.kind
    }

    /// Losses [Wh]
    pub fn losses(&self) -> f32 {
        self.losses
    }

    /// Recoverable losses [Wh]
    pub fn recoverable_losses(&self) -> f32 {
        self.recoverable_losses
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {:.2}, {:.2}",
            self.scenario, self.month, self.kind, self.losses, self.recoverable_losses
        )
    }
}

/// Liste de pertes
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Losses(pub Vec<Loss>);

impl Losses {
    /// Annual losses of a category for every scenario
    pub fn total(&self, kind: LossKind) -> ByScenario<f32> {
        self.0
            .iter()
            .filter(|l| l.kind == kind)
            .fold(ByScenario::default(), |mut acc, l| {
                *acc.get_mut(l.scenario) += l.losses;
                acc
            })
    }

    /// Annual recoverable losses of a category for every scenario
    pub fn total_recoverable(&self, kind: LossKind) -> ByScenario<f32> {
        self.0
            .iter()
            .filter(|l| l.kind == kind)
            .fold(ByScenario::default(), |mut acc, l| {
                *acc.get_mut(l.scenario) += l.recoverable_losses;
                acc
            })
    }
}

impl fmt::Display for Losses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}
