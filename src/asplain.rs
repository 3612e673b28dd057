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
Sortie en format texte
======================

Format simple et compact pour présenter les rendements calculés.
*/

use itertools::Itertools;

use crate::types::{Efficiencies, Efficiency, System};

/// Affichage en format simple
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

impl AsPlain for Efficiency {
    fn to_plain(&self) -> String {
        let Efficiency {
            scenario,
            fecs,
            rd,
            rs,
            rg,
            rgs,
            iecs,
        } = self;
        format!(
            "* Scénario {}
Fecs = {:.3}
Rd = {:.3}
Rs = {:.3}
Rg = {:.3}
Rgs = {:.3}
Iecs = {:.3}",
            scenario, fecs, rd, rs, rg, rgs, iecs
        )
    }
}

impl AsPlain for Efficiencies {
    fn to_plain(&self) -> String {
        format!(
            "** Rendements ECS\n\n{}",
            self.iter().map(|e| e.to_plain()).join("\n\n")
        )
    }
}

impl AsPlain for System {
    /// Résumé des données d'entrée
    fn to_plain(&self) -> String {
        let g = &self.generator;
        let solar = match self.solar {
            Some(ref s) => match (s.fecs, s.usage) {
                (Some(fecs), _) => format!("Fecs saisi {:.3}", fecs),
                (None, Some(usage)) => format!("{}", usage),
                (None, None) => "-".to_string(),
            },
            None => "-".to_string(),
        };
        format!(
            "Générateur: {} ({}){}
Bâtiment: {}, zone {}, installation {}
Solaire: {}
Becs [Wh]: conventionnel {:.0}, dépensier {:.0}",
            g.gtype,
            g.energy,
            if g.collective { ", collectif" } else { "" },
            self.building.btype,
            self.building.climate_zone,
            self.building.installation_year,
            solar,
            self.needs.conventional,
            self.needs.intensive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scenario;
    use pretty_assertions::assert_eq;

    #[test]
    fn efficiency_plain() {
        let e = Efficiency {
            scenario: Scenario::INTENSIVE,
            fecs: 0.0,
            rd: 0.93,
            rs: 0.95,
            rg: 1.0,
            rgs: 1.0,
            iecs: 1.0 / (0.93 * 0.95),
        };
        assert_eq!(
            e.to_plain(),
            "* Scénario INTENSIVE
Fecs = 0.000
Rd = 0.930
Rs = 0.950
Rg = 1.000
Rgs = 1.000
Iecs = 1.132"
        );
    }
}
