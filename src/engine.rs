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
Moteur de rendement
===================

Calcul des rendements annuels d'un système d'eau chaude sanitaire selon la méthode
3CL-DPE et de l'indice de consommation Iecs qui en résulte.

Pour chaque scénario d'usage:

- Fecs: fraction solaire (saisie, tabulée ou nulle sans système solaire)
- Rd: rendement de distribution (tabulé)
- Rs: rendement de stockage
- Rg: rendement de génération, minimum de la valeur par effet Joule (tabulée) et des
  valeurs par combustion
- Rgs: rendement de génération avec stockage, minimum du COP, de la valeur des réseaux
  multi-bâtiments et des valeurs par combustion
- Iecs = 1 / (Rg · Rgs · Rd · Rs)

Un rendement qui ne s'applique pas au couple générateur / énergie vaut exactement 1.

Les ensembles de valeurs de Rg et Rgs sont partagés entre scénarios: les valeurs par
combustion d'un scénario restent présentes pour les scénarios suivants.
*/

use chrono::Datelike;
use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::error::{EcsError, Table};
use crate::tables::{FecsKey, FecsTable, RdKey, RdTable, RgKey, RgTable};
use crate::types::{
    Building, Efficiencies, Efficiency, EnergySource, GeneratorType, Label, Network,
    NetworkInsulation, Performance, Scenario, Solar, System,
};
use crate::vecops::{vecmin, vecprod};

/// Numerator of the storage yield for labelled vertical tanks
const RS_LABEL_FACTOR: f32 = 1.08;
/// Network yield of multi-building generators with an insulated network
const RGS_NETWORK_INSULATED: f32 = 0.9;
/// Network yield of multi-building generators with an uninsulated or unknown network
const RGS_NETWORK_UNINSULATED: f32 = 0.75;

/// Moteur de rendement
///
/// Efficiency engine over the three lookup tables. It holds no state besides the
/// borrowed tables, so a single engine can evaluate any number of systems.
pub struct Engine<'a> {
    fecs_table: &'a dyn FecsTable,
    rd_table: &'a dyn RdTable,
    rg_table: &'a dyn RgTable,
}

impl<'a> Engine<'a> {
    /// Engine using the given lookup tables
    pub fn new(
        fecs_table: &'a dyn FecsTable,
        rd_table: &'a dyn RdTable,
        rg_table: &'a dyn RgTable,
    ) -> Self {
        Self {
            fecs_table,
            rd_table,
            rg_table,
        }
    }

    /// Compute the efficiencies of a system for every usage scenario
    ///
    /// Fails when an input value is out of range or when a tabulated value is missing.
    pub fn compute(&self, system: &System) -> Result<Efficiencies, EcsError> {
        system.check()?;

        let generator = &system.generator;
        let gtype = generator.gtype;
        let energy = generator.energy;
        let calculation_year = system
            .building
            .calculation_year
            .unwrap_or_else(current_year);

        let fecs = fecs(
            self.fecs_table,
            &system.building,
            system.solar.as_ref(),
            calculation_year,
        )?;
        let rd = rd(
            self.rd_table,
            generator.collective,
            &system.network,
            generator.in_heated_volume,
        )?;
        let mut rg_values = vec![rg(self.rg_table, gtype, energy)?];
        let mut rgs_values = vec![
            generator.performance.cop.unwrap_or(1.0),
            rgs_network(gtype, system.network.insulation),
        ];
        debug!(fecs, rd, rg = rg_values[0], "coefficients indépendants du scénario");

        let mut records = Vec::new();
        for scenario in Scenario::iter() {
            let becs = system.becs(scenario);
            let storage_losses = system.total_storage_losses(scenario);

            let rs = rs(gtype, energy, generator.label, storage_losses, rd, becs);
            rg_values.push(rg_combustion(gtype, energy, becs, &generator.performance));
            rgs_values.push(rgs_combustion(
                gtype,
                energy,
                becs,
                storage_losses,
                &generator.performance,
            ));

            let rg = vecmin(&rg_values);
            let rgs = vecmin(&rgs_values);
            let iecs = iecs(&[rg, rgs, rd, rs]);
            trace!(%scenario, becs, storage_losses, rs, rg, rgs, iecs, "rendements du scénario");

            records.push(Efficiency {
                scenario,
                fecs,
                rd,
                rs,
                rg,
                rgs,
                iecs,
            });
        }
        Ok(Efficiencies::new(records))
    }
}

/// Compute the efficiencies of a system for every usage scenario
///
/// Shorthand for `Engine::new(fecs_table, rd_table, rg_table).compute(system)`.
pub fn efficiencies(
    system: &System,
    fecs_table: &dyn FecsTable,
    rd_table: &dyn RdTable,
    rg_table: &dyn RgTable,
) -> Result<Efficiencies, EcsError> {
    Engine::new(fecs_table, rd_table, rg_table).compute(system)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Consumption index, inverse of the product of the governing yields
pub fn iecs(yields: &[f32]) -> f32 {
    1.0 / vecprod(yields)
}

/// Fraction solaire
///
/// A user supplied value is returned unchanged. Without a solar usage the fraction is 0
/// and no lookup takes place. Otherwise the value is looked up by building, climate
/// zone, solar usage and age of the installation.
pub fn fecs(
    table: &dyn FecsTable,
    building: &Building,
    solar: Option<&Solar>,
    calculation_year: i32,
) -> Result<f32, EcsError> {
    let solar = match solar {
        Some(solar) => solar,
        None => return Ok(0.0),
    };
    if let Some(fecs) = solar.fecs {
        return Ok(fecs);
    }
    let usage = match solar.usage {
        Some(usage) => usage,
        None => return Ok(0.0),
    };
    let key = FecsKey {
        building: building.btype,
        zone: building.climate_zone,
        usage,
        age: building.installation_age(calculation_year),
    };
    table.find_by(&key).ok_or_else(|| EcsError::MissingValue {
        table: Table::FECS,
        key: key.to_string(),
    })
}

/// Rendement annuel de distribution
pub fn rd(
    table: &dyn RdTable,
    collective: bool,
    network: &Network,
    in_heated_volume: Option<bool>,
) -> Result<f32, EcsError> {
    let key = RdKey {
        collective,
        looping: network.looping,
        contiguous: network.contiguous,
        in_heated_volume,
    };
    table.find_by(&key).ok_or_else(|| EcsError::MissingValue {
        table: Table::RD,
        key: key.to_string(),
    })
}

/// Is the resistive generation yield tabulated for this generator?
pub fn rg_applicable(gtype: GeneratorType, energy: EnergySource) -> bool {
    use GeneratorType::*;
    match gtype {
        BOILER | INSTANTANEOUS | VERTICAL_TANK | HORIZONTAL_TANK => {
            energy == EnergySource::ELECTRICITY
        }
        MULTI_BUILDING_BOILER
        | FUEL_ACCUMULATOR
        | WOOD_STOVE_BOILER
        | HEAT_PUMP_AMBIENT_AIR
        | HEAT_PUMP_OUTDOOR_AIR
        | HEAT_PUMP_EXHAUST_AIR
        | DUAL_SERVICE_HEAT_PUMP
        | MULTI_BUILDING_HEAT_PUMP
        | DISTRICT_NETWORK => false,
    }
}

/// Rendement annuel de génération par effet Joule
pub fn rg(
    table: &dyn RgTable,
    gtype: GeneratorType,
    energy: EnergySource,
) -> Result<f32, EcsError> {
    if !rg_applicable(gtype, energy) {
        return Ok(1.0);
    }
    let key = RgKey {
        generator: gtype,
        energy,
    };
    table.find_by(&key).ok_or_else(|| EcsError::MissingValue {
        table: Table::RG,
        key: key.to_string(),
    })
}

/// Does the network yield of multi-building generators apply?
pub fn rgs_network_applicable(gtype: GeneratorType) -> bool {
    use GeneratorType::*;
    match gtype {
        MULTI_BUILDING_BOILER | MULTI_BUILDING_HEAT_PUMP | DISTRICT_NETWORK => true,
        INSTANTANEOUS
        | VERTICAL_TANK
        | HORIZONTAL_TANK
        | BOILER
        | FUEL_ACCUMULATOR
        | WOOD_STOVE_BOILER
        | HEAT_PUMP_AMBIENT_AIR
        | HEAT_PUMP_OUTDOOR_AIR
        | HEAT_PUMP_EXHAUST_AIR
        | DUAL_SERVICE_HEAT_PUMP => false,
    }
}

/// Rendement annuel de génération avec stockage des réseaux multi-bâtiments
pub fn rgs_network(gtype: GeneratorType, insulation: NetworkInsulation) -> f32 {
    if !rgs_network_applicable(gtype) {
        return 1.0;
    }
    match insulation {
        NetworkInsulation::INSULATED => RGS_NETWORK_INSULATED,
        NetworkInsulation::UNINSULATED | NetworkInsulation::UNKNOWN => RGS_NETWORK_UNINSULATED,
    }
}

/// Does the storage yield apply?
pub fn rs_applicable(gtype: GeneratorType, energy: EnergySource) -> bool {
    use GeneratorType::*;
    match gtype {
        INSTANTANEOUS => true,
        VERTICAL_TANK | HORIZONTAL_TANK | BOILER => energy == EnergySource::ELECTRICITY,
        MULTI_BUILDING_BOILER
        | FUEL_ACCUMULATOR
        | WOOD_STOVE_BOILER
        | HEAT_PUMP_AMBIENT_AIR
        | HEAT_PUMP_OUTDOOR_AIR
        | HEAT_PUMP_EXHAUST_AIR
        | DUAL_SERVICE_HEAT_PUMP
        | MULTI_BUILDING_HEAT_PUMP
        | DISTRICT_NETWORK => false,
    }
}

/// Rendement annuel de stockage
///
/// - `storage_losses`: annual storage losses [Wh]
/// - `rd`: distribution yield [-]
/// - `becs`: annual DHW need [Wh], strictly positive
pub fn rs(
    gtype: GeneratorType,
    energy: EnergySource,
    label: Option<Label>,
    storage_losses: f32,
    rd: f32,
    becs: f32,
) -> f32 {
    if !rs_applicable(gtype, energy) {
        return 1.0;
    }
    let k = match (gtype, label) {
        (GeneratorType::VERTICAL_TANK, Some(Label::NF_PERFORMANCE_C)) => RS_LABEL_FACTOR,
        _ => 1.0,
    };
    k / (1.0 + (storage_losses * rd) / (becs * 1000.0))
}

/// Does the combustion generation yield apply?
pub fn rg_combustion_applicable(gtype: GeneratorType, energy: EnergySource) -> bool {
    gtype == GeneratorType::INSTANTANEOUS && energy.is_combustible()
}

/// Rendement annuel de génération par combustion
///
/// - `becs`: annual DHW need [Wh], strictly positive
/// - `performance`: rpn [-] (required), qp0 [W] and pveilleuse [W] (0 when absent)
pub fn rg_combustion(
    gtype: GeneratorType,
    energy: EnergySource,
    becs: f32,
    performance: &Performance,
) -> f32 {
    if !rg_combustion_applicable(gtype, energy) {
        return 1.0;
    }
    let (rpn, qp0, pveilleuse) = nameplate(performance);
    1.0 / ((1.0 / rpn) + 1790.0 * (qp0 / becs) + 6970.0 * (pveilleuse / becs))
}

/// Does the combustion generation with storage yield apply?
pub fn rgs_combustion_applicable(gtype: GeneratorType, energy: EnergySource) -> bool {
    use GeneratorType::*;
    let storage_generator = match gtype {
        FUEL_ACCUMULATOR | BOILER | WOOD_STOVE_BOILER => true,
        INSTANTANEOUS
        | VERTICAL_TANK
        | HORIZONTAL_TANK
        | MULTI_BUILDING_BOILER
        | HEAT_PUMP_AMBIENT_AIR
        | HEAT_PUMP_OUTDOOR_AIR
        | HEAT_PUMP_EXHAUST_AIR
        | DUAL_SERVICE_HEAT_PUMP
        | MULTI_BUILDING_HEAT_PUMP
        | DISTRICT_NETWORK => false,
    };
    storage_generator && energy.is_combustible()
}

/// Rendement annuel de génération avec stockage par combustion
///
/// - `becs`: annual DHW need [Wh], strictly positive
/// - `storage_losses`: annual storage losses [Wh]
/// - `performance`: rpn [-] (required), qp0 [W] and pveilleuse [W] (0 when absent)
pub fn rgs_combustion(
    gtype: GeneratorType,
    energy: EnergySource,
    becs: f32,
    storage_losses: f32,
    performance: &Performance,
) -> f32 {
    if !rgs_combustion_applicable(gtype, energy) {
        return 1.0;
    }
    let (rpn, qp0, pveilleuse) = nameplate(performance);
    if gtype == GeneratorType::FUEL_ACCUMULATOR {
        1.0 / ((1.0 / rpn)
            + (8592.0 * qp0 + storage_losses) / becs
            + 6970.0 * (pveilleuse / becs))
    } else {
        1.0 / ((1.0 / rpn)
            + (1790.0 * qp0 + storage_losses) / becs
            + 6970.0 * (0.5 * pveilleuse) / becs)
    }
}

/// rpn, qp0 and pveilleuse with their neutral defaults
///
/// A missing rpn is rejected by `System::check` before any combustion formula runs.
fn nameplate(performance: &Performance) -> (f32, f32, f32) {
    (
        performance.rpn.unwrap_or(1.0),
        performance.qp0.unwrap_or(0.0),
        performance.pveilleuse.unwrap_or(0.0),
    )
}
