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
Tables de valeurs forfaitaires
==============================

Tables réglementaires consultées par le moteur de rendement:

- Fecs: fraction solaire selon le bâtiment, la zone climatique, l'usage du système solaire
  et l'ancienneté de l'installation
- Rd: rendement de distribution selon la configuration du réseau
- Rg: rendement de génération par effet Joule selon le générateur et son énergie

Le moteur ne dépend que des traits `FecsTable`, `RdTable` et `RgTable`. Les types
`FecsData`, `RdData` et `RgData` en sont des implémentations en mémoire lues depuis un
format texte:

```text
#META DPE_SOURCE: Arrêté du 31 mars 2021
collective, looping, contiguous, in_heated_volume, rd
false, *, true, true, 0.93 # Production en volume habitable, pièces contiguës
```

Les lignes `#META` définissent les métadonnées, les autres lignes commençant par `#` et les
lignes vides sont ignorées, ainsi que la ligne d'en-tête.
*/

use std::fmt;
use std::str;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::EcsError;
use crate::types::{
    BuildingType, ClimateZone, EnergySource, GeneratorType, Looping, Meta, MetaVec, SolarUsage,
};

// --------------------------- Lookup contracts

/// Table des fractions solaires forfaitaires
pub trait FecsTable {
    /// Tabulated solar fraction for the key, if any
    fn find_by(&self, key: &FecsKey) -> Option<f32>;
}

/// Table des rendements de distribution forfaitaires
pub trait RdTable {
    /// Tabulated distribution yield for the key, if any
    fn find_by(&self, key: &RdKey) -> Option<f32>;
}

/// Table des rendements de génération par effet Joule
pub trait RgTable {
    /// Tabulated generation yield for the key, if any
    fn find_by(&self, key: &RgKey) -> Option<f32>;
}

/// Clé de recherche de la fraction solaire
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FecsKey {
    /// Building type
    pub building: BuildingType,
    /// Climate zone
    pub zone: ClimateZone,
    /// Usage of the solar system
    pub usage: SolarUsage,
    /// Age of the installation [years]
    pub age: i32,
}

impl fmt::Display for FecsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "building: {}, zone: {}, usage: {}, age: {}",
            self.building, self.zone, self.usage, self.age
        )
    }
}

/// Clé de recherche du rendement de distribution
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RdKey {
    /// Collective installation
    pub collective: bool,
    /// Looping of the network
    pub looping: Option<Looping>,
    /// Supplied rooms contiguous to the production
    pub contiguous: Option<bool>,
    /// Production inside the heated volume
    pub in_heated_volume: Option<bool>,
}

impl fmt::Display for RdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "collective: {}, looping: {}, contiguous: {}, in_heated_volume: {}",
            self.collective,
            opt_to_string(&self.looping),
            opt_to_string(&self.contiguous),
            opt_to_string(&self.in_heated_volume)
        )
    }
}

/// Clé de recherche du rendement de génération
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RgKey {
    /// Generator type
    pub generator: GeneratorType,
    /// Energy used by the generator
    pub energy: EnergySource,
}

impl fmt::Display for RgKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generator: {}, energy: {}", self.generator, self.energy)
    }
}

// --------------------------- Table entries

/// Fraction solaire forfaitaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FecsEntry {
    /// Building type
    pub building: BuildingType,
    /// Climate zone
    pub zone: ClimateZone,
    /// Usage of the solar system
    pub usage: SolarUsage,
    /// Minimum age of the installation (included) [years]
    pub age_min: i32,
    /// Maximum age of the installation (excluded), open when absent [years]
    pub age_max: Option<i32>,
    /// Solar fraction [-]
    pub fecs: f32,
    /// Descriptive comment
    pub comment: String,
}

impl FecsEntry {
    fn matches(&self, key: &FecsKey) -> bool {
        self.building == key.building
            && self.zone == key.zone
            && self.usage == key.usage
            && self.age_min <= key.age
            && self.age_max.map_or(true, |max| key.age < max)
    }
}

impl fmt::Display for FecsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let age_max = self
            .age_max
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{}, {}, {}, {}, {}, {:.3}{}",
            self.building,
            self.zone,
            self.usage,
            self.age_min,
            age_max,
            self.fecs,
            comment_suffix(&self.comment)
        )
    }
}

impl str::FromStr for FecsEntry {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<FecsEntry, Self::Err> {
        let (items, comment) = split_line(s);
        if items.len() != 6 {
            return Err(EcsError::TableParseError(s.into()));
        }
        let building: BuildingType = items[0]
            .parse()
            .map_err(|_| EcsError::ParseError(items[0].into()))?;
        let zone: ClimateZone = items[1]
            .parse()
            .map_err(|_| EcsError::ParseError(items[1].into()))?;
        let usage: SolarUsage = items[2]
            .parse()
            .map_err(|_| EcsError::ParseError(items[2].into()))?;
        let age_min: i32 = items[3].parse()?;
        let age_max: Option<i32> = match items[4] {
            "-" => None,
            v => Some(v.parse()?),
        };
        let fecs: f32 = items[5].parse()?;
        if !(0.0..=1.0).contains(&fecs) {
            return Err(EcsError::TableParseError(s.into()));
        }
        Ok(FecsEntry {
            building,
            zone,
            usage,
            age_min,
            age_max,
            fecs,
            comment,
        })
    }
}

/// Rendement de distribution forfaitaire
///
/// Fields set to `None` are wildcards (`*`) and match any key value, including a value that
/// is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdEntry {
    /// Collective installation
    pub collective: bool,
    /// Looping of the network
    pub looping: Option<Looping>,
    /// Supplied rooms contiguous to the production
    pub contiguous: Option<bool>,
    /// Production inside the heated volume
    pub in_heated_volume: Option<bool>,
    /// Distribution yield [-]
    pub rd: f32,
    /// Descriptive comment
    pub comment: String,
}

impl RdEntry {
    fn matches(&self, key: &RdKey) -> bool {
        self.collective == key.collective
            && self.looping.map_or(true, |v| key.looping == Some(v))
            && self.contiguous.map_or(true, |v| key.contiguous == Some(v))
            && self
                .in_heated_volume
                .map_or(true, |v| key.in_heated_volume == Some(v))
    }
}

impl fmt::Display for RdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {:.3}{}",
            self.collective,
            wildcard_to_string(&self.looping),
            wildcard_to_string(&self.contiguous),
            wildcard_to_string(&self.in_heated_volume),
            self.rd,
            comment_suffix(&self.comment)
        )
    }
}

impl str::FromStr for RdEntry {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<RdEntry, Self::Err> {
        let (items, comment) = split_line(s);
        if items.len() != 5 {
            return Err(EcsError::TableParseError(s.into()));
        }
        let collective: bool = items[0].parse()?;
        let looping: Option<Looping> = parse_wildcard(items[1])?;
        let contiguous: Option<bool> = parse_wildcard(items[2])?;
        let in_heated_volume: Option<bool> = parse_wildcard(items[3])?;
        let rd: f32 = items[4].parse()?;
        if !(rd > 0.0 && rd <= 1.0) {
            return Err(EcsError::TableParseError(s.into()));
        }
        Ok(RdEntry {
            collective,
            looping,
            contiguous,
            in_heated_volume,
            rd,
            comment,
        })
    }
}

/// Rendement de génération forfaitaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgEntry {
    /// Generator type
    pub generator: GeneratorType,
    /// Energy used by the generator
    pub energy: EnergySource,
    /// Generation yield [-]
    pub rg: f32,
    /// Descriptive comment
    pub comment: String,
}

impl fmt::Display for RgEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {:.3}{}",
            self.generator,
            self.energy,
            self.rg,
            comment_suffix(&self.comment)
        )
    }
}

impl str::FromStr for RgEntry {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<RgEntry, Self::Err> {
        let (items, comment) = split_line(s);
        if items.len() != 3 {
            return Err(EcsError::TableParseError(s.into()));
        }
        let generator: GeneratorType = items[0].parse()?;
        let energy: EnergySource = items[1].parse()?;
        let rg: f32 = items[2].parse()?;
        if !(rg.is_finite() && rg > 0.0) {
            return Err(EcsError::TableParseError(s.into()));
        }
        Ok(RgEntry {
            generator,
            energy,
            rg,
            comment,
        })
    }
}

// --------------------------- Tables

/// Liste de valeurs forfaitaires avec ses métadonnées
///
/// List of table entries bundled with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData<T> {
    /// Metadata
    pub meta: Vec<Meta>,
    /// Table entries
    pub data: Vec<T>,
}

impl<T> Default for TableData<T> {
    fn default() -> Self {
        Self {
            meta: Vec::new(),
            data: Vec::new(),
        }
    }
}

/// Table Fecs en mémoire
pub type FecsData = TableData<FecsEntry>;
/// Table Rd en mémoire
pub type RdData = TableData<RdEntry>;
/// Table Rg en mémoire
pub type RgData = TableData<RgEntry>;

impl<T> MetaVec for TableData<T> {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

impl<T: fmt::Display> fmt::Display for TableData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metalines = self.meta.iter().join("\n");
        let datalines = self.data.iter().join("\n");
        if metalines.is_empty() {
            write!(f, "{}", datalines)
        } else {
            write!(f, "{}\n{}", metalines, datalines)
        }
    }
}

/// First column name of the header line of each table
const HEADERS: [&str; 3] = ["building", "collective", "generator"];

fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .map(|first| first.trim().to_lowercase())
        .map_or(false, |first| HEADERS.contains(&first.as_str()))
}

impl<T> str::FromStr for TableData<T>
where
    T: str::FromStr<Err = EcsError>,
{
    type Err = EcsError;

    fn from_str(s: &str) -> Result<TableData<T>, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        let metalines = lines.iter().filter(|l| l.starts_with("#META"));
        let datalines = lines.iter().filter(|l| {
            !(l.starts_with('#')
                || l.is_empty()
                || is_header(l))
        });
        let meta = metalines
            .map(|e| e.parse())
            .collect::<Result<Vec<Meta>, _>>()?;
        let data = datalines
            .map(|e| e.parse())
            .collect::<Result<Vec<T>, _>>()?;
        Ok(TableData { meta, data })
    }
}

impl FecsTable for FecsData {
    fn find_by(&self, key: &FecsKey) -> Option<f32> {
        self.data.iter().find(|e| e.matches(key)).map(|e| e.fecs)
    }
}

impl RdTable for RdData {
    fn find_by(&self, key: &RdKey) -> Option<f32> {
        self.data.iter().find(|e| e.matches(key)).map(|e| e.rd)
    }
}

impl RgTable for RgData {
    fn find_by(&self, key: &RgKey) -> Option<f32> {
        self.data
            .iter()
            .find(|e| e.generator == key.generator && e.energy == key.energy)
            .map(|e| e.rg)
    }
}

// --------------------------- Helpers

/// Split a data line in trimmed fields and trailing comment
fn split_line(s: &str) -> (Vec<&str>, String) {
    let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
    let comment = items.get(1).unwrap_or(&"").to_string();
    let fields = items[0].split(',').map(str::trim).collect();
    (fields, comment)
}

fn comment_suffix(comment: &str) -> String {
    if comment.is_empty() {
        "".to_owned()
    } else {
        format!(" # {}", comment)
    }
}

fn parse_wildcard<T>(s: &str) -> Result<Option<T>, EcsError>
where
    T: str::FromStr,
{
    match s {
        "*" => Ok(None),
        v => v
            .parse()
            .map(Some)
            .map_err(|_| EcsError::ParseError(v.into())),
    }
}

fn wildcard_to_string<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "*".to_string())
}

fn opt_to_string<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RD_TEST: &str = "#META DPE_TABLE: RD
collective, looping, contiguous, in_heated_volume, rd
false, *, true, true, 0.930 # Volume habitable, pièces contiguës
false, *, *, *, 0.850
true, LOOPED, *, *, 0.750";

    #[test]
    fn rd_roundtrip() {
        let table: RdData = RD_TEST.parse().unwrap();
        assert_eq!(table.data.len(), 3);
        assert_eq!(table.get_meta("DPE_TABLE"), Some("RD".to_string()));
        let expected = "#META DPE_TABLE: RD
false, *, true, true, 0.930 # Volume habitable, pièces contiguës
false, *, *, *, 0.850
true, LOOPED, *, *, 0.750";
        assert_eq!(format!("{}", table), expected);
    }

    #[test]
    fn header_with_spaces_is_skipped() {
        let table: RgData = "generator , energy , rg\nBOILER, ELECTRICITY, 0.77"
            .parse()
            .unwrap();
        assert_eq!(table.data.len(), 1);
        let table: FecsData = "Building ,zone,usage,age_min,age_max,fecs".parse().unwrap();
        assert!(table.data.is_empty());
        assert!("buildings, zone".parse::<FecsData>().is_err());
    }

    #[test]
    fn table_metadata_update() {
        let mut table: RdData = RD_TEST.parse().unwrap();
        assert!(table.has_meta("DPE_TABLE"));
        assert!(!table.has_meta("DPE_ORIGINE"));
        table.set_meta("DPE_ORIGINE", "défaut");
        table.set_meta("DPE_TABLE", "RD_2021");
        assert_eq!(table.meta.len(), 2);
        assert_eq!(table.get_meta("DPE_TABLE"), Some("RD_2021".to_string()));
        assert!(format!("{}", table).starts_with(
            "#META DPE_TABLE: RD_2021\n#META DPE_ORIGINE: défaut\n"
        ));
    }

    #[test]
    fn rd_wildcards_and_order() {
        let table: RdData = RD_TEST.parse().unwrap();
        let key = RdKey {
            collective: false,
            looping: None,
            contiguous: Some(true),
            in_heated_volume: Some(true),
        };
        assert_eq!(table.find_by(&key), Some(0.93));
        // an unset value only matches a wildcard
        let key = RdKey {
            contiguous: None,
            ..key
        };
        assert_eq!(table.find_by(&key), Some(0.85));
        let key = RdKey {
            collective: true,
            looping: Some(Looping::UNLOOPED),
            contiguous: None,
            in_heated_volume: None,
        };
        assert_eq!(table.find_by(&key), None);
    }

    #[test]
    fn fecs_age_brackets() {
        let table: FecsData = "building, zone, usage, age_min, age_max, fecs
HOUSE, H1A, DHW_ONLY, 0, 5, 0.500
HOUSE, H1A, DHW_ONLY, 5, -, 0.400 # Installation ancienne"
            .parse()
            .unwrap();
        let key = |age| FecsKey {
            building: BuildingType::HOUSE,
            zone: ClimateZone::H1A,
            usage: SolarUsage::DHW_ONLY,
            age,
        };
        assert_eq!(table.find_by(&key(0)), Some(0.5));
        assert_eq!(table.find_by(&key(4)), Some(0.5));
        assert_eq!(table.find_by(&key(5)), Some(0.4));
        assert_eq!(table.find_by(&key(40)), Some(0.4));
        assert_eq!(table.find_by(&key(-1)), None);
        assert_eq!(
            format!("{}", table.data[1]),
            "HOUSE, H1A, DHW_ONLY, 5, -, 0.400 # Installation ancienne"
        );
    }

    #[test]
    fn rg_lookup() {
        let table: RgData = "VERTICAL_TANK, ELECTRICITY, 1.0\nBOILER, ELECTRICITY, 0.77"
            .parse()
            .unwrap();
        let key = RgKey {
            generator: GeneratorType::BOILER,
            energy: EnergySource::ELECTRICITY,
        };
        assert_eq!(table.find_by(&key), Some(0.77));
        let key = RgKey {
            generator: GeneratorType::INSTANTANEOUS,
            ..key
        };
        assert_eq!(table.find_by(&key), None);
    }

    #[test]
    fn bad_lines() {
        assert!("VERTICAL_TANK, ELECTRICITY".parse::<RgData>().is_err());
        assert!("VERTICAL_TANK, COAL, 1.0".parse::<RgData>().is_err());
        assert!("false, *, *, *, 1.5".parse::<RdData>().is_err());
        assert!("false, MAYBE, *, *, 0.8".parse::<RdData>().is_err());
        assert!("HOUSE, H1A, DHW_ONLY, 0, 5, 1.2".parse::<FecsData>().is_err());
        assert!("HOUSE, H4, DHW_ONLY, 0, 5, 0.2".parse::<FecsData>().is_err());
    }

    #[test]
    fn keys_display() {
        let key = RdKey {
            collective: true,
            looping: Some(Looping::HEAT_TRACED),
            contiguous: None,
            in_heated_volume: Some(false),
        };
        assert_eq!(
            format!("{}", key),
            "collective: true, looping: HEAT_TRACED, contiguous: -, in_heated_volume: false"
        );
    }
}
