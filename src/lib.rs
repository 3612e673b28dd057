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
DpeEcs
======

This crate provides a library and binary that **implements the domestic hot water (DHW)
efficiency calculation of the French 3CL-DPE method** used in building energy audits
(Diagnostic de Performance Énergétique).

From the description of a DHW system (generator type and energy, nameplate performance,
distribution network, storage losses, annual need for each usage scenario and solar
contribution) it computes, for every usage scenario:

- the solar coverage fraction (Fecs)
- the distribution yield (Rd)
- the storage yield (Rs)
- the generation yield (Rg)
- the generation with storage yield (Rgs)
- the consumption index Iecs = 1 / (Rg · Rgs · Rd · Rs), which converts the DHW need into
  final energy consumption

Tabulated values (Fecs, Rd, Rg) are read through the `FecsTable`, `RdTable` and `RgTable`
traits. In-memory tables can be read from a simple text format and default Rd and Rg
tables are bundled in the `data` module.

It also holds the following assumptions:

- the calculation is done for a single DHW system; aggregation of several systems is left
  to the caller
- the space heating variant of the method is not covered

Ce *crate* fournit une bibliothèque et un programme qui **implémentent le calcul des
rendements de l'eau chaude sanitaire de la méthode 3CL-DPE**.

# Exemple

```rust
use dpeecs::*;

let system: System = r#"{
    "building": {"type": "HOUSE", "climate_zone": "H1A",
                 "installation_year": 2005, "calculation_year": 2024},
    "generator": {"type": "VERTICAL_TANK", "energy": "ELECTRICITY",
                  "in_heated_volume": true},
    "network": {"contiguous": true},
    "storage_losses": {"conventional": 800000.0, "intensive": 800000.0},
    "needs": {"conventional": 1800000.0, "intensive": 2500000.0}
}"#.parse().unwrap();

let rd = data::default_rd().unwrap();
let rg = data::default_rg().unwrap();
let fecs = data::empty_fecs();

let result = Engine::new(&fecs, &rd, &rg).compute(&system).unwrap();
println!("{}", result.to_plain());
```

*/

#![deny(missing_docs)]

mod asplain;
mod engine;
mod vecops;

pub mod data;
pub mod error;
pub mod tables;
pub mod types;

pub use asplain::*;
pub use engine::*;
pub use error::{EcsError, Table};
pub use tables::{FecsTable, RdTable, RgTable};
pub use types::*;

/// Numéro de version de la bibliothèque
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
