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
Métadonnées des tables
======================

- Type Meta et ses traits
*/

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EcsError;

// ==================== Metadata types

/// Métadonnée d'une table de valeurs forfaitaires
///
/// Metadata of a lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// metadata name.
    pub key: String,
    /// metadata value
    pub value: String,
}

impl Meta {
    /// Metadata constructor
    pub fn new<T, U>(key: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#META {}: {}", self.key, self.value)
    }
}

impl str::FromStr for Meta {
    type Err = EcsError;

    fn from_str(s: &str) -> Result<Meta, Self::Err> {
        let s = s.trim();
        if !s.starts_with("#META") {
            return Err(EcsError::ParseError(s.into()));
        }
        let items: Vec<&str> = s[5..].splitn(2, ':').map(str::trim).collect();
        if items.len() == 2 && !items[0].is_empty() {
            Ok(Meta::new(items[0], items[1]))
        } else {
            Err(EcsError::ParseError(s.into()))
        }
    }
}

/// Trait commun pour gérer les métadonnées
pub trait MetaVec {
    /// Get vector of metadata
    fn get_metavec(&self) -> &Vec<Meta>;

    /// Get mutable vector of metadata
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta>;

    /// Check if key is included in metadata
    fn has_meta(&self, key: &str) -> bool {
        self.get_metavec().iter().any(|m| m.key == key)
    }

    /// Get (optional) metadata value by key
    fn get_meta(&self, key: &str) -> Option<String> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .map(|v| v.value.clone())
    }

    /// Update metadata value for key or insert new metadata.
    fn set_meta(&mut self, key: &str, value: &str) {
        let meta = self.get_mut_metavec();
        if let Some(m) = meta.iter_mut().find(|m| m.key == key) {
            m.value = value.to_string();
        } else {
            meta.push(Meta::new(key, value));
        };
    }
}
