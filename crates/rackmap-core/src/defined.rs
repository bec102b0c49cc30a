// RackMap - Schema-driven datacenter inventory database
//
// Copyright (c) 2025 RackMap contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defined scalar types.
//!
//! Schemas can declare properties of named domain types ("bytes", "watts")
//! whose literals need richer parsing than native scalars. The loader
//! delegates those literals to the registered [`DefinedType`] parser and
//! propagates its failure verbatim.

use crate::error::{RackError, RackResult};
use crate::literal::Literal;
use crate::value::Value;
use indexmap::IndexMap;

/// Parser for one named domain scalar type.
pub trait DefinedType {
    /// The type name schemas refer to.
    fn name(&self) -> &str;

    /// Parse a raw literal into a bound value.
    fn parse(&self, literal: &Literal) -> RackResult<Value>;
}

/// Registry of defined types, looked up by name during dispatch.
#[derive(Default)]
pub struct DefinedTypes {
    types: IndexMap<String, Box<dyn DefinedType>>,
}

impl DefinedTypes {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard inventory types.
    pub fn standard() -> Self {
        let mut types = Self::new();
        types.register(Box::new(Bytes));
        types.register(Box::new(Watts));
        types
    }

    /// Register a parser under its own name, replacing any previous one.
    pub fn register(&mut self, ty: Box<dyn DefinedType>) {
        self.types.insert(ty.name().to_string(), ty);
    }

    /// Look up a parser by type name.
    pub fn get(&self, name: &str) -> Option<&dyn DefinedType> {
        self.types.get(name).map(Box::as_ref)
    }
}

impl std::fmt::Debug for DefinedTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinedTypes")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Splits a scalar like `"16GB"` into its numeric part and unit suffix.
fn split_unit(text: &str) -> Option<(f64, &str)> {
    let pos = text
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(pos);
    number.parse::<f64>().ok().map(|n| (n, unit))
}

/// Storage and memory sizes: `"16GB"` parses to an integer byte count.
pub struct Bytes;

impl DefinedType for Bytes {
    fn name(&self) -> &str {
        "bytes"
    }

    fn parse(&self, literal: &Literal) -> RackResult<Value> {
        let text = literal.as_str().ok_or_else(|| {
            RackError::defined_type(format!(
                "bytes literal must be a string, not {}",
                literal.kind()
            ))
        })?;
        let (number, unit) = split_unit(text)
            .ok_or_else(|| RackError::defined_type(format!("invalid bytes value '{}'", text)))?;
        let factor: u64 = match unit {
            "B" => 1,
            "KB" => 1 << 10,
            "MB" => 1 << 20,
            "GB" => 1 << 30,
            "TB" => 1 << 40,
            _ => {
                return Err(RackError::defined_type(format!(
                    "unknown bytes unit '{}' in '{}'",
                    unit, text
                )))
            }
        };
        Ok(Value::Int((number * factor as f64) as i64))
    }
}

/// Electric power: `"2.5kW"` parses to a float watt count.
pub struct Watts;

impl DefinedType for Watts {
    fn name(&self) -> &str {
        "watts"
    }

    fn parse(&self, literal: &Literal) -> RackResult<Value> {
        let text = literal.as_str().ok_or_else(|| {
            RackError::defined_type(format!(
                "watts literal must be a string, not {}",
                literal.kind()
            ))
        })?;
        let (number, unit) = split_unit(text)
            .ok_or_else(|| RackError::defined_type(format!("invalid watts value '{}'", text)))?;
        let factor = match unit {
            "W" => 1.0,
            "kW" => 1e3,
            "MW" => 1e6,
            _ => {
                return Err(RackError::defined_type(format!(
                    "unknown watts unit '{}' in '{}'",
                    unit, text
                )))
            }
        };
        Ok(Value::Float(number * factor))
    }
}
