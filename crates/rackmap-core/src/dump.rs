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

//! Re-serialization of a loaded database back into document literals.
//!
//! The dump is the inverse of the load pass over the compact form: ranges
//! dump as their spec string, sequential IDs as their start value, defined
//! values as their raw document literal, and references as the matched
//! property value. Computed back references are omitted, so loading the
//! dump reproduces an equal database.

use crate::db::{Database, EXPANSION_LIST_MARKER};
use crate::error::{RackError, RackResult};
use crate::literal::{Literal, LiteralMap};
use crate::object::LoadedObject;
use crate::schema::SchemaType;
use crate::value::Value;

impl Database {
    /// Dump the whole database as a document literal.
    pub fn dump(&self) -> RackResult<Literal> {
        let root = self
            .root()
            .and_then(|id| self.get(id))
            .ok_or_else(|| RackError::schema_usage("no document loaded"))?;
        dump_object(self, root)
    }
}

/// Dump one loaded object as a document mapping.
///
/// Properties are emitted in schema order; unbound optional properties and
/// computed back references are skipped. A property bound through the `[]`
/// marker is emitted back under its marker key.
pub fn dump_object(db: &Database, obj: &LoadedObject) -> RackResult<Literal> {
    let mut map = LiteralMap::new();
    for prop in &obj.schema().properties {
        if prop.ty.is_back_ref() {
            continue;
        }
        let value = match obj.get(&prop.name) {
            Some(value) => value,
            None => continue,
        };
        let key = match (&prop.ty, value) {
            (SchemaType::Expandable, Value::List(_)) => {
                format!("{}{}", prop.name, EXPANSION_LIST_MARKER)
            }
            _ => prop.name.clone(),
        };
        map.insert(key, dump_value(db, value, &prop.ty)?);
    }
    Ok(Literal::Map(map))
}

fn dump_value(db: &Database, value: &Value, ty: &SchemaType) -> RackResult<Literal> {
    match value {
        Value::Str(s) => Ok(Literal::Str(s.clone())),
        Value::Int(n) => Ok(Literal::Int(*n)),
        Value::Float(n) => Ok(Literal::Float(*n)),
        Value::Defined { raw, .. } => Ok(raw.clone()),
        Value::Range(range) => Ok(Literal::Str(range.spec().to_string())),
        Value::RangeId(gen) => Ok(Literal::Int(gen.start())),
        Value::List(list) => {
            let element = match ty {
                SchemaType::List(element) => element.as_ref(),
                other => other,
            };
            let mut items = Vec::with_capacity(list.len());
            for item in list {
                items.push(dump_value(db, item, element)?);
            }
            Ok(Literal::Seq(items))
        }
        Value::Object(id) => {
            let nested = db
                .get(*id)
                .ok_or_else(|| RackError::schema_usage("dangling object handle in dump"))?;
            dump_object(db, nested)
        }
        Value::Ref(id) => {
            let property = match ty {
                SchemaType::Ref { property, .. } => property.as_str(),
                other => {
                    return Err(RackError::schema_usage(format!(
                        "reference value bound to a property of type {}",
                        other
                    )))
                }
            };
            let target = db
                .get(*id)
                .ok_or_else(|| RackError::schema_usage("dangling reference handle in dump"))?;
            let matched = target.get(property).ok_or_else(|| {
                RackError::schema_usage(format!(
                    "match property {} of referenced {} is not bound",
                    property,
                    target.schema()
                ))
            })?;
            let matched_ty = target.schema().prop(property).map(|p| &p.ty).ok_or_else(|| {
                RackError::schema_usage(format!(
                    "match property {} is not defined in schema for {}",
                    property,
                    target.schema()
                ))
            })?;
            dump_value(db, matched, matched_ty)
        }
    }
}
