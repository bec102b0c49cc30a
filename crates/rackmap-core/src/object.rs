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

//! Loaded objects and the expansion engine.
//!
//! Objects live in the database arena and point at each other through
//! [`ObjectId`] handles: the parent back-link is a handle, never an owning
//! pointer, so the graph stays cycle-free while back-reference chains remain
//! walkable.

use crate::error::{RackError, RackResult};
use crate::schema::ObjectSchema;
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Stable handle of a loaded object in the database arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One loaded instance of an object schema.
///
/// The schema is fixed at construction; attributes are bound during the
/// load pass and never mutated afterwards. Attribute order follows the
/// document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedObject {
    schema: Arc<ObjectSchema>,
    parent: Option<ObjectId>,
    attributes: IndexMap<String, Value>,
}

impl LoadedObject {
    /// Create an empty instance of a schema under the given parent.
    pub fn new(schema: Arc<ObjectSchema>, parent: Option<ObjectId>) -> Self {
        Self {
            schema,
            parent,
            attributes: IndexMap::new(),
        }
    }

    /// The governing schema.
    pub fn schema(&self) -> &Arc<ObjectSchema> {
        &self.schema
    }

    /// The schema's type name.
    pub fn type_name(&self) -> &str {
        &self.schema.name
    }

    /// Handle of the structural parent, absent at the document root.
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Bound attribute by name. `None` means the property was not bound,
    /// which is distinguishable from any present value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// All bound attributes in binding order.
    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub(crate) fn set(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }

    /// The single range attribute of an expandable instance, if any.
    pub fn range_attribute(&self) -> Option<(&str, &crate::value::ObjectRange)> {
        self.attributes.iter().find_map(|(name, value)| match value {
            Value::Range(range) => Some((name.as_str(), range)),
            _ => None,
        })
    }

    /// Materialize the expansion of this expandable object.
    ///
    /// Produces one concrete object per range token: stable attributes are
    /// cloned verbatim, the range attribute is replaced by the slot's token,
    /// and each sequential-ID attribute by its derived identifier. The
    /// result is pure and repeatable; members are fresh objects carrying the
    /// same schema and parent handle.
    pub fn expanded(&self) -> RackResult<Vec<LoadedObject>> {
        if !self.schema.expandable {
            return Err(RackError::schema_usage(format!(
                "object of type {} is not expandable",
                self.schema.name
            )));
        }

        let mut range = None;
        let mut range_ids = Vec::new();
        let mut stable = IndexMap::new();
        for (name, value) in &self.attributes {
            match value {
                Value::Range(r) => {
                    if range.replace((name.as_str(), r)).is_some() {
                        return Err(RackError::schema_usage(format!(
                            "expandable object of type {} holds more than one range attribute",
                            self.schema.name
                        )));
                    }
                }
                Value::RangeId(gen) => range_ids.push((name.as_str(), *gen)),
                other => {
                    stable.insert(name.clone(), other.clone());
                }
            }
        }
        let (range_name, range) = range.ok_or_else(|| {
            RackError::schema_usage(format!(
                "expandable object of type {} holds no range attribute",
                self.schema.name
            ))
        })?;

        let mut members = Vec::with_capacity(range.len());
        for (index, token) in range.expanded().iter().enumerate() {
            let mut member = LoadedObject::new(self.schema.clone(), self.parent);
            member.attributes = stable.clone();
            member.set(range_name, Value::Str(token.clone()));
            for (name, gen) in &range_ids {
                member.set(*name, Value::Int(gen.index(index)));
            }
            members.push(member);
        }
        Ok(members)
    }
}
