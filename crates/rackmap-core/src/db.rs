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

//! Generic database loader.
//!
//! [`Database::load`] performs one strictly sequential recursive descent
//! from the document root: the object loader binds each mapping against its
//! schema, the type dispatcher recurses into nested objects, lists, and
//! references, and every loaded object is registered in the type index
//! under its own schema name in document order. Reference resolution is
//! interleaved with loading and only sees objects registered earlier in the
//! traversal (declare-before-use). After `load` returns the database is
//! read-only.

use crate::defined::DefinedTypes;
use crate::error::{RackError, RackResult};
use crate::literal::Literal;
use crate::object::{LoadedObject, ObjectId};
use crate::schema::{NativeKind, ObjectSchema, SchemaType};
use crate::value::{ObjectList, ObjectRange, RangeId, Value};
use indexmap::IndexMap;
use std::sync::Arc;

/// Marker suffix letting a document key supply a sequence of range-set
/// literals for one expandable property.
pub(crate) const EXPANSION_LIST_MARKER: &str = "[]";

/// A loaded object graph with its type index.
#[derive(Debug)]
pub struct Database {
    objects: Vec<LoadedObject>,
    index: IndexMap<String, Vec<ObjectId>>,
    defined: DefinedTypes,
    root: Option<ObjectId>,
}

impl Database {
    /// Create an empty database with the standard defined types.
    pub fn new() -> Self {
        Self::with_defined_types(DefinedTypes::standard())
    }

    /// Create an empty database with a custom defined-type registry.
    pub fn with_defined_types(defined: DefinedTypes) -> Self {
        Self {
            objects: Vec::new(),
            index: IndexMap::new(),
            defined,
            root: None,
        }
    }

    /// Load a document into the database.
    ///
    /// Performs the single top-down load pass from the root literal with no
    /// parent. Any violation aborts the whole load with the first error
    /// encountered in traversal order.
    pub fn load(
        &mut self,
        literal: &Literal,
        schema: &Arc<ObjectSchema>,
    ) -> RackResult<ObjectId> {
        let root = self.load_object("_root", literal, schema, None)?;
        self.root = Some(root);
        Ok(root)
    }

    /// Handle of the document root object.
    pub fn root(&self) -> Option<ObjectId> {
        self.root
    }

    /// Look up a loaded object by handle.
    pub fn get(&self, id: ObjectId) -> Option<&LoadedObject> {
        self.objects.get(id.0)
    }

    /// Top-level attribute access, delegated to the root object.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.root.and_then(|id| self.objects[id.0].get(name))
    }

    /// Names of all loaded object types, in first-seen document order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Retrieve the loaded objects of one type, in document order.
    ///
    /// With `expand`, expandable entries are flattened into their expansion
    /// members in place; without it the pre-expansion index entries are
    /// returned as-is. Fails with `UnknownType` for a type name no loaded
    /// object carries.
    pub fn find_objects(&self, type_name: &str, expand: bool) -> RackResult<Vec<LoadedObject>> {
        let ids = self
            .index
            .get(type_name)
            .ok_or_else(|| RackError::unknown_type(format!("unknown object type {}", type_name)))?;
        let mut result = Vec::new();
        for &id in ids {
            let obj = &self.objects[id.0];
            if expand && obj.schema().expandable {
                result.extend(obj.expanded()?);
            } else {
                result.push(obj.clone());
            }
        }
        Ok(result)
    }

    fn alloc(&mut self, obj: LoadedObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(obj);
        id
    }

    /// Recursive type dispatch: bind one literal against one schema type.
    fn load_type(
        &mut self,
        token: &str,
        literal: &Literal,
        ty: &SchemaType,
        parent: Option<ObjectId>,
    ) -> RackResult<Value> {
        match ty {
            SchemaType::Native(kind) => load_native(token, literal, *kind),
            SchemaType::Defined(name) => self.load_defined(token, literal, name),
            SchemaType::Expandable => match literal {
                Literal::Str(spec) => Ok(Value::Range(ObjectRange::new(spec.clone())?)),
                other => Err(RackError::type_mismatch(format!(
                    "token {} is not a valid expandable string, found {}",
                    token,
                    other.kind()
                ))),
            },
            SchemaType::RangeId => match literal {
                Literal::Int(start) => Ok(Value::RangeId(RangeId::new(*start))),
                other => Err(RackError::type_mismatch(format!(
                    "token {} is not a valid rangeid integer, found {}",
                    token,
                    other.kind()
                ))),
            },
            SchemaType::List(element) => self.load_list(token, literal, element, parent),
            SchemaType::Object(schema) => Ok(Value::Object(
                self.load_object(token, literal, schema, parent)?,
            )),
            SchemaType::Ref { target, property } => {
                self.load_reference(token, literal, target, property)
            }
            SchemaType::BackRef { target, .. } => Err(RackError::schema_usage(format!(
                "back reference {} to {} cannot be supplied in the document",
                token, target.name
            ))),
        }
    }

    fn load_defined(&mut self, token: &str, literal: &Literal, name: &str) -> RackResult<Value> {
        let parser = self.defined.get(name).ok_or_else(|| {
            RackError::defined_type(format!(
                "no defined type {} registered for token {}",
                name, token
            ))
        })?;
        let parsed = parser.parse(literal)?;
        Ok(Value::Defined {
            raw: literal.clone(),
            parsed: Box::new(parsed),
        })
    }

    fn load_list(
        &mut self,
        token: &str,
        literal: &Literal,
        element: &SchemaType,
        parent: Option<ObjectId>,
    ) -> RackResult<Value> {
        let seq = literal.as_seq().ok_or_else(|| {
            RackError::type_mismatch(format!(
                "token {} must be a sequence, found {}",
                token,
                literal.kind()
            ))
        })?;
        let mut items = Vec::with_capacity(seq.len());
        for item in seq {
            items.push(self.load_type(token, item, element, parent)?);
        }
        Ok(Value::List(ObjectList::new(items)))
    }

    /// Construct and bind one object instance, then register it in the
    /// type index.
    fn load_object(
        &mut self,
        token: &str,
        literal: &Literal,
        schema: &Arc<ObjectSchema>,
        parent: Option<ObjectId>,
    ) -> RackResult<ObjectId> {
        let map = literal.as_map().ok_or_else(|| {
            RackError::type_mismatch(format!(
                "token {} of {} must be a mapping, found {}",
                token,
                schema,
                literal.kind()
            ))
        })?;

        // Allocated before binding so children can hold the parent handle.
        let id = self.alloc(LoadedObject::new(schema.clone(), parent));

        for (key, value_literal) in map {
            if let Some(prop) = schema.prop(key) {
                let value = self.load_type(key, value_literal, &prop.ty, Some(id))?;
                self.objects[id.0].set(key.clone(), value);
            } else if let Some(base) = key.strip_suffix(EXPANSION_LIST_MARKER) {
                let prop = schema.prop(base).ok_or_else(|| {
                    RackError::unknown_property(format!(
                        "property {} is not defined in schema for object {}",
                        key, schema
                    ))
                })?;
                if !prop.ty.is_expandable() {
                    return Err(RackError::schema_usage(format!(
                        "property {} of object {} is not expandable",
                        key, schema
                    )));
                }
                let value = self.load_expansion_list(key, value_literal, id)?;
                self.objects[id.0].set(base, value);
            } else {
                return Err(RackError::unknown_property(format!(
                    "property {} is not defined in schema for object {}",
                    key, schema
                )));
            }
        }

        // Back references are always computed, after all explicit keys.
        for prop in &schema.properties {
            if let SchemaType::BackRef { target, property } = &prop.ty {
                let value = self.load_back_reference(id, target, property.as_deref())?;
                self.objects[id.0].set(prop.name.clone(), value);
            }
        }

        for prop in &schema.properties {
            if prop.required && !prop.ty.is_back_ref() && self.objects[id.0].get(&prop.name).is_none()
            {
                return Err(RackError::missing_property(format!(
                    "property {} is required in schema for object {}",
                    prop.name, schema
                )));
            }
        }

        if schema.expandable {
            let ranges = self.objects[id.0]
                .attributes()
                .values()
                .filter(|v| matches!(v, Value::Range(_)))
                .count();
            if ranges == 0 {
                return Err(RackError::schema_usage(format!(
                    "expandable object {} holds no range attribute",
                    schema
                )));
            }
            if ranges > 1 {
                return Err(RackError::schema_usage(format!(
                    "expandable object {} holds more than one range attribute",
                    schema
                )));
            }
        }

        self.index.entry(schema.name.clone()).or_default().push(id);
        Ok(id)
    }

    /// Bind a `key[]` entry: a sequence of range-set literals for one
    /// expandable property, each dispatched independently.
    fn load_expansion_list(
        &mut self,
        token: &str,
        literal: &Literal,
        parent: ObjectId,
    ) -> RackResult<Value> {
        let seq = literal.as_seq().ok_or_else(|| {
            RackError::type_mismatch(format!(
                "token {} must be a sequence, found {}",
                token,
                literal.kind()
            ))
        })?;
        let mut items = Vec::with_capacity(seq.len());
        for item in seq {
            items.push(self.load_type(token, item, &SchemaType::Expandable, Some(parent))?);
        }
        Ok(Value::List(ObjectList::new(items)))
    }

    /// Resolve a forward reference against the objects loaded so far.
    ///
    /// Scans the target type's index bucket in document order with
    /// expansion applied; the first candidate whose match property equals
    /// the literal wins. Matched expansion members are materialized into
    /// the arena; stable matches keep their existing handle.
    fn load_reference(
        &mut self,
        token: &str,
        literal: &Literal,
        target: &Arc<ObjectSchema>,
        property: &str,
    ) -> RackResult<Value> {
        let ids = self.index.get(&target.name).cloned().ok_or_else(|| {
            RackError::reference(format!(
                "no objects of type {} loaded before reference {}",
                target.name, token
            ))
        })?;
        for id in ids {
            let obj = &self.objects[id.0];
            if obj.schema().expandable {
                for member in obj.expanded()? {
                    if member.get(property).map_or(false, |v| v.matches_literal(literal)) {
                        return Ok(Value::Ref(self.alloc(member)));
                    }
                }
            } else if obj.get(property).map_or(false, |v| v.matches_literal(literal)) {
                return Ok(Value::Ref(id));
            }
        }
        Err(RackError::reference(format!(
            "unable to find reference {} with value {}",
            token, literal
        )))
    }

    /// Resolve a back reference by walking the parent chain.
    ///
    /// Starts at the object being bound and stops at the nearest link whose
    /// schema matches the target type. An exhausted chain is a
    /// schema/document mismatch and fails.
    fn load_back_reference(
        &self,
        from: ObjectId,
        target: &Arc<ObjectSchema>,
        property: Option<&str>,
    ) -> RackResult<Value> {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let obj = &self.objects[id.0];
            if obj.type_name() == target.name {
                return match property {
                    None => Ok(Value::Ref(id)),
                    Some(name) => obj.get(name).cloned().ok_or_else(|| {
                        RackError::back_reference(format!(
                            "property {} of ancestor {} is not bound",
                            name, target.name
                        ))
                    }),
                };
            }
            cursor = obj.parent();
        }
        Err(RackError::back_reference(format!(
            "no ancestor of type {} in parent chain",
            target.name
        )))
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

fn load_native(token: &str, literal: &Literal, kind: NativeKind) -> RackResult<Value> {
    match (kind, literal) {
        (NativeKind::Str, Literal::Str(s)) => Ok(Value::Str(s.clone())),
        (NativeKind::Int, Literal::Int(n)) => Ok(Value::Int(*n)),
        (NativeKind::Float, Literal::Float(n)) => Ok(Value::Float(*n)),
        _ => Err(RackError::type_mismatch(format!(
            "token {} is not a valid {}, found {}",
            token,
            kind,
            literal.kind()
        ))),
    }
}
