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

//! Bound attribute values.

use crate::db::Database;
use crate::error::{RackError, RackResult};
use crate::literal::Literal;
use crate::object::{LoadedObject, ObjectId};
use crate::rangeset::expand_rangeset;
use std::fmt;

/// A range-set attribute of an expandable object.
///
/// Owns the compact specification and its expansion, computed once at
/// construction so malformed specs fail at load time. The token order is
/// the expander's canonical order and is stable across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRange {
    spec: String,
    tokens: Vec<String>,
}

impl ObjectRange {
    /// Wrap and expand a range-set specification.
    pub fn new(spec: impl Into<String>) -> RackResult<Self> {
        let spec = spec.into();
        let tokens = expand_rangeset(&spec)?;
        Ok(Self { spec, tokens })
    }

    /// The original compact specification.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The ordered expansion tokens.
    pub fn expanded(&self) -> &[String] {
        &self.tokens
    }

    /// Number of expansion slots.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the expansion is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ObjectRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}

/// A sequential-ID attribute of an expandable object.
///
/// Maps a 0-based expansion index to `start + index`; never materialized
/// as a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeId {
    start: i64,
}

impl RangeId {
    /// Create a generator with the given start value.
    pub fn new(start: i64) -> Self {
        Self { start }
    }

    /// The declared start value.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Identifier for the given expansion slot.
    pub fn index(&self, index: usize) -> i64 {
        self.start + index as i64
    }
}

/// An ordered collection of bound values.
///
/// Iterating the raw entries is possible with [`iter`](Self::iter); the
/// flattening view required for expandable object entries is provided by
/// [`objects`](Self::objects).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectList {
    items: Vec<Value>,
}

impl ObjectList {
    /// Create a list from bound values.
    pub fn new(items: Vec<Value>) -> Self {
        Self { items }
    }

    /// The raw entries, expandable entries included.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Iterate the raw entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Number of raw entries (pre-expansion).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flatten a list of objects, expanding expandable entries in place.
    ///
    /// Non-expandable entries pass through unchanged; the relative order of
    /// entries and the expansion order within each expandable entry are
    /// preserved. Fails if the list holds non-object entries.
    pub fn objects(&self, db: &Database) -> RackResult<Vec<LoadedObject>> {
        let mut result = Vec::new();
        for item in &self.items {
            match item {
                Value::Object(id) => {
                    let obj = db.get(*id).ok_or_else(|| {
                        RackError::schema_usage("list entry refers to an unknown object")
                    })?;
                    if obj.schema().expandable {
                        result.extend(obj.expanded()?);
                    } else {
                        result.push(obj.clone());
                    }
                }
                other => {
                    return Err(RackError::schema_usage(format!(
                        "cannot expand list entry of kind {}",
                        other.kind()
                    )))
                }
            }
        }
        Ok(result)
    }
}

impl<'a> IntoIterator for &'a ObjectList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A bound attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String scalar.
    Str(String),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Defined-type scalar: the parsed value plus the raw literal it came
    /// from, kept so dumps reproduce the document form.
    Defined {
        raw: Literal,
        parsed: Box<Value>,
    },
    /// Range-set container (expandable objects only).
    Range(ObjectRange),
    /// Sequential-ID generator (expandable objects only).
    RangeId(RangeId),
    /// Ordered collection.
    List(ObjectList),
    /// Nested object, owned through the arena.
    Object(ObjectId),
    /// Resolved reference to another object (non-owning).
    Ref(ObjectId),
}

impl Value {
    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Defined { parsed, .. } => parsed.as_str(),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Defined { parsed, .. } => parsed.as_int(),
            _ => None,
        }
    }

    /// Try to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Defined { parsed, .. } => parsed.as_float(),
            _ => None,
        }
    }

    /// Try to get the value as a range container.
    pub fn as_range(&self) -> Option<&ObjectRange> {
        match self {
            Self::Range(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get the value as a sequential-ID generator.
    pub fn as_range_id(&self) -> Option<&RangeId> {
        match self {
            Self::RangeId(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get the value as a list.
    pub fn as_list(&self) -> Option<&ObjectList> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get the value as an object handle (nested or referenced).
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Self::Object(id) | Self::Ref(id) => Some(*id),
            _ => None,
        }
    }

    /// Name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Defined { .. } => "defined",
            Self::Range(_) => "range",
            Self::RangeId(_) => "rangeid",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Ref(_) => "reference",
        }
    }

    /// Equality against a raw document literal, as used by forward
    /// reference matching.
    pub fn matches_literal(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (Self::Str(s), Literal::Str(l)) => s == l,
            (Self::Int(n), Literal::Int(l)) => n == l,
            (Self::Float(n), Literal::Float(l)) => n == l,
            (Self::Defined { raw, .. }, l) => raw == l,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Defined { parsed, .. } => write!(f, "{}", parsed),
            Self::Range(r) => write!(f, "{}", r.spec()),
            Self::RangeId(r) => write!(f, "{}", r.start()),
            Self::List(l) => write!(f, "[{} items]", l.len()),
            Self::Object(id) => write!(f, "object#{}", id),
            Self::Ref(id) => write!(f, "ref#{}", id),
        }
    }
}
