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

//! Schema structures consumed by the loader.
//!
//! The schema is data, supplied at run time by an external description
//! format; this module only defines the typed structures the loader
//! dispatches on. Object schemas are shared behind [`Arc`] so that a type
//! declared once can appear as a nested object, a reference target, and a
//! back-reference target at the same time.

use std::fmt;
use std::sync::Arc;

/// Native scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeKind {
    /// String scalar.
    Str,
    /// Integer scalar.
    Int,
    /// Floating-point scalar.
    Float,
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "str"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// A schema type variant, dispatched on by the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// Native scalar of the given kind.
    Native(NativeKind),
    /// Domain-specific scalar, parsed by a registered defined type.
    Defined(String),
    /// Range-set string, expanded into one object per token.
    Expandable,
    /// Sequential numeric identifier correlated with expansion.
    RangeId,
    /// Ordered list of elements of one type.
    List(Box<SchemaType>),
    /// Nested object.
    Object(Arc<ObjectSchema>),
    /// Forward reference: matches `property` on already-loaded objects of
    /// the target type.
    Ref {
        target: Arc<ObjectSchema>,
        property: String,
    },
    /// Back reference: computed by walking the parent chain to the nearest
    /// ancestor of the target type, optionally projecting one property.
    BackRef {
        target: Arc<ObjectSchema>,
        property: Option<String>,
    },
}

impl SchemaType {
    /// Returns true for the back-reference variant, which is always
    /// computed and never supplied in the document.
    pub fn is_back_ref(&self) -> bool {
        matches!(self, Self::BackRef { .. })
    }

    /// Returns true for the expandable (range-set) variant.
    pub fn is_expandable(&self) -> bool {
        matches!(self, Self::Expandable)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(kind) => write!(f, "{}", kind),
            Self::Defined(name) => write!(f, "~{}", name),
            Self::Expandable => write!(f, "expandable"),
            Self::RangeId => write!(f, "rangeid"),
            Self::List(elem) => write!(f, "list[{}]", elem),
            Self::Object(obj) => write!(f, ":{}", obj.name),
            Self::Ref { target, property } => write!(f, "${}.{}", target.name, property),
            Self::BackRef { target, property } => match property {
                Some(p) => write!(f, "^{}.{}", target.name, p),
                None => write!(f, "^{}", target.name),
            },
        }
    }
}

/// One declared property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name, matched exactly against document keys.
    pub name: String,
    /// Type variant.
    pub ty: SchemaType,
    /// Whether the property must be bound after loading.
    pub required: bool,
}

/// Schema of one object type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    /// Type name, used as the type index key.
    pub name: String,
    /// Whether instances of this type are expandable.
    pub expandable: bool,
    /// Declared properties, in declaration order.
    pub properties: Vec<Property>,
}

impl ObjectSchema {
    /// Create an empty object schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expandable: false,
            properties: Vec::new(),
        }
    }

    /// Create an empty expandable object schema.
    pub fn expandable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expandable: true,
            properties: Vec::new(),
        }
    }

    /// Declare a property (chainable).
    pub fn property(mut self, name: impl Into<String>, ty: SchemaType, required: bool) -> Self {
        self.properties.push(Property {
            name: name.into(),
            ty,
            required,
        });
        self
    }

    /// Finish the declaration and share the schema.
    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Look up a declared property by exact name.
    pub fn prop(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schema[{}]", self.name)
    }
}
