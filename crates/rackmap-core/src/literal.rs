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

//! Schema-agnostic document model.
//!
//! The loader consumes a tree of mappings, sequences, and scalars produced
//! by the document plumbing (see `rackmap-yaml`). Mapping entries keep
//! document order: index order and declare-before-use reference resolution
//! both depend on it.

use indexmap::IndexMap;

/// An ordered document mapping.
pub type LiteralMap = IndexMap<String, Literal>;

/// A raw document value, before schema binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Absent/null value.
    Null,
    /// String scalar.
    Str(String),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Boolean scalar.
    Bool(bool),
    /// Ordered sequence.
    Seq(Vec<Literal>),
    /// Ordered mapping with string keys.
    Map(LiteralMap),
}

impl Literal {
    /// Try to get the literal as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the literal as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the literal as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the literal as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the literal as a sequence.
    pub fn as_seq(&self) -> Option<&[Literal]> {
        match self {
            Self::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the literal as a mapping.
    pub fn as_map(&self) -> Option<&LiteralMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Name of the literal kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Seq(items) => {
                write!(f, "[")?;
                for (pos, item) in items.iter().enumerate() {
                    if pos > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (pos, (key, value)) in map.iter().enumerate() {
                    if pos > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Accessor tests ====================

    #[test]
    fn test_literal_as_str() {
        assert_eq!(Literal::from("hello").as_str(), Some("hello"));
        assert_eq!(Literal::Int(1).as_str(), None);
    }

    #[test]
    fn test_literal_as_int() {
        assert_eq!(Literal::Int(42).as_int(), Some(42));
        assert_eq!(Literal::Float(42.0).as_int(), None);
        assert_eq!(Literal::from("42").as_int(), None);
    }

    #[test]
    fn test_literal_as_float() {
        assert_eq!(Literal::Float(1.5).as_float(), Some(1.5));
        // No implicit widening: integer literals are not floats.
        assert_eq!(Literal::Int(1).as_float(), None);
    }

    #[test]
    fn test_literal_as_bool() {
        assert_eq!(Literal::Bool(true).as_bool(), Some(true));
        assert_eq!(Literal::Int(1).as_bool(), None);
    }

    #[test]
    fn test_literal_as_seq() {
        let lit = Literal::Seq(vec![Literal::Int(1), Literal::Int(2)]);
        assert_eq!(lit.as_seq().map(|s| s.len()), Some(2));
        assert_eq!(Literal::Null.as_seq(), None);
    }

    #[test]
    fn test_literal_as_map() {
        let mut map = LiteralMap::new();
        map.insert("key".to_string(), Literal::Int(1));
        let lit = Literal::Map(map);
        assert!(lit.as_map().unwrap().contains_key("key"));
        assert_eq!(Literal::Null.as_map(), None);
    }

    // ==================== kind() tests ====================

    #[test]
    fn test_literal_kind() {
        assert_eq!(Literal::Null.kind(), "null");
        assert_eq!(Literal::from("a").kind(), "string");
        assert_eq!(Literal::Int(1).kind(), "integer");
        assert_eq!(Literal::Float(1.0).kind(), "float");
        assert_eq!(Literal::Bool(false).kind(), "boolean");
        assert_eq!(Literal::Seq(vec![]).kind(), "sequence");
        assert_eq!(Literal::Map(LiteralMap::new()).kind(), "mapping");
    }

    // ==================== Ordering tests ====================

    #[test]
    fn test_map_preserves_insertion_order() {
        let mut map = LiteralMap::new();
        map.insert("zulu".to_string(), Literal::Int(1));
        map.insert("alpha".to_string(), Literal::Int(2));
        map.insert("mike".to_string(), Literal::Int(3));

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_literal_equality() {
        assert_eq!(Literal::Int(1), Literal::Int(1));
        assert_ne!(Literal::Int(1), Literal::Float(1.0));
        assert_ne!(Literal::from("1"), Literal::Int(1));
    }

    #[test]
    fn test_literal_clone() {
        let lit = Literal::Seq(vec![Literal::from("a"), Literal::Null]);
        assert_eq!(lit.clone(), lit);
    }
}
