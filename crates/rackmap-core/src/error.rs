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

//! Error types for database loading.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while loading a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackErrorKind {
    /// Malformed input document (reported by the document plumbing).
    Parse,
    /// Scalar literal kind disagrees with the schema type.
    TypeMismatch,
    /// Document key not declared in the schema.
    UnknownProperty,
    /// Required property absent from the document.
    MissingProperty,
    /// Schema construct used where it is not legal.
    SchemaUsage,
    /// Forward reference cannot be matched.
    Reference,
    /// Back reference chain exhausted without a match.
    BackReference,
    /// Query for an undefined object type name.
    UnknownType,
    /// Defined-type scalar parser failure.
    DefinedType,
    /// Malformed range-set specification.
    Range,
    /// I/O error (file operations).
    Io,
}

impl fmt::Display for RackErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "ParseError"),
            Self::TypeMismatch => write!(f, "TypeMismatchError"),
            Self::UnknownProperty => write!(f, "UnknownPropertyError"),
            Self::MissingProperty => write!(f, "MissingPropertyError"),
            Self::SchemaUsage => write!(f, "SchemaUsageError"),
            Self::Reference => write!(f, "ReferenceError"),
            Self::BackReference => write!(f, "BackReferenceError"),
            Self::UnknownType => write!(f, "UnknownTypeError"),
            Self::DefinedType => write!(f, "DefinedTypeError"),
            Self::Range => write!(f, "RangeError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error that aborts a database load.
///
/// Loads are all-or-nothing: the first violation encountered in traversal
/// order is returned and no partial graph is exposed.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct RackError {
    /// The kind of error.
    pub kind: RackErrorKind,
    /// Human-readable error message naming the offending token.
    pub message: String,
    /// Additional context (e.g., "in object nodetype").
    pub context: Option<String>,
}

impl RackError {
    /// Create a new error.
    pub fn new(kind: RackErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::Parse, message)
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::TypeMismatch, message)
    }

    pub fn unknown_property(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::UnknownProperty, message)
    }

    pub fn missing_property(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::MissingProperty, message)
    }

    pub fn schema_usage(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::SchemaUsage, message)
    }

    pub fn reference(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::Reference, message)
    }

    pub fn back_reference(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::BackReference, message)
    }

    pub fn unknown_type(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::UnknownType, message)
    }

    pub fn defined_type(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::DefinedType, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::Range, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(RackErrorKind::Io, message)
    }
}

/// Result type for RackMap operations.
pub type RackResult<T> = Result<T, RackError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== RackErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display_parse() {
        assert_eq!(format!("{}", RackErrorKind::Parse), "ParseError");
    }

    #[test]
    fn test_error_kind_display_type_mismatch() {
        assert_eq!(
            format!("{}", RackErrorKind::TypeMismatch),
            "TypeMismatchError"
        );
    }

    #[test]
    fn test_error_kind_display_unknown_property() {
        assert_eq!(
            format!("{}", RackErrorKind::UnknownProperty),
            "UnknownPropertyError"
        );
    }

    #[test]
    fn test_error_kind_display_missing_property() {
        assert_eq!(
            format!("{}", RackErrorKind::MissingProperty),
            "MissingPropertyError"
        );
    }

    #[test]
    fn test_error_kind_display_schema_usage() {
        assert_eq!(format!("{}", RackErrorKind::SchemaUsage), "SchemaUsageError");
    }

    #[test]
    fn test_error_kind_display_reference() {
        assert_eq!(format!("{}", RackErrorKind::Reference), "ReferenceError");
    }

    #[test]
    fn test_error_kind_display_back_reference() {
        assert_eq!(
            format!("{}", RackErrorKind::BackReference),
            "BackReferenceError"
        );
    }

    #[test]
    fn test_error_kind_display_unknown_type() {
        assert_eq!(format!("{}", RackErrorKind::UnknownType), "UnknownTypeError");
    }

    #[test]
    fn test_error_kind_display_defined_type() {
        assert_eq!(format!("{}", RackErrorKind::DefinedType), "DefinedTypeError");
    }

    #[test]
    fn test_error_kind_display_range() {
        assert_eq!(format!("{}", RackErrorKind::Range), "RangeError");
    }

    #[test]
    fn test_error_kind_display_io() {
        assert_eq!(format!("{}", RackErrorKind::Io), "IOError");
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(RackErrorKind::Parse, RackErrorKind::Parse);
        assert_ne!(RackErrorKind::Parse, RackErrorKind::Reference);
    }

    // ==================== RackError tests ====================

    #[test]
    fn test_error_display() {
        let err = RackError::new(RackErrorKind::TypeMismatch, "token height is not an integer");
        let msg = format!("{}", err);
        assert!(msg.contains("TypeMismatchError"));
        assert!(msg.contains("token height is not an integer"));
    }

    #[test]
    fn test_error_with_context() {
        let err = RackError::reference("no match").with_context("in object rack");
        assert_eq!(err.context, Some("in object rack".to_string()));
    }

    #[test]
    fn test_error_parse() {
        let err = RackError::parse("test");
        assert_eq!(err.kind, RackErrorKind::Parse);
        assert_eq!(err.message, "test");
    }

    #[test]
    fn test_error_type_mismatch() {
        let err = RackError::type_mismatch("test");
        assert_eq!(err.kind, RackErrorKind::TypeMismatch);
    }

    #[test]
    fn test_error_unknown_property() {
        let err = RackError::unknown_property("test");
        assert_eq!(err.kind, RackErrorKind::UnknownProperty);
    }

    #[test]
    fn test_error_missing_property() {
        let err = RackError::missing_property("test");
        assert_eq!(err.kind, RackErrorKind::MissingProperty);
    }

    #[test]
    fn test_error_schema_usage() {
        let err = RackError::schema_usage("test");
        assert_eq!(err.kind, RackErrorKind::SchemaUsage);
    }

    #[test]
    fn test_error_reference() {
        let err = RackError::reference("test");
        assert_eq!(err.kind, RackErrorKind::Reference);
    }

    #[test]
    fn test_error_back_reference() {
        let err = RackError::back_reference("test");
        assert_eq!(err.kind, RackErrorKind::BackReference);
    }

    #[test]
    fn test_error_unknown_type() {
        let err = RackError::unknown_type("test");
        assert_eq!(err.kind, RackErrorKind::UnknownType);
    }

    #[test]
    fn test_error_defined_type() {
        let err = RackError::defined_type("test");
        assert_eq!(err.kind, RackErrorKind::DefinedType);
    }

    #[test]
    fn test_error_range() {
        let err = RackError::range("test");
        assert_eq!(err.kind, RackErrorKind::Range);
    }

    #[test]
    fn test_error_io() {
        let err = RackError::io("test");
        assert_eq!(err.kind, RackErrorKind::Io);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(RackError::parse("test"));
    }

    #[test]
    fn test_error_clone() {
        let original = RackError::reference("message").with_context("ctx");
        let cloned = original.clone();
        assert_eq!(original.kind, cloned.kind);
        assert_eq!(original.message, cloned.message);
        assert_eq!(original.context, cloned.context);
    }
}
