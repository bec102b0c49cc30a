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

//! Core data-binding engine for RackMap inventory databases.
//!
//! This crate binds a raw document tree against a run-time schema and
//! produces a queryable object graph:
//!
//! - the [`Database`] loader dispatches each document literal against its
//!   schema type, builds the parent chain, resolves forward and back
//!   references, and indexes every object by type name in document order;
//! - expandable objects carry a compact range-set (`"srv[1-10]"`) and
//!   expand on demand into one concrete object per token, with sequential
//!   IDs correlated to expansion order;
//! - [`Database::dump`] re-serializes the graph back into the compact
//!   document form.
//!
//! The schema itself is data (see [`ObjectSchema`]); the document plumbing
//! lives in `rackmap-yaml`.

mod db;
mod defined;
mod dump;
mod error;
mod literal;
mod object;
mod rangeset;
mod schema;
mod value;

pub use db::Database;
pub use defined::{Bytes, DefinedType, DefinedTypes, Watts};
pub use dump::dump_object;
pub use error::{RackError, RackErrorKind, RackResult};
pub use literal::{Literal, LiteralMap};
pub use object::{LoadedObject, ObjectId};
pub use rangeset::expand_rangeset;
pub use schema::{NativeKind, ObjectSchema, Property, SchemaType};
pub use value::{ObjectList, ObjectRange, RangeId, Value};
