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

//! RackMap - schema-driven datacenter inventory database.
//!
//! RackMap binds YAML inventory documents against a run-time schema and
//! produces a queryable object graph. Expandable objects describe whole
//! groups of equipment with one compact entry (`name: srv[1-100]`) and
//! expand on demand; forward and back references knit the graph together
//! at load time.
//!
//! # Examples
//!
//! ```rust
//! use rackmap::{load, NativeKind, ObjectSchema, SchemaType, Value};
//!
//! let nodetype = ObjectSchema::new("nodetype")
//!     .property("id", SchemaType::Native(NativeKind::Str), true)
//!     .property("model", SchemaType::Native(NativeKind::Str), true)
//!     .build();
//! let node = ObjectSchema::expandable("node")
//!     .property("name", SchemaType::Expandable, true)
//!     .property(
//!         "type",
//!         SchemaType::Ref {
//!             target: nodetype.clone(),
//!             property: "id".to_string(),
//!         },
//!         true,
//!     )
//!     .build();
//! let root = ObjectSchema::new("_root")
//!     .property(
//!         "nodetypes",
//!         SchemaType::List(Box::new(SchemaType::Object(nodetype))),
//!         true,
//!     )
//!     .property(
//!         "nodes",
//!         SchemaType::List(Box::new(SchemaType::Object(node))),
//!         true,
//!     )
//!     .build();
//!
//! let yaml = "\
//! nodetypes:
//!   - id: dx100
//!     model: Hyperion DX-100
//! nodes:
//!   - name: srv[1-4]
//!     type: dx100
//! ";
//! let db = load(yaml, &root).unwrap();
//! let nodes = db.find_objects("node", true).unwrap();
//! assert_eq!(nodes.len(), 4);
//! assert_eq!(nodes[0].get("name").and_then(Value::as_str), Some("srv1"));
//! ```

mod error_ext;

pub use error_ext::RackResultExt;

pub use rackmap_core::{
    dump_object, expand_rangeset, Bytes, Database, DefinedType, DefinedTypes, Literal,
    LiteralMap, LoadedObject, NativeKind, ObjectId, ObjectList, ObjectRange, ObjectSchema,
    Property, RackError, RackErrorKind, RackResult, RangeId, SchemaType, Value, Watts,
};
pub use rackmap_yaml::{from_yaml, from_yaml_value, to_yaml, to_yaml_value};

use std::path::Path;
use std::sync::Arc;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a YAML inventory document against a root schema.
pub fn load(yaml: &str, schema: &Arc<ObjectSchema>) -> RackResult<Database> {
    let literal = from_yaml(yaml)?;
    let mut db = Database::new();
    db.load(&literal, schema)?;
    Ok(db)
}

/// Load a YAML inventory file against a root schema.
pub fn load_file(path: impl AsRef<Path>, schema: &Arc<ObjectSchema>) -> RackResult<Database> {
    let literal = rackmap_yaml::load_file(path)?;
    let mut db = Database::new();
    db.load(&literal, schema)?;
    Ok(db)
}

/// Dump a loaded database back to YAML text in the compact document form.
pub fn dump_yaml(db: &Database) -> RackResult<String> {
    to_yaml(&db.dump()?)
}
