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

//! YAML document plumbing for RackMap.
//!
//! Converts between YAML text and the schema-agnostic [`Literal`] trees the
//! core loader consumes. Document order of mapping entries is preserved in
//! both directions; the binding itself lives in `rackmap-core`.
//!
//! # Examples
//!
//! ```rust
//! use rackmap_yaml::from_yaml;
//!
//! let doc = from_yaml("racks:\n  - name: R01\n").unwrap();
//! assert!(doc.as_map().unwrap().contains_key("racks"));
//! ```
//!
//! [`Literal`]: rackmap_core::Literal

mod from_yaml;
mod to_yaml;

pub use from_yaml::{from_yaml, from_yaml_value, load_file};
pub use to_yaml::{to_yaml, to_yaml_value};
