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

//! Literal trees back to YAML text, used to write database dumps.

use rackmap_core::{Literal, RackError, RackResult};

/// Serialize a literal tree as a YAML document string.
pub fn to_yaml(literal: &Literal) -> RackResult<String> {
    serde_yaml::to_string(&to_yaml_value(literal))
        .map_err(|e| RackError::parse(format!("YAML serialization error: {}", e)))
}

/// Convert a literal tree into a YAML value.
pub fn to_yaml_value(literal: &Literal) -> serde_yaml::Value {
    match literal {
        Literal::Null => serde_yaml::Value::Null,
        Literal::Str(s) => serde_yaml::Value::String(s.clone()),
        Literal::Int(n) => serde_yaml::Value::Number((*n).into()),
        Literal::Float(n) => serde_yaml::Value::Number((*n).into()),
        Literal::Bool(b) => serde_yaml::Value::Bool(*b),
        Literal::Seq(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_yaml_value).collect())
        }
        Literal::Map(map) => {
            let mut mapping = serde_yaml::Mapping::with_capacity(map.len());
            for (key, value) in map {
                mapping.insert(
                    serde_yaml::Value::String(key.clone()),
                    to_yaml_value(value),
                );
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}
