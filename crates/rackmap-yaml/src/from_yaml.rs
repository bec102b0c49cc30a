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

//! YAML documents to schema-agnostic literals.

use rackmap_core::{Literal, LiteralMap, RackError, RackResult};
use std::path::Path;

/// Parse a YAML document into a literal tree.
///
/// Mapping entries keep document order. Anchors and aliases are resolved by
/// the YAML parser before conversion.
pub fn from_yaml(yaml: &str) -> RackResult<Literal> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| RackError::parse(format!("YAML parse error: {}", e)))?;
    from_yaml_value(&value)
}

/// Convert an already-parsed YAML value into a literal tree.
pub fn from_yaml_value(value: &serde_yaml::Value) -> RackResult<Literal> {
    match value {
        serde_yaml::Value::Null => Ok(Literal::Null),
        serde_yaml::Value::Bool(b) => Ok(Literal::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Literal::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Literal::Float(f))
            } else {
                Err(RackError::parse(format!("unrepresentable number {}", n)))
            }
        }
        serde_yaml::Value::String(s) => Ok(Literal::Str(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let mut items = Vec::with_capacity(seq.len());
            for item in seq {
                items.push(from_yaml_value(item)?);
            }
            Ok(Literal::Seq(items))
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = LiteralMap::with_capacity(mapping.len());
            for (key, entry) in mapping {
                let key = key.as_str().ok_or_else(|| {
                    RackError::parse("mapping keys must be strings".to_string())
                })?;
                map.insert(key.to_string(), from_yaml_value(entry)?);
            }
            Ok(Literal::Map(map))
        }
        serde_yaml::Value::Tagged(tagged) => Err(RackError::parse(format!(
            "unsupported YAML tag {}",
            tagged.tag
        ))),
    }
}

/// Read and parse a YAML document file.
pub fn load_file(path: impl AsRef<Path>) -> RackResult<Literal> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|e| {
        RackError::io(format!("unable to read {}: {}", path.display(), e))
    })?;
    from_yaml(&yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackmap_core::RackErrorKind;

    // ==================== Scalar tests ====================

    #[test]
    fn test_from_yaml_scalars() {
        let doc = from_yaml("name: srv1\nheight: 42\nratio: 0.5\nactive: true\nnotes: null\n")
            .unwrap();
        let map = doc.as_map().unwrap();
        assert_eq!(map["name"], Literal::from("srv1"));
        assert_eq!(map["height"], Literal::Int(42));
        assert_eq!(map["ratio"], Literal::Float(0.5));
        assert_eq!(map["active"], Literal::Bool(true));
        assert_eq!(map["notes"], Literal::Null);
    }

    #[test]
    fn test_rangeset_spec_stays_a_string() {
        let doc = from_yaml("name: srv[1-10]\n").unwrap();
        assert_eq!(doc.as_map().unwrap()["name"], Literal::from("srv[1-10]"));
    }

    #[test]
    fn test_quoted_number_stays_a_string() {
        let doc = from_yaml("id: \"42\"\n").unwrap();
        assert_eq!(doc.as_map().unwrap()["id"], Literal::from("42"));
    }

    // ==================== Structure tests ====================

    #[test]
    fn test_mapping_preserves_document_order() {
        let doc = from_yaml("zulu: 1\nalpha: 2\nmike: 3\n").unwrap();
        let keys: Vec<&str> = doc.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_nested_structures() {
        let yaml = "\
racks:
  - name: R01
    nodes:
      - name: srv[1-3]
        slot: 10
";
        let doc = from_yaml(yaml).unwrap();
        let racks = doc.as_map().unwrap()["racks"].as_seq().unwrap();
        let nodes = racks[0].as_map().unwrap()["nodes"].as_seq().unwrap();
        let node = nodes[0].as_map().unwrap();
        assert_eq!(node["name"], Literal::from("srv[1-3]"));
        assert_eq!(node["slot"], Literal::Int(10));
    }

    #[test]
    fn test_anchors_are_resolved() {
        let yaml = "\
defaults: &d
  height: 42
racks:
  - *d
";
        let doc = from_yaml(yaml).unwrap();
        let racks = doc.as_map().unwrap()["racks"].as_seq().unwrap();
        assert_eq!(racks[0].as_map().unwrap()["height"], Literal::Int(42));
    }

    // ==================== Error tests ====================

    #[test]
    fn test_malformed_yaml_fails() {
        let err = from_yaml("{ racks: [").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Parse);
        assert!(err.message.contains("YAML parse error"));
    }

    #[test]
    fn test_non_string_key_fails() {
        let err = from_yaml("1: one\n").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Parse);
        assert!(err.message.contains("strings"));
    }

    #[test]
    fn test_tagged_value_fails() {
        let err = from_yaml("value: !custom 1\n").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Parse);
    }

    #[test]
    fn test_missing_file_fails_with_io() {
        let err = load_file("/nonexistent/inventory.yml").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Io);
        assert!(err.message.contains("inventory.yml"));
    }
}
