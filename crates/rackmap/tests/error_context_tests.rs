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

//! Error context propagation through the public API.

use rackmap::{from_yaml, load, ObjectSchema, RackError, RackErrorKind, RackResultExt};

#[test]
fn test_parse_error_with_context() {
    let err = from_yaml("{ bad: [")
        .context("while loading inventory")
        .unwrap_err();
    assert_eq!(err.kind, RackErrorKind::Parse);
    assert_eq!(err.context, Some("while loading inventory".to_string()));
}

#[test]
fn test_load_error_with_lazy_context() {
    let schema = ObjectSchema::new("_root").build();
    let err = load("unexpected: 1\n", &schema)
        .with_context(|| format!("binding against {}", schema))
        .unwrap_err();
    assert_eq!(err.kind, RackErrorKind::UnknownProperty);
    assert!(err.context.unwrap().contains("Schema[_root]"));
}

#[test]
fn test_context_chain_reads_outermost_first() {
    fn inner() -> Result<(), RackError> {
        Err(RackError::reference("no match for srv9"))
    }
    fn outer() -> Result<(), RackError> {
        inner().context("in rack R01")
    }

    let err = outer().context("while loading inventory").unwrap_err();
    let ctx = err.context.unwrap();
    let outer_pos = ctx.find("while loading inventory").unwrap();
    let inner_pos = ctx.find("in rack R01").unwrap();
    assert!(outer_pos < inner_pos);
}

#[test]
fn test_display_keeps_kind_prefix() {
    let err = from_yaml("{ bad: [").context("ctx").unwrap_err();
    let text = format!("{}", err);
    assert!(text.starts_with("ParseError:"));
}

#[test]
fn test_io_result_converts_with_context() {
    let err = std::fs::read_to_string("/nonexistent/inventory.yml")
        .with_context(|| "reading inventory")
        .unwrap_err();
    assert_eq!(err.kind, RackErrorKind::Io);
    assert_eq!(err.context, Some("reading inventory".to_string()));
}
