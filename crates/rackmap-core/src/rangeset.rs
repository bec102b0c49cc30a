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

//! Range-set expansion.
//!
//! Expands compact cluster notation into an ordered list of discrete
//! tokens: `"srv[01-03],gw"` becomes `srv01, srv02, srv03, gw`. A part
//! carries at most one bracketed group of inclusive numeric ranges;
//! zero-padding is inferred from the width of a zero-prefixed start bound.
//! Expansion is pure and deterministic: the same spec always yields the
//! same tokens in the same order.

use crate::error::{RackError, RackResult};

/// Expand a range-set specification into its ordered tokens.
pub fn expand_rangeset(spec: &str) -> RackResult<Vec<String>> {
    if spec.trim().is_empty() {
        return Err(RackError::range("empty range set specification"));
    }
    let mut tokens = Vec::new();
    for part in split_parts(spec)? {
        expand_part(part.trim(), spec, &mut tokens)?;
    }
    Ok(tokens)
}

/// Split on commas outside bracket groups, checking bracket balance.
fn split_parts(spec: &str) -> RackResult<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (pos, ch) in spec.char_indices() {
        match ch {
            '[' => {
                depth += 1;
                if depth > 1 {
                    return Err(RackError::range(format!(
                        "nested bracket group in range set '{}'",
                        spec
                    )));
                }
            }
            ']' => {
                if depth == 0 {
                    return Err(RackError::range(format!(
                        "unbalanced ']' in range set '{}'",
                        spec
                    )));
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                parts.push(&spec[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(RackError::range(format!(
            "unbalanced '[' in range set '{}'",
            spec
        )));
    }
    parts.push(&spec[start..]);
    Ok(parts)
}

fn expand_part(part: &str, spec: &str, tokens: &mut Vec<String>) -> RackResult<()> {
    if part.is_empty() {
        return Err(RackError::range(format!("empty part in range set '{}'", spec)));
    }
    let Some(open) = part.find('[') else {
        tokens.push(part.to_string());
        return Ok(());
    };
    // split_parts already guaranteed a matching, non-nested close bracket
    let close = part.find(']').unwrap();
    let prefix = &part[..open];
    let body = &part[open + 1..close];
    let suffix = &part[close + 1..];
    if suffix.contains('[') {
        return Err(RackError::range(format!(
            "more than one bracket group in range set part '{}'",
            part
        )));
    }
    if body.is_empty() {
        return Err(RackError::range(format!(
            "empty bracket group in range set part '{}'",
            part
        )));
    }
    for item in body.split(',') {
        match item.split_once('-') {
            Some((lo, hi)) => {
                let (lo, width) = parse_bound(lo, part)?;
                let (hi, _) = parse_bound(hi, part)?;
                if lo > hi {
                    return Err(RackError::range(format!(
                        "reversed range {}-{} in range set part '{}'",
                        lo, hi, part
                    )));
                }
                for n in lo..=hi {
                    tokens.push(format_token(prefix, n, width, suffix));
                }
            }
            None => {
                let (n, width) = parse_bound(item, part)?;
                tokens.push(format_token(prefix, n, width, suffix));
            }
        }
    }
    Ok(())
}

/// Parse one numeric bound, returning the value and its padding width.
///
/// A zero-prefixed bound fixes the padding width for the whole range
/// (`01-16` yields two-digit tokens).
fn parse_bound(text: &str, part: &str) -> RackResult<(u64, usize)> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RackError::range(format!(
            "invalid range bound '{}' in range set part '{}'",
            text, part
        )));
    }
    let value = text.parse::<u64>().map_err(|_| {
        RackError::range(format!(
            "range bound '{}' out of range in range set part '{}'",
            text, part
        ))
    })?;
    let width = if text.starts_with('0') && text.len() > 1 {
        text.len()
    } else {
        0
    };
    Ok((value, width))
}

fn format_token(prefix: &str, n: u64, width: usize, suffix: &str) -> String {
    if width > 0 {
        format!("{}{:0width$}{}", prefix, n, suffix, width = width)
    } else {
        format!("{}{}{}", prefix, n, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RackErrorKind;

    // ==================== Plain token tests ====================

    #[test]
    fn test_single_plain_token() {
        assert_eq!(expand_rangeset("gateway").unwrap(), vec!["gateway"]);
    }

    #[test]
    fn test_comma_list_of_plain_tokens() {
        assert_eq!(
            expand_rangeset("alpha,bravo,charlie").unwrap(),
            vec!["alpha", "bravo", "charlie"]
        );
    }

    #[test]
    fn test_whitespace_after_commas() {
        assert_eq!(
            expand_rangeset("a, b, c").unwrap(),
            vec!["a", "b", "c"]
        );
    }

    // ==================== Bracket group tests ====================

    #[test]
    fn test_simple_range() {
        assert_eq!(
            expand_rangeset("srv[1-4]").unwrap(),
            vec!["srv1", "srv2", "srv3", "srv4"]
        );
    }

    #[test]
    fn test_zero_padded_range() {
        assert_eq!(
            expand_rangeset("srv[01-03]").unwrap(),
            vec!["srv01", "srv02", "srv03"]
        );
    }

    #[test]
    fn test_padding_survives_width_growth() {
        let tokens = expand_rangeset("n[008-011]").unwrap();
        assert_eq!(tokens, vec!["n008", "n009", "n010", "n011"]);
    }

    #[test]
    fn test_unpadded_range_crossing_ten() {
        let tokens = expand_rangeset("n[8-11]").unwrap();
        assert_eq!(tokens, vec!["n8", "n9", "n10", "n11"]);
    }

    #[test]
    fn test_single_value_group() {
        assert_eq!(expand_rangeset("srv[7]").unwrap(), vec!["srv7"]);
    }

    #[test]
    fn test_group_with_mixed_items() {
        assert_eq!(
            expand_rangeset("srv[1-2,5,8-9]").unwrap(),
            vec!["srv1", "srv2", "srv5", "srv8", "srv9"]
        );
    }

    #[test]
    fn test_group_with_suffix() {
        assert_eq!(
            expand_rangeset("esx[1-2]-mgmt").unwrap(),
            vec!["esx1-mgmt", "esx2-mgmt"]
        );
    }

    #[test]
    fn test_group_without_prefix() {
        assert_eq!(expand_rangeset("[1-3]").unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_mixed_parts_preserve_order() {
        assert_eq!(
            expand_rangeset("gw,srv[1-2],backup").unwrap(),
            vec!["gw", "srv1", "srv2", "backup"]
        );
    }

    #[test]
    fn test_single_node_range() {
        assert_eq!(expand_rangeset("node[64-64]").unwrap(), vec!["node64"]);
    }

    // ==================== Determinism ====================

    #[test]
    fn test_expansion_is_repeatable() {
        let spec = "srv[01-16],gw[1-2]";
        assert_eq!(expand_rangeset(spec).unwrap(), expand_rangeset(spec).unwrap());
    }

    // ==================== Error tests ====================

    #[test]
    fn test_empty_spec_fails() {
        let err = expand_rangeset("").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Range);
    }

    #[test]
    fn test_blank_spec_fails() {
        assert!(expand_rangeset("   ").is_err());
    }

    #[test]
    fn test_empty_part_fails() {
        assert!(expand_rangeset("a,,b").is_err());
    }

    #[test]
    fn test_unbalanced_open_fails() {
        let err = expand_rangeset("srv[1-4").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Range);
    }

    #[test]
    fn test_unbalanced_close_fails() {
        assert!(expand_rangeset("srv1-4]").is_err());
    }

    #[test]
    fn test_nested_brackets_fail() {
        assert!(expand_rangeset("srv[[1-4]]").is_err());
    }

    #[test]
    fn test_two_groups_in_one_part_fail() {
        assert!(expand_rangeset("r[1-2]u[1-4]").is_err());
    }

    #[test]
    fn test_empty_group_fails() {
        assert!(expand_rangeset("srv[]").is_err());
    }

    #[test]
    fn test_reversed_range_fails() {
        let err = expand_rangeset("srv[4-1]").unwrap_err();
        assert_eq!(err.kind, RackErrorKind::Range);
        assert!(err.message.contains("reversed"));
    }

    #[test]
    fn test_non_numeric_bound_fails() {
        assert!(expand_rangeset("srv[a-b]").is_err());
        assert!(expand_rangeset("srv[1-x]").is_err());
    }

    #[test]
    fn test_negative_bound_fails() {
        // The '-' is taken as the range separator, leaving an empty bound.
        assert!(expand_rangeset("srv[-1]").is_err());
    }

    // ==================== Property tests ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn expansion_count_matches_interval(lo in 0u64..200, span in 0u64..50) {
                let hi = lo + span;
                let tokens = expand_rangeset(&format!("n[{}-{}]", lo, hi)).unwrap();
                prop_assert_eq!(tokens.len() as u64, span + 1);
                prop_assert_eq!(&tokens[0], &format!("n{}", lo));
                prop_assert_eq!(&tokens[tokens.len() - 1], &format!("n{}", hi));
            }

            #[test]
            fn padded_tokens_keep_constant_width(lo in 1u64..90, span in 0u64..9) {
                let hi = lo + span;
                let spec = format!("n[{:03}-{:03}]", lo, hi);
                let tokens = expand_rangeset(&spec).unwrap();
                for token in &tokens {
                    prop_assert_eq!(token.len(), "n".len() + 3);
                }
            }
        }
    }
}
