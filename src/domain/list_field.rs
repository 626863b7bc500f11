// src/domain/list_field.rs

//! Normalizes list-like cells (`llm_pros`, `llm_cons`) into short phrases.
//!
//! Cells arrive in one of three ad hoc encodings:
//! - a Python-style list literal: `['Location', 'Staff']`
//! - pipe separated: `Location|Staff|Breakfast`
//! - comma separated: `Location, Staff, Breakfast`
//!
//! Anything else is a single phrase. Parsing never fails; odd input just
//! degrades to a weaker rule.

use tracing::debug;

/// Splits a raw cell into trimmed, non-empty phrases, in source order.
///
/// The first matching rule wins: empty, bracketed, pipe, comma, single.
/// A value holding both `|` and `,` is pipe separated.
pub fn parse_list(raw: Option<&str>) -> Vec<String> {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    if (s.starts_with("['") || s.starts_with("[\"")) && s.ends_with(']') {
        return match split_bracketed(s) {
            Some(items) => items,
            None => {
                debug!(value = s, "bracketed list too short, keeping as one phrase");
                vec![s.to_string()]
            }
        };
    }

    if s.contains('|') {
        return split_on(s, '|');
    }

    if s.contains(',') {
        return split_on(s, ',');
    }

    vec![s.to_string()]
}

/// Drops the two leading and two trailing characters, then splits on `', '`
/// or `", "`. This is a heuristic, not a literal parser: anything not shaped
/// like `['a', 'b']` comes out garbled rather than rejected.
///
/// Returns `None` when the value is too short for the leading and trailing
/// pairs not to overlap.
fn split_bracketed(s: &str) -> Option<Vec<String>> {
    let start = s.char_indices().nth(2)?.0;
    let end = s.char_indices().rev().nth(1)?.0;
    if start > end {
        return None;
    }

    let items = s[start..end]
        .split("', '")
        .flat_map(|piece| piece.split("\", \""))
        .map(|piece| piece.replace(['\'', '"'], "").trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect();

    Some(items)
}

fn split_on(s: &str, sep: char) -> Vec<String> {
    s.split(sep)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
