// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Input validation for API requests
//!
//! Turns raw request bodies and query strings into the typed values the
//! query engine expects. Everything that can be rejected is rejected here,
//! so the engine itself never sees malformed input.

use serde_json::Value;
use std::collections::HashMap;
use stringvault_core::{FilterSpec, Result, StringVaultError};

/// Pull the string to analyze out of a `{"value": ...}` body
pub fn extract_value(body: &Value) -> Result<String> {
    match body.get("value") {
        None | Some(Value::Null) => Err(StringVaultError::missing_field("value")),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(StringVaultError::type_mismatch("value", "string")),
    }
}

/// Require a non-blank natural-language query
pub fn require_query(query: Option<&str>) -> Result<&str> {
    match query {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(StringVaultError::missing_field("query")),
    }
}

/// Build a `FilterSpec` from query-string parameters.
///
/// Unknown parameters are ignored. A present but malformed parameter fails
/// the whole request with `InvalidFilterValue`.
pub fn parse_filter_params(params: &HashMap<String, String>) -> Result<FilterSpec> {
    let param = |name: &str| params.get(name).map(String::as_str);

    Ok(FilterSpec {
        is_palindrome: param("is_palindrome")
            .map(|raw| parse_bool("is_palindrome", raw))
            .transpose()?,
        min_length: param("min_length")
            .map(|raw| parse_count("min_length", raw))
            .transpose()?,
        max_length: param("max_length")
            .map(|raw| parse_count("max_length", raw))
            .transpose()?,
        word_count: param("word_count")
            .map(|raw| parse_count("word_count", raw))
            .transpose()?,
        contains_character: param("contains_character")
            .map(|raw| parse_character("contains_character", raw))
            .transpose()?,
    })
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(StringVaultError::invalid_filter(
            field,
            format!("expected true or false, got {:?}", raw),
        )),
    }
}

fn parse_count(field: &str, raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| {
        StringVaultError::invalid_filter(
            field,
            format!("expected a non-negative integer, got {:?}", raw),
        )
    })
}

fn parse_character(field: &str, raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(StringVaultError::invalid_filter(
            field,
            format!("expected exactly one character, got {:?}", raw),
        )),
    }
}
