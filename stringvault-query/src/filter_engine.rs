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

//! Filter evaluation over a record snapshot.
//!
//! The engine receives an already-typed `FilterSpec` and never fails;
//! input validation belongs to whoever built the spec.

use serde::{Deserialize, Serialize};
use stringvault_core::{FilterSpec, StringRecord};

/// Records that passed a filter, with the filter echoed back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredRecords {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSpec,
}

/// Keep every record that satisfies all present predicates of `spec`.
pub fn apply<I>(records: I, spec: &FilterSpec) -> FilteredRecords
where
    I: IntoIterator<Item = StringRecord>,
{
    let data: Vec<StringRecord> = records
        .into_iter()
        .filter(|record| spec.matches(record))
        .collect();

    FilteredRecords {
        count: data.len(),
        data,
        filters_applied: spec.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn records(values: &[&str]) -> Vec<StringRecord> {
        values.iter().map(|v| StringRecord::new(*v)).collect()
    }

    fn values(result: &FilteredRecords) -> HashSet<String> {
        result.data.iter().map(|r| r.value.clone()).collect()
    }

    #[test]
    fn test_and_composition() {
        let spec = FilterSpec {
            min_length: Some(2),
            contains_character: Some('a'),
            ..Default::default()
        };

        let result = apply(records(&["aa", "aaa", "bb", "a"]), &spec);

        assert_eq!(
            values(&result),
            HashSet::from(["aa".to_string(), "aaa".to_string()])
        );
        assert_eq!(result.count, 2);
        assert_eq!(
            serde_json::to_value(&result.filters_applied).unwrap(),
            serde_json::json!({"min_length": 2, "contains_character": "a"})
        );
    }

    #[test]
    fn test_every_predicate() {
        let pool = records(&["racecar", "level up", "noon", "hello world", "x"]);

        let palindromes = FilterSpec {
            is_palindrome: Some(true),
            ..Default::default()
        };
        assert_eq!(
            values(&apply(pool.clone(), &palindromes)),
            HashSet::from(["racecar".to_string(), "noon".to_string(), "x".to_string()])
        );

        let two_words = FilterSpec {
            word_count: Some(2),
            ..Default::default()
        };
        assert_eq!(
            values(&apply(pool.clone(), &two_words)),
            HashSet::from(["level up".to_string(), "hello world".to_string()])
        );

        let bounded = FilterSpec {
            min_length: Some(4),
            max_length: Some(7),
            ..Default::default()
        };
        assert_eq!(
            values(&apply(pool.clone(), &bounded)),
            HashSet::from(["racecar".to_string(), "noon".to_string()])
        );

        let not_palindrome = FilterSpec {
            is_palindrome: Some(false),
            ..Default::default()
        };
        assert_eq!(apply(pool, &not_palindrome).count, 2);
    }

    #[test]
    fn test_empty_spec_returns_everything_and_echoes_nothing() {
        let result = apply(records(&["a", "b"]), &FilterSpec::default());
        assert_eq!(result.count, 2);
        assert_eq!(
            serde_json::to_value(&result.filters_applied).unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let spec = FilterSpec {
            min_length: Some(5),
            max_length: Some(2),
            ..Default::default()
        };
        assert_eq!(apply(records(&["abc", "abcdef"]), &spec).count, 0);
    }
}
