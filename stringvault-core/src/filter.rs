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

//! Structured filter specification.
//!
//! `FilterSpec` is the single value type produced both by query-string
//! parsing and by the natural-language interpreter. Absent fields impose
//! no constraint; present fields are combined with logical AND.

use serde::{Deserialize, Serialize};

use crate::record::StringRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Case-sensitive containment test against the raw value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// True when no field is set, i.e. the spec matches every record.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Evaluate every present predicate against `record`.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;

        self.is_palindrome
            .map_or(true, |expected| props.is_palindrome == expected)
            && self.min_length.map_or(true, |min| props.length >= min)
            && self.max_length.map_or(true, |max| props.length <= max)
            && self
                .word_count
                .map_or(true, |count| props.word_count == count)
            && self
                .contains_character
                .map_or(true, |c| record.value.contains(c))
    }

    /// A lower length bound above the upper bound can never match.
    pub fn has_length_conflict(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }
}
