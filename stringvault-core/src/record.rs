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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::analyze;

/// Derived properties of a stored string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values)
    pub length: usize,

    /// Palindrome after lower-casing and stripping whitespace
    pub is_palindrome: bool,

    /// Number of distinct characters, case-sensitive
    pub unique_characters: usize,

    /// Number of whitespace-delimited tokens
    pub word_count: usize,

    /// SHA-256 of the raw value, identical to the record id
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,

    /// Occurrences per character, case-sensitive
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// One analyzed string, keyed by its content fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze `value` and stamp the record with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_timestamp(value, Utc::now())
    }

    pub fn with_timestamp(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);

        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at,
        }
    }
}
