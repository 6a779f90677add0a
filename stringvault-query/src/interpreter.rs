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

//! Natural Language Query Interpreter
//!
//! Translates free-text queries into a `FilterSpec` with a fixed set of
//! phrase patterns. This is pattern matching, not language understanding:
//! every pattern is tried against the lower-cased query and all matches
//! are merged into one spec.
//!
//! ## Example Queries
//!
//! - "all single word palindromic strings"
//! - "strings longer than 10 characters"
//! - "palindromic strings that contain the first vowel"
//! - "strings containing the letter z"
//! - "strings with at least 3 characters shorter than 8"
//!
//! A query in which no pattern fires is `Unparseable`; it is never turned
//! into an empty spec, since an empty spec means "match everything".

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use stringvault_core::{FilterSpec, Result, StringVaultError};
use tracing::debug;

/// Outcome of interpreting a query: the text as received and what it became
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSpec,
}

struct FilterPattern {
    regex: Regex,
    /// Returns false when the match could not be turned into a constraint
    apply: fn(&Captures, &mut FilterSpec) -> bool,
}

/// Pattern-based natural language query interpreter
pub struct QueryInterpreter {
    patterns: Vec<FilterPattern>,
}

impl QueryInterpreter {
    /// Create a new interpreter
    pub fn new() -> Self {
        Self {
            patterns: Self::build_patterns(),
        }
    }

    fn build_patterns() -> Vec<FilterPattern> {
        vec![
            // "single word", "one-word"
            FilterPattern {
                regex: Regex::new(r"\b(?:single|one)[\s-]+word\b").unwrap(),
                apply: |_, spec| {
                    spec.word_count = Some(1);
                    true
                },
            },
            // "palindrome", "palindromes", "palindromic"
            FilterPattern {
                regex: Regex::new(r"\bpalindrom(?:e|es|ic)\b").unwrap(),
                apply: |_, spec| {
                    spec.is_palindrome = Some(true);
                    true
                },
            },
            // "longer than N" is strict
            FilterPattern {
                regex: Regex::new(r"\blonger\s+than\s+(\d+)\b").unwrap(),
                apply: |caps, spec| {
                    match capture_number(caps).and_then(|n| n.checked_add(1)) {
                        Some(min) => tighten_min_length(spec, min),
                        None => false,
                    }
                },
            },
            // "at least N" is inclusive
            FilterPattern {
                regex: Regex::new(r"\bat\s+least\s+(\d+)\b").unwrap(),
                apply: |caps, spec| match capture_number(caps) {
                    Some(min) => tighten_min_length(spec, min),
                    None => false,
                },
            },
            // "shorter than N" is strict; "shorter than 0" yields nothing
            FilterPattern {
                regex: Regex::new(r"\bshorter\s+than\s+(\d+)\b").unwrap(),
                apply: |caps, spec| {
                    match capture_number(caps).and_then(|n| n.checked_sub(1)) {
                        Some(max) => tighten_max_length(spec, max),
                        None => false,
                    }
                },
            },
            // "at most N" is inclusive
            FilterPattern {
                regex: Regex::new(r"\bat\s+most\s+(\d+)\b").unwrap(),
                apply: |caps, spec| match capture_number(caps) {
                    Some(max) => tighten_max_length(spec, max),
                    None => false,
                },
            },
            // "containing z", "contains the letter z", "containing the character 7"
            FilterPattern {
                regex: Regex::new(
                    r"\bcontain(?:s|ing)?\s+(?:the\s+)?(?:letter\s+|character\s+)?([a-z0-9])\b",
                )
                .unwrap(),
                apply: |caps, spec| match caps.get(1).and_then(|m| m.as_str().chars().next()) {
                    Some(c) => set_character(spec, c),
                    None => false,
                },
            },
            // "first vowel" is taken to mean 'a'
            FilterPattern {
                regex: Regex::new(r"\bfirst\s+vowel\b").unwrap(),
                apply: |_, spec| set_character(spec, 'a'),
            },
        ]
    }

    /// Interpret a natural language query as a filter specification.
    ///
    /// Fails with `Unparseable` when no pattern matched and with
    /// `ConflictingFilters` when the derived length bounds cannot both hold.
    pub fn interpret(&self, query: &str) -> Result<InterpretedQuery> {
        let lowered = query.trim().to_lowercase();
        let mut spec = FilterSpec::default();
        let mut matched = false;

        for pattern in &self.patterns {
            for caps in pattern.regex.captures_iter(&lowered) {
                matched |= (pattern.apply)(&caps, &mut spec);
            }
        }

        if !matched {
            debug!(query = %query, "No filter pattern matched");
            return Err(StringVaultError::Unparseable(query.to_string()));
        }

        if spec.has_length_conflict() {
            return Err(StringVaultError::ConflictingFilters(format!(
                "min_length {} exceeds max_length {}",
                spec.min_length.unwrap_or_default(),
                spec.max_length.unwrap_or_default()
            )));
        }

        debug!(query = %query, filters = ?spec, "Interpreted query");
        Ok(InterpretedQuery {
            original: query.to_string(),
            parsed_filters: spec,
        })
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn capture_number(caps: &Captures) -> Option<usize> {
    caps.get(1)?.as_str().parse().ok()
}

fn tighten_min_length(spec: &mut FilterSpec, min: usize) -> bool {
    spec.min_length = Some(spec.min_length.map_or(min, |current| current.max(min)));
    true
}

fn tighten_max_length(spec: &mut FilterSpec, max: usize) -> bool {
    spec.max_length = Some(spec.max_length.map_or(max, |current| current.min(max)));
    true
}

// The first character set is kept. Explicit characters are applied before
// the "first vowel" fallback.
fn set_character(spec: &mut FilterSpec, c: char) -> bool {
    spec.contains_character.get_or_insert(c);
    true
}
