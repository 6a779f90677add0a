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

//! Query engine for Stringvault
//!
//! Single entry point combining the content store, the filter engine and
//! the natural-language interpreter.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stringvault_core::{FilterSpec, Result, StringRecord};
use stringvault_storage::ContentStore;
use tracing::{debug, info};

use crate::filter_engine::{self, FilteredRecords};
use crate::interpreter::{InterpretedQuery, QueryInterpreter};

/// Records selected by a natural-language query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResults {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Main Stringvault interface
///
/// Thread-safe; share it across tasks through an `Arc`. Structured and
/// natural-language listing both end in `filter_engine::apply`, so an
/// interpreted query and its equivalent structured spec always select the
/// same records.
pub struct StringVault {
    store: Arc<ContentStore>,
    interpreter: QueryInterpreter,
}

impl StringVault {
    /// Create an engine over a fresh, empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(ContentStore::new()))
    }

    pub fn with_store(store: Arc<ContentStore>) -> Self {
        info!(records = store.len(), "Stringvault engine ready");
        Self {
            store,
            interpreter: QueryInterpreter::new(),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Analyze and store a new string
    pub fn insert(&self, value: &str) -> Result<StringRecord> {
        self.store.insert(value)
    }

    pub fn get_by_value(&self, value: &str) -> Result<StringRecord> {
        self.store.get(value)
    }

    pub fn delete_by_value(&self, value: &str) -> Result<()> {
        self.store.delete(value)
    }

    /// List records matching a structured filter
    pub fn list_filtered(&self, spec: &FilterSpec) -> FilteredRecords {
        let result = filter_engine::apply(self.store.list(), spec);
        debug!(filters = ?spec, matched = result.count, "Structured listing");
        result
    }

    /// List records matching a free-text query
    ///
    /// Fails with `Unparseable` or `ConflictingFilters` from the interpreter;
    /// the store is not consulted in either case.
    pub fn list_by_query(&self, text: &str) -> Result<QueryResults> {
        let interpreted_query = self.interpreter.interpret(text)?;
        let FilteredRecords { data, count, .. } =
            self.list_filtered(&interpreted_query.parsed_filters);

        Ok(QueryResults {
            data,
            count,
            interpreted_query,
        })
    }
}

impl Default for StringVault {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use stringvault_core::StringVaultError;

    fn seeded(values: &[&str]) -> StringVault {
        let vault = StringVault::new();
        for value in values {
            vault.insert(value).unwrap();
        }
        vault
    }

    fn ids(records: &[StringRecord]) -> HashSet<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_insert_get_delete_lifecycle() {
        let vault = StringVault::new();

        let created = vault.insert("Race car").unwrap();
        assert!(created.properties.is_palindrome);
        assert_eq!(vault.get_by_value("Race car").unwrap(), created);

        assert!(matches!(
            vault.insert("Race car"),
            Err(StringVaultError::Conflict { .. })
        ));

        vault.delete_by_value("Race car").unwrap();
        assert_eq!(vault.get_by_value("Race car"), Err(StringVaultError::NotFound));
        assert_eq!(vault.delete_by_value("Race car"), Err(StringVaultError::NotFound));
    }

    #[test]
    fn test_query_and_structured_listing_agree() {
        let vault = seeded(&["racecar", "noon", "hello", "level up", "wow wow", "a"]);

        let by_query = vault
            .list_by_query("all single word palindromic strings")
            .unwrap();
        let structured = vault.list_filtered(&FilterSpec {
            word_count: Some(1),
            is_palindrome: Some(true),
            ..Default::default()
        });

        assert_eq!(
            by_query.interpreted_query.parsed_filters,
            structured.filters_applied
        );
        assert_eq!(ids(&by_query.data), ids(&structured.data));
        assert_eq!(by_query.count, 3);
        assert_eq!(
            by_query.interpreted_query.original,
            "all single word palindromic strings"
        );
    }

    #[test]
    fn test_unparseable_differs_from_empty_spec() {
        let vault = seeded(&["one", "two"]);

        assert!(matches!(
            vault.list_by_query("tell me a joke"),
            Err(StringVaultError::Unparseable(_))
        ));
        assert_eq!(vault.list_filtered(&FilterSpec::default()).count, 2);
    }

    #[test]
    fn test_first_vowel_query() {
        let vault = seeded(&["anna", "bob", "abba", "Ada"]);

        let results = vault
            .list_by_query("palindromic strings that contain the first vowel")
            .unwrap();

        let values: HashSet<String> = results.data.into_iter().map(|r| r.value).collect();
        assert_eq!(
            values,
            HashSet::from(["anna".to_string(), "abba".to_string(), "Ada".to_string()])
        );
    }
}
