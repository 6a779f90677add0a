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

//! Content Store
//!
//! Maps content fingerprints to analyzed records. Lookups and deletions
//! take the raw value and recompute its fingerprint, so callers never
//! handle opaque ids.
//!
//! All access goes through one reader/writer lock: reads share it,
//! insert and delete hold it exclusively. Analysis runs before the write
//! lock is taken; the duplicate check and the insertion happen under the
//! same guard.

use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use stringvault_core::{fingerprint, Result, StringRecord, StringVaultError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ContentStore {
    records: RwLock<HashMap<String, StringRecord>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze and store `value`.
    ///
    /// Fails with `Conflict` when identical content is already stored.
    pub fn insert(&self, value: &str) -> Result<StringRecord> {
        let record = StringRecord::new(value);

        let mut records = self.records.write();
        match records.entry(record.id.clone()) {
            Entry::Occupied(existing) => {
                debug!(id = %existing.key(), "Rejected duplicate string");
                Err(StringVaultError::Conflict {
                    id: existing.key().clone(),
                })
            }
            Entry::Vacant(slot) => {
                debug!(id = %record.id, length = record.properties.length, "Stored string");
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    /// Look up the record stored for `value`.
    pub fn get(&self, value: &str) -> Result<StringRecord> {
        self.get_by_id(&fingerprint(value))
    }

    /// Look up a record by its fingerprint.
    pub fn get_by_id(&self, id: &str) -> Result<StringRecord> {
        self.records
            .read()
            .get(id)
            .cloned()
            .ok_or(StringVaultError::NotFound)
    }

    /// Remove the record stored for `value`.
    pub fn delete(&self, value: &str) -> Result<()> {
        let id = fingerprint(value);

        match self.records.write().remove(&id) {
            Some(_) => {
                debug!(id = %id, "Deleted string");
                Ok(())
            }
            None => Err(StringVaultError::NotFound),
        }
    }

    /// Snapshot of every stored record, in no particular order.
    pub fn list(&self) -> Vec<StringRecord> {
        self.records.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_insert_then_get_by_content() {
        let store = ContentStore::new();
        let created = store.insert("hello world").unwrap();

        let found = store.get("hello world").unwrap();
        assert_eq!(found, created);
        assert_eq!(found.value, "hello world");
        assert_eq!(store.get_by_id(&created.id).unwrap(), created);
    }

    #[test]
    fn test_duplicate_insert_conflicts() {
        let store = ContentStore::new();
        let first = store.insert("dup").unwrap();

        let err = store.insert("dup").unwrap_err();
        assert_eq!(err, StringVaultError::Conflict { id: first.id.clone() });
        assert_eq!(store.len(), 1);
        // the original record is untouched
        assert_eq!(store.get("dup").unwrap().created_at, first.created_at);
    }

    #[test]
    fn test_case_variants_are_distinct_records() {
        let store = ContentStore::new();
        store.insert("Hello").unwrap();
        store.insert("hello").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_is_observable_and_repeat_is_not_found() {
        let store = ContentStore::new();
        store.insert("gone soon").unwrap();

        assert!(store.delete("gone soon").is_ok());
        assert_eq!(store.get("gone soon"), Err(StringVaultError::NotFound));
        assert_eq!(store.delete("gone soon"), Err(StringVaultError::NotFound));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reinsert_after_delete() {
        let store = ContentStore::new();
        store.insert("again").unwrap();
        store.delete("again").unwrap();
        assert!(store.insert("again").is_ok());
    }

    #[test]
    fn test_list_snapshot() {
        let store = ContentStore::new();
        for value in ["a", "b", "c"] {
            store.insert(value).unwrap();
        }

        let mut values: Vec<String> = store.list().into_iter().map(|r| r.value).collect();
        values.sort();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_concurrent_duplicate_inserts_admit_exactly_one() {
        let store = Arc::new(ContentStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert("contended").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    proptest! {
        #[test]
        fn proptest_content_addressing(value in "\\PC{0,48}") {
            let store = ContentStore::new();
            store.insert(&value).unwrap();

            let found = store.get(&value).unwrap();
            prop_assert_eq!(&found.value, &value);
            prop_assert!(
                matches!(store.insert(&value), Err(StringVaultError::Conflict { .. })),
                "second insert must conflict"
            );
        }
    }
}
