//! # In-Memory Store Backend
//!
//! BTreeMap-backed [`StateStore`] implementation. Key order is
//! lexicographic by construction, matching the reference store's
//! range-scan ordering. Used by the test suites and by the CLI, which
//! persists the entry set as a snapshot between invocations.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::store::{RangeScan, StateStore, StoreError};

/// An in-process key-value store with lexicographic key order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot of entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Snapshot the full entry set in key order.
    pub fn entries(&self) -> Vec<(String, Vec<u8>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn range_scan(&mut self, start: &str, end: &str) -> Result<RangeScan<'_>, StoreError> {
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };
        let cursor = self
            .entries
            .range((lower, upper))
            .map(|(k, v)| Ok((k.clone(), v.clone())));
        Ok(RangeScan::new(Box::new(cursor)))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.put("b", b"2".to_vec()).unwrap();
        store.put("a", b"1".to_vec()).unwrap();
        store.put("c", b"3".to_vec()).unwrap();
        store
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let mut store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let mut store = MemoryStore::new();
        store.put("k", b"v".to_vec()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::new();
        store.put("k", b"v1".to_vec()).unwrap();
        store.put("k", b"v2".to_vec()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"v2".to_vec()));
    }

    #[test]
    fn test_delete_removes_key() {
        let mut store = MemoryStore::new();
        store.put("k", b"v".to_vec()).unwrap();
        store.delete("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_delete_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        store.delete("missing").unwrap();
    }

    #[test]
    fn test_open_ended_scan_is_key_ordered() {
        let mut store = populated();
        let keys: Vec<String> = store
            .range_scan("", "")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bounded_scan_is_half_open() {
        let mut store = populated();
        let keys: Vec<String> = store
            .range_scan("a", "c")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        // End bound is exclusive.
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let store = populated();
        let rebuilt = MemoryStore::from_entries(store.entries());
        assert_eq!(rebuilt.entries(), store.entries());
    }
}
