//! # Store Snapshot
//!
//! Loads and saves a [`MemoryStore`] as a JSON file mapping each store
//! key to its record object. Stored values are themselves JSON, so the
//! snapshot stays human-readable and diff-friendly.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tandem_ledger::MemoryStore;

/// Explicit snapshot configuration passed at process start.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Path of the snapshot file.
    pub path: PathBuf,
}

impl SnapshotConfig {
    /// Configure a snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the snapshot into a fresh store. A missing file is an
    /// empty store, so the first invocation needs no setup step.
    pub fn load(&self) -> anyhow::Result<MemoryStore> {
        if !self.path.exists() {
            return Ok(MemoryStore::new());
        }
        let raw = std::fs::read(&self.path)
            .with_context(|| format!("failed to read snapshot {}", self.path.display()))?;
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_slice(&raw)
            .with_context(|| format!("malformed snapshot {}", self.path.display()))?;

        let mut byte_entries = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let bytes = serde_json::to_vec(&value)
                .with_context(|| format!("failed to re-encode snapshot entry {key}"))?;
            byte_entries.push((key, bytes));
        }
        Ok(MemoryStore::from_entries(byte_entries))
    }

    /// Write the store back to the snapshot file.
    pub fn save(&self, store: &MemoryStore) -> anyhow::Result<()> {
        let mut entries = BTreeMap::new();
        for (key, bytes) in store.entries() {
            let value: serde_json::Value = serde_json::from_slice(&bytes)
                .with_context(|| format!("stored value at {key} is not valid JSON"))?;
            entries.insert(key, value);
        }
        let rendered = serde_json::to_string_pretty(&entries).context("failed to render snapshot")?;
        std::fs::write(&self.path, rendered)
            .with_context(|| format!("failed to write snapshot {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }

    /// The configured snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
