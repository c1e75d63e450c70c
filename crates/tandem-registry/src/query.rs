//! # Bulk Query
//!
//! Enumeration of every stored record via an open-ended range scan.
//! The scan is lazy and forward-only; results are materialized into a
//! list in the store's native key order. A single malformed entry
//! aborts the whole operation — no partial results.

use tandem_core::{decode_asset, QueryResult};
use tandem_ledger::StateStore;

use crate::error::RegistryError;

/// Enumerate all asset records in lexicographic key order.
///
/// Opens an open-ended scan over the entire key space and decodes each
/// value. Fails on the first malformed entry; the scan cursor is
/// released on drop on every exit path.
pub fn get_all_assets(store: &mut dyn StateStore) -> Result<Vec<QueryResult>, RegistryError> {
    let scan = store.range_scan("", "")?;

    let mut results = Vec::new();
    for entry in scan {
        let (key, value) = entry?;
        let record = decode_asset(&key, &value)?;
        results.push(QueryResult { key, record });
    }

    tracing::debug!(count = results.len(), "bulk query complete");
    Ok(results)
}

// ─── Tests ───────────────────────────────────────────────────────────
