//! # Seed Routine
//!
//! Populates the two fixed default records. Writes unconditionally —
//! no existence check — and stops at the first failing write. There is
//! no rollback of prior writes within the routine; atomicity of the
//! whole batch belongs to the platform's transaction commit.

use tandem_core::Asset;
use tandem_ledger::StateStore;

use crate::error::RegistryError;
use crate::registry::write_asset;

/// The fixed records written by [`init_ledger`].
fn seed_assets() -> [Asset; 2] {
    [
        Asset::new("asset1", "myAsset", "Org1", 0, 0, 0),
        Asset::new("asset2", "anotherAsset", "Org1", 0, 0, 0),
    ]
}

/// Write the two default records, overwriting anything already stored
/// at `asset1` and `asset2`.
pub fn init_ledger(store: &mut dyn StateStore) -> Result<(), RegistryError> {
    for asset in seed_assets() {
        write_asset(store, &asset)?;
    }
    tracing::info!("ledger seeded with default records");
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────
