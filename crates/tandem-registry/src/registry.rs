//! # Asset Registry
//!
//! CRUD operations and existence checks on asset records, built
//! entirely on the State Access Port. Updates are full overwrites:
//! callers supply the complete desired state, including the approval
//! flags. Partial update is read-then-write at the call site, never a
//! merge here.

use tandem_core::{decode_asset, encode_asset, Asset};
use tandem_ledger::StateStore;

use crate::error::RegistryError;

/// Encode `asset` and write it under its id, overwriting any existing
/// record. Shared by every mutating operation.
pub(crate) fn write_asset(store: &mut dyn StateStore, asset: &Asset) -> Result<(), RegistryError> {
    let bytes = encode_asset(&asset.id, asset)?;
    store.put(&asset.id, bytes)?;
    tracing::debug!(id = %asset.id, "asset record written");
    Ok(())
}

/// Store a new asset record with exactly the given field values.
///
/// Fails with [`RegistryError::AlreadyExists`] if a record with `id`
/// is already present. No normalization of the flags is applied.
pub fn create_asset(
    store: &mut dyn StateStore,
    id: &str,
    description: &str,
    owner: &str,
    approval_one: u8,
    approval_two: u8,
    registered: u8,
) -> Result<(), RegistryError> {
    if asset_exists(store, id)? {
        return Err(RegistryError::AlreadyExists(id.to_string()));
    }
    let asset = Asset::new(id, description, owner, approval_one, approval_two, registered);
    write_asset(store, &asset)
}

/// Read and decode the asset record at `id`.
///
/// Fails with [`RegistryError::NotFound`] if the key is absent, and
/// with a decode error if the stored bytes do not parse.
pub fn read_asset(store: &mut dyn StateStore, id: &str) -> Result<Asset, RegistryError> {
    let bytes = store
        .get(id)?
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
    Ok(decode_asset(id, &bytes)?)
}

/// Overwrite every field of an existing asset record.
///
/// Fails with [`RegistryError::NotFound`] if the record is absent.
/// This is a full overwrite, not a merge — passing zero flags resets
/// any prior approval state.
pub fn update_asset(
    store: &mut dyn StateStore,
    id: &str,
    description: &str,
    owner: &str,
    approval_one: u8,
    approval_two: u8,
    registered: u8,
) -> Result<(), RegistryError> {
    if !asset_exists(store, id)? {
        return Err(RegistryError::NotFound(id.to_string()));
    }
    let asset = Asset::new(id, description, owner, approval_one, approval_two, registered);
    write_asset(store, &asset)
}

/// Remove the asset record at `id` from the current state view.
///
/// Fails with [`RegistryError::NotFound`] if the record is absent.
/// There is no tombstone — the key is simply deleted.
pub fn delete_asset(store: &mut dyn StateStore, id: &str) -> Result<(), RegistryError> {
    if !asset_exists(store, id)? {
        return Err(RegistryError::NotFound(id.to_string()));
    }
    store.delete(id)?;
    tracing::debug!(id = %id, "asset record deleted");
    Ok(())
}

/// Whether a record with `id` is present.
///
/// Never fails on a missing key; the only failure mode is the
/// underlying store read itself erroring.
pub fn asset_exists(store: &mut dyn StateStore, id: &str) -> Result<bool, RegistryError> {
    Ok(store.get(id)?.is_some())
}

/// Set the owner of an existing asset, leaving every other field
/// unchanged.
pub fn transfer_asset(
    store: &mut dyn StateStore,
    id: &str,
    new_owner: &str,
) -> Result<(), RegistryError> {
    let mut asset = read_asset(store, id)?;
    asset.owner = new_owner.to_string();
    write_asset(store, &asset)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use tandem_ledger::MemoryStore;

    use super::*;
    use crate::testutil::FailingStore;

    fn store_with_asset3() -> MemoryStore {
        let mut store = MemoryStore::new();
        create_asset(&mut store, "asset3", "desc", "Org2", 0, 0, 0).unwrap();
        store
    }

    #[test]
    fn test_create_then_read_returns_fields_exactly() {
        let mut store = MemoryStore::new();
        create_asset(&mut store, "asset3", "desc", "Org2", 1, 0, 1).unwrap();
        let asset = read_asset(&mut store, "asset3").unwrap();
        assert_eq!(asset, Asset::new("asset3", "desc", "Org2", 1, 0, 1));
    }

    #[test]
    fn test_create_on_occupied_key_fails_and_preserves_record() {
        let mut store = store_with_asset3();
        let err = create_asset(&mut store, "asset3", "other", "Org9", 1, 1, 1).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyExists(id) if id == "asset3"));
        // The first record is untouched.
        let asset = read_asset(&mut store, "asset3").unwrap();
        assert_eq!(asset.description, "desc");
        assert_eq!(asset.owner, "Org2");
    }

    #[test]
    fn test_read_absent_is_not_found() {
        let mut store = MemoryStore::new();
        let err = read_asset(&mut store, "ghost").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(id) if id == "ghost"));
    }

    #[test]
    fn test_read_malformed_record_is_decode_error() {
        let mut store = MemoryStore::new();
        store.put("asset3", b"not json".to_vec()).unwrap();
        let err = read_asset(&mut store, "asset3").unwrap_err();
        assert!(matches!(err, RegistryError::Decode(_)));
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let mut store = store_with_asset3();
        update_asset(&mut store, "asset3", "new desc", "Org3", 1, 1, 1).unwrap();
        let asset = read_asset(&mut store, "asset3").unwrap();
        assert_eq!(asset, Asset::new("asset3", "new desc", "Org3", 1, 1, 1));
    }

    #[test]
    fn test_update_with_zero_flags_resets_approval_state() {
        let mut store = store_with_asset3();
        update_asset(&mut store, "asset3", "desc", "Org2", 1, 1, 1).unwrap();
        update_asset(&mut store, "asset3", "desc", "Org2", 0, 0, 0).unwrap();
        let asset = read_asset(&mut store, "asset3").unwrap();
        assert_eq!(asset.registered, 0);
    }

    #[test]
    fn test_update_absent_is_not_found() {
        let mut store = MemoryStore::new();
        let err = update_asset(&mut store, "ghost", "d", "o", 0, 0, 0).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_delete_then_read_is_not_found() {
        let mut store = store_with_asset3();
        delete_asset(&mut store, "asset3").unwrap();
        let err = read_asset(&mut store, "asset3").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_delete_absent_is_not_found() {
        let mut store = MemoryStore::new();
        let err = delete_asset(&mut store, "ghost").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_exists_tracks_create_and_delete() {
        let mut store = MemoryStore::new();
        assert!(!asset_exists(&mut store, "asset3").unwrap());
        create_asset(&mut store, "asset3", "desc", "Org2", 0, 0, 0).unwrap();
        assert!(asset_exists(&mut store, "asset3").unwrap());
        delete_asset(&mut store, "asset3").unwrap();
        assert!(!asset_exists(&mut store, "asset3").unwrap());
    }

    #[test]
    fn test_exists_surfaces_store_failure() {
        let mut store = FailingStore::on_get();
        let err = asset_exists(&mut store, "asset3").unwrap_err();
        assert!(matches!(err, RegistryError::Store(_)));
    }

    #[test]
    fn test_transfer_changes_only_owner() {
        let mut store = MemoryStore::new();
        create_asset(&mut store, "asset3", "desc", "Org2", 1, 0, 0).unwrap();
        transfer_asset(&mut store, "asset3", "Org7").unwrap();
        let asset = read_asset(&mut store, "asset3").unwrap();
        assert_eq!(asset.owner, "Org7");
        assert_eq!(asset.description, "desc");
        assert_eq!(asset.approval_one, 1);
        assert_eq!(asset.approval_two, 0);
        assert_eq!(asset.registered, 0);
    }

    #[test]
    fn test_transfer_absent_is_not_found() {
        let mut store = MemoryStore::new();
        let err = transfer_asset(&mut store, "ghost", "Org7").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }
}
