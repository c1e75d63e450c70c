//! # StateStore Trait & Range Scan Handle
//!
//! The capability through which one transaction reads and writes the
//! external ledger. Implementations translate these calls into the
//! surrounding platform's transaction context; [`crate::MemoryStore`]
//! is the in-process reference backend.

use thiserror::Error;

/// The underlying state-store call itself failed.
///
/// Distinct from domain outcomes: an absent key is `Ok(None)` from
/// [`StateStore::get`], never a `StoreError`.
#[derive(Error, Debug)]
#[error("state store failure: {0}")]
pub struct StoreError(String);

impl StoreError {
    /// Wrap a backend failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A lazy, finite, forward-only, non-restartable enumeration of store
/// entries in lexicographic key order.
///
/// The backend cursor is released when the handle is dropped, which
/// covers every exit path including early failure mid-scan.
pub struct RangeScan<'a> {
    inner: Box<dyn Iterator<Item = Result<(String, Vec<u8>), StoreError>> + 'a>,
}

impl<'a> RangeScan<'a> {
    /// Wrap a backend cursor.
    pub fn new(inner: Box<dyn Iterator<Item = Result<(String, Vec<u8>), StoreError>> + 'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for RangeScan<'_> {
    type Item = Result<(String, Vec<u8>), StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl std::fmt::Debug for RangeScan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeScan").finish_non_exhaustive()
    }
}

/// Transaction-scoped access to the external key-value ledger.
///
/// All methods are synchronous blocking calls from the caller's
/// perspective. The store is the sole source of truth: callers re-read
/// before mutating and never cache records across invocations.
pub trait StateStore {
    /// Read the value at `key`. Absent keys are `Ok(None)`.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` at `key`, overwriting any existing value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key` from the current state view. Removing an absent
    /// key is not an error at this layer.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Open a scan over `[start, end)` in lexicographic key order.
    /// An empty `start` or `end` means that bound is open-ended.
    fn range_scan(&mut self, start: &str, end: &str) -> Result<RangeScan<'_>, StoreError>;
}
