//! # tandem-ledger — State Access Port
//!
//! The boundary between Tandem's decision logic and the externally
//! managed, versioned key-value ledger. The surrounding platform owns
//! consensus, replication, conflict detection, and commit atomicity;
//! this crate only defines the capability a single transaction sees:
//! get, put, delete, and a lexicographic range scan.
//!
//! ## Backends
//!
//! - [`MemoryStore`] — BTreeMap-backed store with lexicographic key
//!   order. Used by the test suites and the CLI snapshot front end.
//!   A production deployment substitutes the platform's own
//!   transaction context behind the same [`StateStore`] trait.
//!
//! ## Crate Policy
//!
//! - The port is transaction-scoped and single-threaded; methods take
//!   `&mut self` and there is no in-process locking.
//! - A [`RangeScan`] is lazy, finite, forward-only, and
//!   non-restartable; its backend cursor is released on drop.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{RangeScan, StateStore, StoreError};
