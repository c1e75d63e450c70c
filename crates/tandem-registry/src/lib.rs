//! # tandem-registry — Asset Lifecycle & Dual-Approval Workflow
//!
//! The only crate in the workspace containing actual decision logic.
//! Everything here is transactional business logic executed against a
//! [`StateStore`](tandem_ledger::StateStore) supplied by the
//! surrounding platform; commit or abort of the enclosing transaction
//! is decided outside this crate.
//!
//! ## Components
//!
//! - [`registry`] — CRUD and existence checks on asset records.
//! - [`approval`] — the two-flag approval state machine gating the
//!   `registered` status.
//! - [`query`] — bulk enumeration of all stored records.
//! - [`seed`] — the fixed two-record initialization routine.
//!
//! ## Design Principle
//!
//! Every mutation is a full read-modify-write: the operation re-reads
//! the record from the store, changes the fields it owns, and writes
//! the whole record back. The store is the sole source of truth —
//! nothing is cached between invocations, and conflicting concurrent
//! writes are resolved by the platform after the fact, not retried
//! here.

pub mod approval;
pub mod error;
pub mod query;
pub mod registry;
pub mod seed;

#[cfg(test)]
pub(crate) mod testutil;

pub use approval::{approve_first, approve_second, ApprovalState};
pub use error::RegistryError;
pub use query::get_all_assets;
pub use registry::{
    asset_exists, create_asset, delete_asset, read_asset, transfer_asset, update_asset,
};
pub use seed::init_ledger;
