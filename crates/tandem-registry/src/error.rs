//! # Registry Error Hierarchy
//!
//! Every operation returns immediately on the first error — there is
//! no local recovery, and no operation ever pairs a partial success
//! value with an error. Atomicity across the writes of one invocation
//! is the platform's responsibility, not rollback logic here.

use thiserror::Error;

use tandem_core::WireError;
use tandem_ledger::StoreError;

/// Failure of a registry operation.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The operation's target key is absent.
    #[error("the asset {0} does not exist")]
    NotFound(String),

    /// Create was called on an occupied key.
    #[error("the asset {0} already exists")]
    AlreadyExists(String),

    /// The state-store call itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Stored bytes do not parse into the asset shape.
    #[error(transparent)]
    Decode(#[from] WireError),
}
