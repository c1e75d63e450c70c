//! # Dual-Approval Workflow
//!
//! A two-step, unordered state machine layered on the registry's
//! read/write primitives. The two sign-off steps may run in either
//! order and are idempotent — safe to retry after a commit failure,
//! since an invocation has no visibility into whether its writes
//! ultimately commit.
//!
//! ## States
//!
//! ```text
//! Unapproved (0,0) ──▶ FirstApproved (1,0) ──▶ BothApproved (1,1)
//!       │                                            ▲
//!       └──────────▶ SecondApproved (0,1) ───────────┘
//! ```
//!
//! The second approval sets `registered = 1` unconditionally,
//! regardless of the first flag's value; DESIGN.md records the
//! decision to keep it that way. There is no reject or revoke
//! transition —
//! the only way to clear the flags is a full update overwrite.

use tandem_core::Asset;
use tandem_ledger::StateStore;

use crate::error::RegistryError;
use crate::registry::{read_asset, write_asset};

/// The conceptual approval state derived from the two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalState {
    /// Neither party has signed off.
    Unapproved,
    /// Only the first party has signed off.
    FirstApproved,
    /// Only the second party has signed off.
    SecondApproved,
    /// Both parties have signed off.
    BothApproved,
}

impl ApprovalState {
    /// Derive the state from a record's flags. Any nonzero flag value
    /// counts as set.
    pub fn of(asset: &Asset) -> Self {
        match (asset.approval_one != 0, asset.approval_two != 0) {
            (false, false) => Self::Unapproved,
            (true, false) => Self::FirstApproved,
            (false, true) => Self::SecondApproved,
            (true, true) => Self::BothApproved,
        }
    }
}

impl std::fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unapproved => "UNAPPROVED",
            Self::FirstApproved => "FIRST_APPROVED",
            Self::SecondApproved => "SECOND_APPROVED",
            Self::BothApproved => "BOTH_APPROVED",
        };
        f.write_str(s)
    }
}

/// Record the first party's sign-off on an asset.
///
/// Sets `approval_one = 1` and leaves `approval_two` and `registered`
/// untouched. Propagates [`RegistryError::NotFound`] for an absent id.
/// Idempotent.
pub fn approve_first(store: &mut dyn StateStore, id: &str) -> Result<(), RegistryError> {
    let mut asset = read_asset(store, id)?;
    asset.approval_one = 1;
    write_asset(store, &asset)?;
    tracing::debug!(id = %id, state = %ApprovalState::of(&asset), "first approval recorded");
    Ok(())
}

/// Record the second party's sign-off on an asset.
///
/// Sets `approval_two = 1` and `registered = 1` unconditionally,
/// regardless of the current value of `approval_one`. Propagates
/// [`RegistryError::NotFound`] for an absent id. Idempotent.
pub fn approve_second(store: &mut dyn StateStore, id: &str) -> Result<(), RegistryError> {
    let mut asset = read_asset(store, id)?;
    asset.approval_two = 1;
    asset.registered = 1;
    write_asset(store, &asset)?;
    tracing::debug!(id = %id, state = %ApprovalState::of(&asset), "second approval recorded");
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────
