//! # Asset Record & Query Result
//!
//! The persisted asset record and the transient key/record pairing
//! returned by bulk enumeration.
//!
//! Stored records are keyed by `Asset::id` in the external state
//! store; the struct itself carries the id redundantly so that a
//! decoded value is self-describing.

use serde::{Deserialize, Serialize};

/// A registered (or registration-pending) asset record.
///
/// The two approval flags and the registered flag are integer-valued
/// on the wire (0 or 1). The record is always written as a whole —
/// every mutation is a full read-modify-write of all six fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Primary key. Immutable after creation, unique across the store.
    #[serde(rename = "ID")]
    pub id: String,

    /// Free-text description.
    #[serde(rename = "description")]
    pub description: String,

    /// The controlling party. Mutable via transfer.
    #[serde(rename = "owner")]
    pub owner: String,

    /// First sign-off flag, 0 or 1.
    #[serde(rename = "approvalOne")]
    pub approval_one: u8,

    /// Second sign-off flag, 0 or 1.
    #[serde(rename = "approvalTwo")]
    pub approval_two: u8,

    /// Registration flag, 0 or 1. Maintained by the approval workflow:
    /// set to 1 exactly when the second approval runs, cleared only by
    /// a full update overwrite.
    #[serde(rename = "registered")]
    pub registered: u8,
}

impl Asset {
    /// Construct a record with every field given explicitly.
    ///
    /// No normalization is applied — the flags are stored exactly as
    /// supplied.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
        approval_one: u8,
        approval_two: u8,
        registered: u8,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            owner: owner.into(),
            approval_one,
            approval_two,
            registered,
        }
    }
}

/// A store key paired with its decoded record.
///
/// Produced only by bulk enumeration; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The store key the record was read from.
    #[serde(rename = "Key")]
    pub key: String,

    /// The decoded asset record.
    #[serde(rename = "Record")]
    pub record: Asset,
}

// ─── Tests ───────────────────────────────────────────────────────────
