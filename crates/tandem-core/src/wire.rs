//! # Wire Encoding
//!
//! JSON encode/decode for stored asset records. All serialization of
//! persisted state flows through this module so the wire shape is
//! defined in exactly one place.
//!
//! Errors carry the store key involved — a decode failure on a bulk
//! scan must name the malformed entry.

use thiserror::Error;

use crate::asset::Asset;

/// Encode or decode failure at the wire boundary.
#[derive(Error, Debug)]
pub enum WireError {
    /// A record could not be encoded for storage.
    #[error("failed to encode record for key {key}: {source}")]
    Encode {
        /// The key the record was being written under.
        key: String,
        /// The underlying serialization error.
        source: serde_json::Error,
    },

    /// Stored bytes do not parse into the asset shape.
    #[error("failed to decode record at key {key}: {source}")]
    Decode {
        /// The key the bytes were read from.
        key: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

/// Encode an asset record for storage under `key`.
pub fn encode_asset(key: &str, asset: &Asset) -> Result<Vec<u8>, WireError> {
    serde_json::to_vec(asset).map_err(|source| WireError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Decode the stored bytes at `key` into an asset record.
pub fn decode_asset(key: &str, bytes: &[u8]) -> Result<Asset, WireError> {
    serde_json::from_slice(bytes).map_err(|source| WireError::Decode {
        key: key.to_string(),
        source,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────
