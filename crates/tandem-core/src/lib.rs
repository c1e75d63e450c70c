//! # tandem-core — Foundational Types for Tandem
//!
//! This crate defines the data model of the Tandem asset registry and
//! the JSON wire encoding under which records are stored in the ledger.
//! Every other crate in the workspace depends on `tandem-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One persisted entity.** [`Asset`] is the only record shape
//!    that ever reaches the state store. [`QueryResult`] is a
//!    transient pairing produced by bulk enumeration and is never
//!    persisted.
//!
//! 2. **The wire field names are a compatibility surface.** Stored
//!    records use the exact JSON field names `ID`, `description`,
//!    `owner`, `approvalOne`, `approvalTwo`, `registered`. All
//!    encoding flows through [`wire`]; no caller serializes an asset
//!    ad hoc.
//!
//! 3. **No derived normalization.** The model stores exactly the flag
//!    values it is given. Interpretation of the flags belongs to the
//!    approval workflow, not the data model.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tandem-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod asset;
pub mod wire;

pub use asset::{Asset, QueryResult};
pub use wire::{decode_asset, encode_asset, WireError};
