//! # tandem-cli — Invocation Front End
//!
//! Runs one named Tandem operation per process against a
//! [`MemoryStore`](tandem_ledger::MemoryStore) persisted as a JSON
//! snapshot file. The snapshot is loaded at startup, the operation
//! runs against the in-memory store, and the snapshot is written back
//! only if the operation succeeds — a failed invocation leaves the
//! file untouched, mirroring the commit/abort decision a real
//! platform makes around each transaction.
//!
//! Deployment wiring is explicit: the snapshot path is a configuration
//! object passed at process start, never read from the environment.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from handlers.
//! - No business logic here — everything delegates to the dispatcher.

pub mod invoke;
pub mod snapshot;
