//! # Dispatch Error
//!
//! Edge errors for the invocation surface: unknown operation names,
//! argument-shape failures, and wrapped registry errors. Any error
//! aborts the entire invocation — no handler returns a partial
//! success alongside an error.

use thiserror::Error;

use tandem_registry::RegistryError;

/// Failure of a named invocation.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered under the given name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Wrong number of positional arguments.
    #[error("{op} expects {expected} argument(s), got {got}")]
    Arity {
        /// The invoked operation.
        op: &'static str,
        /// How many arguments the operation takes.
        expected: usize,
        /// How many were supplied.
        got: usize,
    },

    /// A positional argument did not parse.
    #[error("{op}: invalid argument at position {position}: {reason}")]
    InvalidArgument {
        /// The invoked operation.
        op: &'static str,
        /// Zero-based argument position.
        position: usize,
        /// Why the argument was rejected.
        reason: String,
    },

    /// The underlying registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The success value could not be encoded as a response.
    #[error("failed to encode response for {op}: {source}")]
    Response {
        /// The invoked operation.
        op: &'static str,
        /// The underlying serialization error.
        source: serde_json::Error,
    },
}
