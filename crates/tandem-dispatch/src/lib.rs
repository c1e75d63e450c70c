//! # tandem-dispatch — Named-Operation Registry
//!
//! The invocation surface of Tandem. An external caller names one
//! operation and supplies positional string arguments; the dispatcher
//! looks the name up in an explicit handler table, parses the
//! arguments, runs the operation against the injected state store,
//! and returns the response as JSON bytes (empty for operations with
//! no success value).
//!
//! The handler table is a plain map from operation name to function —
//! there is no reflection, no contract object, and no mutable state
//! held across invocations. Operation names are part of the external
//! compatibility surface and never change.
//!
//! ## Operations
//!
//! | Name | Arguments | Response |
//! |---|---|---|
//! | `InitLedger` | — | empty |
//! | `CreateAsset` | id, description, owner, approvalOne, approvalTwo, registered | empty |
//! | `ReadAsset` | id | asset JSON |
//! | `UpdateAsset` | id, description, owner, approvalOne, approvalTwo, registered | empty |
//! | `DeleteAsset` | id | empty |
//! | `AssetExists` | id | `true`/`false` |
//! | `TransferAsset` | id, newOwner | empty |
//! | `ApproveRequestOne` | id | empty |
//! | `ApproveRequestTwo` | id | empty |
//! | `GetAllAssets` | — | array of `{Key, Record}` |

pub mod error;

use std::collections::BTreeMap;

use serde::Serialize;
use tandem_ledger::StateStore;
use tandem_registry as registry;

pub use error::DispatchError;

/// A registered operation handler.
pub type Handler = fn(&mut dyn StateStore, &[String]) -> Result<Vec<u8>, DispatchError>;

/// The operation-name → handler registry.
///
/// Holds no mutable state across invocations; the transaction-scoped
/// store is injected per call.
pub struct Dispatcher {
    handlers: BTreeMap<&'static str, Handler>,
}

impl Dispatcher {
    /// Build the registry with every Tandem operation installed.
    pub fn new() -> Self {
        let mut handlers: BTreeMap<&'static str, Handler> = BTreeMap::new();
        handlers.insert("InitLedger", op_init_ledger);
        handlers.insert("CreateAsset", op_create_asset);
        handlers.insert("ReadAsset", op_read_asset);
        handlers.insert("UpdateAsset", op_update_asset);
        handlers.insert("DeleteAsset", op_delete_asset);
        handlers.insert("AssetExists", op_asset_exists);
        handlers.insert("TransferAsset", op_transfer_asset);
        handlers.insert("ApproveRequestOne", op_approve_request_one);
        handlers.insert("ApproveRequestTwo", op_approve_request_two);
        handlers.insert("GetAllAssets", op_get_all_assets);
        Self { handlers }
    }

    /// The registered operation names, sorted.
    pub fn operations(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    /// Run one named operation within the given transaction-scoped
    /// store. Returns the response bytes, empty for operations with no
    /// success value.
    pub fn invoke(
        &self,
        store: &mut dyn StateStore,
        operation: &str,
        args: &[String],
    ) -> Result<Vec<u8>, DispatchError> {
        let handler = self
            .handlers
            .get(operation)
            .ok_or_else(|| DispatchError::UnknownOperation(operation.to_string()))?;
        tracing::debug!(operation, argc = args.len(), "dispatching invocation");
        handler(store, args)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Argument parsing ────────────────────────────────────────────────

fn require_arity(op: &'static str, args: &[String], expected: usize) -> Result<(), DispatchError> {
    if args.len() != expected {
        return Err(DispatchError::Arity {
            op,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Parse an integer flag argument from its decimal string form.
fn flag_arg(op: &'static str, args: &[String], position: usize) -> Result<u8, DispatchError> {
    args[position]
        .parse::<u8>()
        .map_err(|e| DispatchError::InvalidArgument {
            op,
            position,
            reason: e.to_string(),
        })
}

fn json_response<T: Serialize>(op: &'static str, value: &T) -> Result<Vec<u8>, DispatchError> {
    serde_json::to_vec(value).map_err(|source| DispatchError::Response { op, source })
}

// ─── Handlers ────────────────────────────────────────────────────────

fn op_init_ledger(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    require_arity("InitLedger", args, 0)?;
    registry::init_ledger(store)?;
    Ok(Vec::new())
}

fn op_create_asset(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    const OP: &str = "CreateAsset";
    require_arity(OP, args, 6)?;
    registry::create_asset(
        store,
        &args[0],
        &args[1],
        &args[2],
        flag_arg(OP, args, 3)?,
        flag_arg(OP, args, 4)?,
        flag_arg(OP, args, 5)?,
    )?;
    Ok(Vec::new())
}

fn op_read_asset(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    const OP: &str = "ReadAsset";
    require_arity(OP, args, 1)?;
    let asset = registry::read_asset(store, &args[0])?;
    json_response(OP, &asset)
}

fn op_update_asset(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    const OP: &str = "UpdateAsset";
    require_arity(OP, args, 6)?;
    registry::update_asset(
        store,
        &args[0],
        &args[1],
        &args[2],
        flag_arg(OP, args, 3)?,
        flag_arg(OP, args, 4)?,
        flag_arg(OP, args, 5)?,
    )?;
    Ok(Vec::new())
}

fn op_delete_asset(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    require_arity("DeleteAsset", args, 1)?;
    registry::delete_asset(store, &args[0])?;
    Ok(Vec::new())
}

fn op_asset_exists(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    const OP: &str = "AssetExists";
    require_arity(OP, args, 1)?;
    let exists = registry::asset_exists(store, &args[0])?;
    json_response(OP, &exists)
}

fn op_transfer_asset(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    require_arity("TransferAsset", args, 2)?;
    registry::transfer_asset(store, &args[0], &args[1])?;
    Ok(Vec::new())
}

fn op_approve_request_one(
    store: &mut dyn StateStore,
    args: &[String],
) -> Result<Vec<u8>, DispatchError> {
    require_arity("ApproveRequestOne", args, 1)?;
    registry::approve_first(store, &args[0])?;
    Ok(Vec::new())
}

fn op_approve_request_two(
    store: &mut dyn StateStore,
    args: &[String],
) -> Result<Vec<u8>, DispatchError> {
    require_arity("ApproveRequestTwo", args, 1)?;
    registry::approve_second(store, &args[0])?;
    Ok(Vec::new())
}

fn op_get_all_assets(store: &mut dyn StateStore, args: &[String]) -> Result<Vec<u8>, DispatchError> {
    const OP: &str = "GetAllAssets";
    require_arity(OP, args, 0)?;
    let results = registry::get_all_assets(store)?;
    json_response(OP, &results)
}

// ─── Tests ───────────────────────────────────────────────────────────
