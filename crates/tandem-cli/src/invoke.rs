//! # Invoke Handler
//!
//! Runs one named operation against the snapshot-backed store. The
//! snapshot is written back only on success; any error leaves the
//! previous snapshot untouched.

use std::path::PathBuf;

use tandem_dispatch::Dispatcher;

use crate::snapshot::SnapshotConfig;

/// Arguments for the `invoke` subcommand.
#[derive(clap::Args, Debug)]
pub struct InvokeArgs {
    /// Operation name, e.g. CreateAsset or GetAllAssets.
    pub operation: String,

    /// Positional operation arguments.
    pub args: Vec<String>,

    /// Path of the state snapshot file.
    #[arg(long, default_value = "tandem-state.json")]
    pub state: PathBuf,
}

/// Run one invocation and print its response, if any, to stdout.
pub fn run(args: InvokeArgs) -> anyhow::Result<()> {
    let config = SnapshotConfig::new(args.state);
    let mut store = config.load()?;

    let dispatcher = Dispatcher::new();
    let response = dispatcher.invoke(&mut store, &args.operation, &args.args)?;

    // Commit: persist the mutated store only after the operation
    // succeeded.
    config.save(&store)?;

    if !response.is_empty() {
        println!("{}", String::from_utf8_lossy(&response));
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────
