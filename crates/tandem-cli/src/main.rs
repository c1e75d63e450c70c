//! # tandem CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Tandem — dual-approval asset registry over a key-value ledger.
///
/// Runs named registry operations against a snapshot-backed local
/// store. The snapshot is committed only when an operation succeeds.
#[derive(Parser, Debug)]
#[command(name = "tandem", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run one named operation against the state snapshot.
    Invoke(tandem_cli::invoke::InvokeArgs),
    /// List the registered operation names.
    Ops,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke(args) => tandem_cli::invoke::run(args)?,
        Commands::Ops => {
            for name in tandem_dispatch::Dispatcher::new().operations() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
