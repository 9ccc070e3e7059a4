//! `status`: resolve, snapshot and export status screens from the terminal.
//!
//! Character records live as JSON documents under the data directory
//! (`STATUS_DATA_DIR`, or the platform data dir). Run with `status <command>`.

mod commands;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Bond, Context, Export, Init, List, Show, Snapshot};
use status_store::StoreConfig;

/// Status screen tracker
#[derive(Parser)]
#[command(name = "status")]
#[command(about = "Stat derivation for status screen characters", long_about = None)]
#[command(version)]
struct Cli {
    /// Custom data directory (defaults to STATUS_DATA_DIR or a platform-specific location)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List stored characters
    List(List),

    /// Resolve and display a character
    Show(Show),

    /// Capture a snapshot at the character's current level
    Snapshot(Snapshot),

    /// Export the plain-text status screen
    Export(Export),

    /// Display a character with a share borrowed from a bonded partner
    Bond(Bond),

    /// Create a new level-1 character record
    Init(Init),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for STATUS_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_config = logging::LogConfig::from_env().with_verbosity(cli.verbose);
    let _guard = logging::setup(&log_config)?;

    let mut store = StoreConfig::from_env();
    if let Some(dir) = cli.data_dir {
        store.data_dir = Some(dir);
    }
    let ctx = Context::new(store);

    match cli.command {
        Command::List(cmd) => cmd.execute(&ctx),
        Command::Show(cmd) => cmd.execute(&ctx),
        Command::Snapshot(cmd) => cmd.execute(&ctx),
        Command::Export(cmd) => cmd.execute(&ctx),
        Command::Bond(cmd) => cmd.execute(&ctx),
        Command::Init(cmd) => cmd.execute(&ctx),
    }
}
