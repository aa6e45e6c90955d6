//! Bossdle - CLI
//!
//! Daily boss-guessing puzzle with TUI and plain-text modes.

use anyhow::{Context, Result};
use bossdle::{
    catalog,
    commands::{print_share, print_stats, run_simple},
    interactive::{App, run_tui},
    session::PuzzleSession,
    storage::FileStore,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Parser)]
#[command(
    name = "bossdle",
    about = "Daily deterministic boss-guessing puzzle with per-attribute feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom boss catalog JSON file (default: embedded catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory for saved progress and stats (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Start N days past today in test mode (volatile, nothing is saved)
    #[arg(long, global = true, default_value_t = 0)]
    skip_days: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain-text interactive mode (no TUI)
    Simple,

    /// Show lifetime stats
    Stats,

    /// Print today's shareable result
    Share,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => catalog::load_from_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => catalog::load_default().context("loading embedded catalog")?,
    };

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("opening data directory {}", data_dir.display()))?;

    let mut session = PuzzleSession::new(catalog, store, OffsetDateTime::now_utc())?;
    for _ in 0..cli.skip_days {
        session.advance_test_day();
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(&mut session).map_err(|e| anyhow::anyhow!(e)),
        Commands::Stats => {
            print_stats(&session);
            Ok(())
        }
        Commands::Share => {
            print_share(&session);
            Ok(())
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bossdle")
}
