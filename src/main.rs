//! Puzzle Hub - Unified CLI
//!
//! Play in the terminal, or replay a scripted session headlessly.

#![warn(missing_docs)]

mod cli;
mod tui;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use puzzle_hub::{Hub, HubConfig, RecordingSink, run_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref(), cli.seed)?;

    match cli.command.unwrap_or(Command::Play {
        log_file: PathBuf::from("puzzle_hub.log"),
    }) {
        Command::Play { log_file } => tui::run_tui(config, &log_file).await,
        Command::Replay { script } => run_replay(config, script),
    }
}

fn load_config(path: Option<&PathBuf>, seed: Option<u64>) -> Result<HubConfig> {
    let config = match path {
        Some(path) => HubConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => HubConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_seed(Some(seed)),
        None => config,
    })
}

/// Replays a JSON-lines script and prints sink events to stdout.
#[instrument(skip(config))]
fn run_replay(config: HubConfig, script: Option<PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!(?script, "Starting replay");

    let mut hub = Hub::new(config, RecordingSink::new());
    let stdout = io::stdout().lock();
    let summary = match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_script(&mut hub, BufReader::new(file), stdout)?
        }
        None => run_script(&mut hub, io::stdin().lock(), stdout)?,
    };

    info!(
        steps = summary.steps,
        rejected = summary.rejected,
        "Replay complete"
    );
    Ok(())
}
