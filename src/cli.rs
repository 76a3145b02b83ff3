//! Command-line interface for puzzle_hub.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Puzzle Hub - sudoku, crossword and memory pairs in the terminal
#[derive(Parser, Debug)]
#[command(name = "puzzle_hub")]
#[command(about = "Three puzzles behind one tab switcher", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for puzzle selection and shuffling (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Log file for the terminal session
        #[arg(long, default_value = "puzzle_hub.log")]
        log_file: PathBuf,
    },

    /// Run a JSON-lines script headlessly and print sink events
    Replay {
        /// Script file. Reads stdin when omitted.
        script: Option<PathBuf>,
    },
}
