//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Timeline Tic-Tac-Toe - play, rewind and branch in the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with the move list in descending order
    #[arg(long)]
    pub reversed: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
