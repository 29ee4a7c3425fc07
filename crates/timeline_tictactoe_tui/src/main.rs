//! Timeline Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use timeline_tictactoe_tui::cli::Cli;
use timeline_tictactoe_tui::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    timeline_tictactoe_tui::run_tui(&config)
}
