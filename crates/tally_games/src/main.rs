//! Tally - tic-tac-toe in the terminal with a running scoreboard.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, parse_moves};
use config::TallyConfig;
use std::sync::Arc;
use tally_tictactoe::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TallyConfig::load_or_default(&cli.config)?;
    if cli.no_mouse {
        config = config.without_mouse();
    }

    // Bad move lists are reported before the terminal is taken over.
    let moves = match cli.moves.as_deref() {
        Some(list) => parse_moves(list)?,
        None => Vec::new(),
    };

    init_tracing(&config)?;
    info!(config = %cli.config.display(), replayed = moves.len(), "Starting tally");

    tui::run(Session::replay(&moves), &config)
}

/// Sends tracing output to the configured log file; stdout belongs to the UI.
fn init_tracing(config: &TallyConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
