//! Command-line interface for tally.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tally_tictactoe::Position;
use tracing::instrument;

/// Tally - tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Two-player tic-tac-toe in the terminal, keeping score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "tally.toml")]
    pub config: PathBuf,

    /// Moves to replay before the board is shown, e.g. `0,4,center`
    #[arg(long)]
    pub moves: Option<String>,

    /// Disable mouse capture (cells can still be played from the keyboard)
    #[arg(long)]
    pub no_mouse: bool,
}

/// Parses a comma-separated move list of indices (0-8) or position labels.
#[instrument]
pub fn parse_moves(list: &str) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match Position::from_label_or_number(token) {
            Some(pos) => indices.push(pos.to_index()),
            None => bail!("Unknown position '{}' in move list (use 0-8 or a label like 'center')", token),
        }
    }
    Ok(indices)
}
