//! Tally tic-tac-toe - pure game logic for a local two-player session
//!
//! A [`Session`] owns one 3x3 board plus the running scoreboard and the
//! log of finished games. Every mutation goes through three entry points:
//!
//! - [`Session::apply_move`] marks a cell, evaluates the board and, when the
//!   game ends, records the result exactly once
//! - [`Session::reset_game`] clears the board but keeps scores and history
//! - [`Session::reset_scores`] clears everything
//!
//! Invalid moves (occupied cell, finished game, index off the board) are
//! ignored and reported back as [`MoveOutcome::Ignored`], never as errors.
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{MoveOutcome, Player, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 4, 1, 5] {
//!     session.apply_move(index);
//! }
//! assert_eq!(session.apply_move(2), MoveOutcome::Won(Player::X));
//! assert_eq!(session.winning_cells(), vec![0, 1, 2]);
//! assert_eq!(session.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod phases;
mod position;
mod record;
pub mod rules;
mod session;
mod types;

pub use action::{MoveOutcome, Rejection};
pub use contracts::{Contract, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, ScoreLedgerInvariant, SessionInvariants,
};
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use record::{GameRecord, Scores};
pub use rules::{WinLine, check_winner, detect_win, is_draw, is_full};
pub use session::Session;
pub use types::{Board, Player, Square};
