//! Results of asking the session to play a cell.
//!
//! An invalid move is not a failure: the session stays untouched and the
//! caller gets [`MoveOutcome::Ignored`] with the reason, so a stray click in
//! the view can be logged and otherwise forgotten.

use super::{Outcome, Player, Position};

/// What a call to [`Session::apply_move`](crate::Session::apply_move) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and the game goes on.
    Continued {
        /// Player to move next.
        next: Player,
    },
    /// The mark completed a line; the win was scored and recorded.
    Won(Player),
    /// The mark filled the board without a line; the draw was scored and recorded.
    Drawn,
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// True when the move was dropped.
    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveOutcome::Ignored(_))
    }

    /// The recorded outcome when this move ended the game.
    pub fn finished(&self) -> Option<Outcome> {
        match self {
            MoveOutcome::Won(player) => Some(Outcome::Winner(*player)),
            MoveOutcome::Drawn => Some(Outcome::Draw),
            MoveOutcome::Continued { .. } | MoveOutcome::Ignored(_) => None,
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The index is not one of the 9 cells.
    #[display("Position {} is off the board", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
