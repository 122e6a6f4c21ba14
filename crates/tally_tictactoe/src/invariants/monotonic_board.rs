//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Player, Session, Square};

/// Invariant: replaying the move list onto an empty board reproduces the
/// current board, with every move landing on an empty square.
///
/// Catches overwritten squares and marks placed without a recorded move.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for pos in session.moves() {
            if !reconstructed.is_empty(*pos) {
                return false;
            }
            reconstructed.set(*pos, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_moves_hold() {
        assert!(MonotonicBoardInvariant::holds(&Session::replay(&[0, 4, 2, 6])));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = Session::replay(&[4]);
        session.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_duplicate_move_violates() {
        let mut session = Session::replay(&[4]);
        session.moves.push(Position::Center);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
