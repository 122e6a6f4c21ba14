//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Player, Session};

/// Invariant: X has either as many marks as O or exactly one more, and the
/// player to move follows from the move count.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let expected_next = if x_count == o_count {
            Player::X
        } else {
            Player::O
        };

        (x_count == o_count || x_count == o_count + 1)
            && session.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_session_holds() {
        let session = Session::new();
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let session = Session::replay(&[0, 4, 2, 6, 8]);
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = Session::replay(&[0]);
        session.board.set(Position::Center, Square::Occupied(Player::X));
        session.moves.push(Position::Center);
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
