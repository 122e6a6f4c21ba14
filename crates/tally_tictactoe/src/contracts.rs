//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::Rejection;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::{Position, Session, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the current game has not ended.
struct GameInProgress;

impl GameInProgress {
    fn check(session: &Session) -> Result<(), Rejection> {
        if session.status().is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
struct SquareIsEmpty;

impl SquareIsEmpty {
    fn check(pos: Position, session: &Session) -> Result<(), Rejection> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Game is still in progress
/// - Square must be empty
///
/// Postconditions:
/// - Every [`SessionInvariants`] member holds
/// - Squares marked before the move are unchanged
/// - Exactly one move was added
/// - History grew by at most one record and kept its earlier records
pub struct MoveContract;

impl Contract<Session, Position> for MoveContract {
    #[instrument(skip(session))]
    fn pre(session: &Session, pos: &Position) -> Result<(), Rejection> {
        GameInProgress::check(session)?;
        SquareIsEmpty::check(*pos, session)?;
        Ok(())
    }

    fn post(before: &Session, after: &Session) -> Result<(), InvariantViolation> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })?;

        let kept_marks = Position::ALL.iter().all(|pos| {
            let old = before.board().get(*pos);
            old == Square::Empty || old == after.board().get(*pos)
        });
        if !kept_marks {
            return Err(InvariantViolation::new("A marked square changed"));
        }

        if after.moves().len() != before.moves().len() + 1 {
            return Err(InvariantViolation::new("A move must add exactly one mark"));
        }

        let grown = after.history().len().saturating_sub(before.history().len());
        if grown > 1 || !after.history().starts_with(before.history()) {
            return Err(InvariantViolation::new(
                "History only grows, by at most one record per move",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        let session = Session::new();
        assert!(MoveContract::pre(&session, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let session = Session::replay(&[4]);
        assert_eq!(
            MoveContract::pre(&session, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_wins_over_occupied() {
        let session = Session::replay(&[0, 4, 1, 5, 2]);
        assert_eq!(MoveContract::pre(&session, &Position::TopLeft), Err(Rejection::GameOver));
        assert_eq!(MoveContract::pre(&session, &Position::BottomRight), Err(Rejection::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Session::replay(&[0, 4]);
        let mut after = before.clone();
        after.apply_move(8);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_when_game_is_recorded() {
        let before = Session::replay(&[0, 4, 1, 5]);
        let mut after = before.clone();
        after.apply_move(2);
        assert_eq!(after.history().len(), 1);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Session::replay(&[4]);
        let mut after = before.clone();
        after.apply_move(0);
        after.board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_rejects_a_no_op() {
        let before = Session::replay(&[4]);
        let err = MoveContract::post(&before, &before.clone()).unwrap_err();
        assert!(err.to_string().contains("exactly one mark"));
    }
}
