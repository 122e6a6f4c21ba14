//! Score ledger invariant: the scoreboard agrees with the game history.

use super::Invariant;
use crate::{Outcome, Player, Session};

/// Invariant: every counter on the scoreboard equals the number of history
/// records with that outcome, so `x + o + draws == history.len()`.
pub struct ScoreLedgerInvariant;

impl Invariant<Session> for ScoreLedgerInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();
        let scores = session.scores();
        let tally = |outcome: Outcome| {
            history.iter().filter(|r| *r.outcome() == outcome).count() as u32
        };

        scores.total() as usize == history.len()
            && scores.x() == tally(Outcome::Winner(Player::X))
            && scores.o() == tally(Outcome::Winner(Player::O))
            && scores.draws() == tally(Outcome::Draw)
    }

    fn description() -> &'static str {
        "Scores add up to the recorded games"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_games_hold() {
        let mut session = Session::replay(&[0, 3, 1, 4, 2]);
        session.reset_game();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.apply_move(index);
        }
        assert_eq!(session.history().len(), 2);
        assert!(ScoreLedgerInvariant::holds(&session));
    }

    #[test]
    fn test_unrecorded_score_violates() {
        let mut session = Session::new();
        session.scores.record(Outcome::Winner(Player::O));
        assert!(!ScoreLedgerInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_counter_violates() {
        let mut session = Session::replay(&[0, 3, 1, 4, 2]);
        session.scores = Default::default();
        session.scores.record(Outcome::Winner(Player::O));
        assert!(!ScoreLedgerInvariant::holds(&session));
    }
}
