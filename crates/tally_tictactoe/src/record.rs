//! Scoreboard and finished-game records.

use super::{Board, Outcome, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Snapshot of one finished game. Never modified once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    /// How the game ended.
    outcome: Outcome,
    /// The board as it stood when the game ended.
    board: Board,
    /// Positions played, in order.
    moves: Vec<Position>,
}

/// Running tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
    draws: u32,
}

impl Scores {
    /// Games won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Games won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Wins for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total finished games.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.draws
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x += 1,
            Outcome::Winner(Player::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bumps_one_counter() {
        let mut scores = Scores::default();
        scores.record(Outcome::Winner(Player::O));
        scores.record(Outcome::Draw);
        scores.record(Outcome::Winner(Player::O));

        assert_eq!(scores.x(), 0);
        assert_eq!(scores.wins(Player::O), 2);
        assert_eq!(scores.draws(), 1);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn test_record_serializes_outcome_board_and_moves() {
        let record = GameRecord::new(Outcome::Draw, Board::new(), vec![Position::Center]);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["outcome"], "Draw");
        assert_eq!(json["board"]["squares"].as_array().map(Vec::len), Some(9));
        assert_eq!(json["moves"], serde_json::json!(["Center"]));
    }
}
