//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and which cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    player: Player,
    cells: [Position; 3],
}

impl WinLine {
    /// The player holding all three cells.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three winning positions, in line order.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The three winning cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }
}

/// Finds the first fully marked line on the board.
///
/// Lines are tried in [`LINES`] order so the result is deterministic even
/// for boards no legal game could reach.
#[instrument(skip(board))]
pub fn detect_win(board: &Board) -> Option<WinLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(WinLine {
                player,
                cells: [a, b, c],
            }),
            _ => None,
        }
    })
}

/// Returns `Some(player)` if the player has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    detect_win(board).map(|line| line.player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_win(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                let found = detect_win(&board).expect("line should win");
                assert_eq!(found.player(), player);
                assert_eq!(found.cells(), line);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Player::X), (Position::TopCenter, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_take_priority_over_diagonals() {
        // Top row and the main diagonal are both complete.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(detect_win(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_anti_diagonal_indices() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(detect_win(&board).map(|l| l.indices()), Some([2, 4, 6]));
    }
}
