//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn board_from(rows: &str) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.into_iter().zip(rows.chars().filter(|c| !c.is_whitespace())) {
            match ch {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = board_from("XOX OX. ...");
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from("XOX OXO OXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X completes the main diagonal on the last move.
        let board = board_from("XOX OXO OXX");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
