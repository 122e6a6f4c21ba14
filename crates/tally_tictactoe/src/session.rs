//! The session state machine: one board, the scoreboard and the game log.

use super::action::{MoveOutcome, Rejection};
use super::contracts::{Contract, MoveContract};
use super::phases::{GameStatus, Outcome};
use super::record::{GameRecord, Scores};
use super::rules::{check_winner, detect_win, is_draw};
use super::{Board, Player, Position, Square};
use tracing::{debug, error, info, instrument};

/// Local two-player tic-tac-toe session.
///
/// Only the board, the move list, the scores and the history are stored.
/// Whose turn it is, the winner, the draw flag and the winning cells are
/// recomputed from the board on every call, so they cannot drift apart.
///
/// Scoring happens inside [`apply_move`](Self::apply_move) on the move that
/// ends the game. Since a finished game accepts no further moves, each game
/// is recorded exactly once no matter how often its state is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) moves: Vec<Position>,
    pub(crate) scores: Scores,
    pub(crate) history: Vec<GameRecord>,
}

impl Session {
    /// Creates a session with an empty board and a blank scoreboard.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays `indices` in order on a fresh session. Invalid entries are
    /// ignored exactly as [`apply_move`](Self::apply_move) ignores them.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut session = Self::new();
        for &index in indices {
            session.apply_move(index);
        }
        session
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions played in the current game, in order.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// X on an even move count, O on an odd one.
    pub fn current_player(&self) -> Player {
        if self.moves.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.board)
    }

    /// Indices of the winning line, or empty while nobody has won.
    pub fn winning_cells(&self) -> Vec<usize> {
        detect_win(&self.board)
            .map(|line| line.indices().to_vec())
            .unwrap_or_default()
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Finished games, oldest first.
    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Marks cell `index` (0-8, row-major) for the player to move.
    ///
    /// When the mark ends the game the result is scored and appended to the
    /// history before returning. Out-of-range indices, occupied cells and
    /// moves after the game ended leave the session untouched and come back
    /// as [`MoveOutcome::Ignored`].
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring move off the board");
            return MoveOutcome::Ignored(Rejection::OutOfRange(index));
        };

        if let Err(rejection) = MoveContract::pre(self, &position) {
            debug!(%rejection, "Ignoring move");
            return MoveOutcome::Ignored(rejection);
        }

        let before = cfg!(debug_assertions).then(|| self.clone());

        let player = self.current_player();
        self.board.set(position, Square::Occupied(player));
        self.moves.push(position);
        debug!(%position, "Mark placed");

        let status = self.status();
        if let Some(result) = status.outcome() {
            self.record(result);
        }
        let outcome = match status {
            GameStatus::InProgress => MoveOutcome::Continued {
                next: self.current_player(),
            },
            GameStatus::Won(winner) => MoveOutcome::Won(winner),
            GameStatus::Drawn => MoveOutcome::Drawn,
        };

        if let Some(before) = before {
            self.verify_transition(&before);
        }

        outcome
    }

    /// Starts a new game. Scores and history are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.moves.clear();
        debug!("Board cleared, X to move");
    }

    /// Clears scores and history, then starts a new game.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!(games = self.history.len(), "Resetting scoreboard");
        self.scores = Scores::default();
        self.history.clear();
        self.reset_game();
    }

    fn record(&mut self, outcome: Outcome) {
        self.scores.record(outcome);
        self.history.push(GameRecord::new(
            outcome,
            self.board.clone(),
            self.moves.clone(),
        ));
        info!(
            %outcome,
            game = self.history.len(),
            x = self.scores.x(),
            o = self.scores.o(),
            draws = self.scores.draws(),
            "Game recorded"
        );
    }

    fn verify_transition(&self, before: &Session) {
        if let Err(violation) = MoveContract::post(before, self) {
            error!(%violation, "Move broke a session invariant");
            debug_assert!(false, "{}", violation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_blank() {
        let session = Session::new();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.winner(), None);
        assert!(!session.is_draw());
        assert!(session.winning_cells().is_empty());
        assert_eq!(session.scores().total(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_moves_alternate() {
        let mut session = Session::new();
        assert_eq!(session.apply_move(4), MoveOutcome::Continued { next: Player::O });
        assert_eq!(session.apply_move(0), MoveOutcome::Continued { next: Player::X });
        assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(session.board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_ignored_move_changes_nothing() {
        let mut session = Session::replay(&[4]);
        let snapshot = session.clone();

        assert_eq!(
            session.apply_move(4),
            MoveOutcome::Ignored(Rejection::SquareOccupied(Position::Center))
        );
        assert_eq!(session.apply_move(9), MoveOutcome::Ignored(Rejection::OutOfRange(9)));
        assert_eq!(session, snapshot);
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_win_is_recorded_once() {
        let mut session = Session::replay(&[0, 4, 1, 5]);
        assert_eq!(session.apply_move(2), MoveOutcome::Won(Player::X));

        // Reading derived state repeatedly must not re-record.
        for _ in 0..3 {
            assert_eq!(session.status(), GameStatus::Won(Player::X));
            assert_eq!(session.winner(), Some(Player::X));
        }
        assert_eq!(session.apply_move(8), MoveOutcome::Ignored(Rejection::GameOver));
        assert_eq!(session.scores().x(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_record_keeps_final_board_and_moves() {
        let session = Session::replay(&[0, 4, 1, 5, 2]);
        let record = &session.history()[0];
        assert_eq!(record.outcome(), &Outcome::Winner(Player::X));
        assert_eq!(record.board(), session.board());
        assert_eq!(
            record.moves(),
            &vec![
                Position::TopLeft,
                Position::Center,
                Position::TopCenter,
                Position::MiddleRight,
                Position::TopRight,
            ]
        );
    }

    #[test]
    fn test_reset_game_keeps_tally() {
        let mut session = Session::replay(&[0, 4, 1, 5, 2]);
        session.reset_game();
        assert_eq!(session.board(), &Board::new());
        assert!(session.moves().is_empty());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.scores().x(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reset_scores_clears_everything() {
        let mut session = Session::replay(&[0, 4, 1, 5, 2]);
        session.reset_scores();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_reset_mid_game() {
        let mut session = Session::replay(&[0, 4, 8]);
        session.reset_game();
        assert_eq!(session.apply_move(4), MoveOutcome::Continued { next: Player::O });
        assert!(session.history().is_empty());
    }
}
