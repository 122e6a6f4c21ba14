//! Application state and event dispatch.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tally_tictactoe::{MoveOutcome, Position, Session};
use tracing::{debug, info, instrument};

use crate::input::{Command, command_for, move_cursor};
use crate::ui::ScreenLayout;

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running and redraw.
    Stay,
    /// Leave the event loop.
    Quit,
}

/// Main application state: the session plus view-only cursor state.
#[derive(Debug, Getters)]
pub struct App {
    session: Session,
    cursor: Position,
    history_limit: usize,
}

impl App {
    /// Creates an app around an existing session.
    #[instrument(skip(session))]
    pub fn new(session: Session, history_limit: usize) -> Self {
        Self {
            session,
            cursor: Position::Center,
            history_limit,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        // crossterm reports releases too on some platforms
        if key.kind == KeyEventKind::Release {
            return Transition::Stay;
        }
        match command_for(key) {
            Some(command) => self.dispatch(command),
            None => Transition::Stay,
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    ///
    /// `area` must be the frame area the screen was last drawn into.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Transition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Transition::Stay;
        }
        match ScreenLayout::new(area).cell_at(mouse.column, mouse.row) {
            Some(pos) => self.dispatch(Command::Play(pos)),
            None => Transition::Stay,
        }
    }

    fn dispatch(&mut self, command: Command) -> Transition {
        debug!(?command, "Dispatching command");
        match command {
            Command::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::PlayCursor => self.play(self.cursor),
            Command::Play(pos) => self.play(pos),
            Command::NewGame => {
                info!("New game");
                self.session.reset_game();
            }
            Command::ResetScores => {
                info!("Reset scores");
                self.session.reset_scores();
            }
            Command::Quit => return Transition::Quit,
        }
        Transition::Stay
    }

    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        match self.session.apply_move(pos.to_index()) {
            MoveOutcome::Ignored(rejection) => debug!(%rejection, "Click ignored"),
            outcome => match outcome.finished() {
                Some(result) => info!(%result, "Game over"),
                None => debug!(?outcome, "Move played"),
            },
        }
    }
}
