//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally_tictactoe::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(Direction),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Clear the board, keep the scoreboard.
    NewGame,
    /// Clear the board and the scoreboard.
    ResetScores,
    /// Leave the app.
    Quit,
}

/// Maps a key to a command; unbound keys give `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Command::PlayCursor,
        // 1 is top-left, 9 is bottom-right
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Command::Play(Position::from_index(digit - 1)?)
        }
        KeyCode::Char('n') => Command::NewGame,
        KeyCode::Char('r') => Command::ResetScores,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
