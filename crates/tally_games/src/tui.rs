//! Terminal setup and the event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use tally_tictactoe::Session;
use tracing::{debug, error, info, instrument};

use crate::app::{App, Transition};
use crate::config::TallyConfig;
use crate::ui;

/// Takes over the terminal, runs the game until the user quits, then restores it.
#[instrument(skip_all, fields(mouse = *config.mouse()))]
pub fn run(session: Session, config: &TallyConfig) -> Result<()> {
    info!("Starting tally TUI");

    let guard = TerminalGuard::enter(*config.mouse())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, *config.history_limit());
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    let scores = app.session().scores();
    info!(
        x = scores.x(),
        o = scores.o(),
        draws = scores.draws(),
        "Tally TUI exited"
    );
    res
}

/// Raw mode plus alternate screen, undone on drop (including while unwinding).
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on every early return restores the terminal.
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let raw = disable_raw_mode();
        let screen = restore_screen(&mut io::stdout(), self.mouse);
        match raw.and(screen) {
            Ok(()) => debug!("Terminal restored"),
            Err(err) => error!(error = %err, "Failed to restore terminal"),
        }
    }
}

fn restore_screen(out: &mut impl Write, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen, Show)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut area = Rect::default();
    loop {
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        let transition = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Transition::Stay
            }
            _ => Transition::Stay,
        };

        if transition == Transition::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restored(mouse: bool) -> String {
        let mut out = Vec::new();
        restore_screen(&mut out, mouse).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let out = restored(false);
        assert!(out.contains("\x1b[?1049l"));
        assert!(out.contains("\x1b[?25h"));
        assert!(!out.contains("\x1b[?1000l"));
    }

    #[test]
    fn test_restore_releases_mouse_when_captured() {
        assert!(restored(true).contains("\x1b[?1000l"));
    }
}
