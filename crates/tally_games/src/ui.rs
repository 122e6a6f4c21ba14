//! Stateless UI rendering for the tally screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tally_tictactoe::{GameStatus, Outcome, Player, Position, Scores, Session, Square};

use crate::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Where each part of the screen goes for a given frame area.
///
/// Shared by the renderer and by mouse hit-testing so a click always lands
/// on the cell that was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and subtitle.
    pub header: Rect,
    /// The 9 cells in row-major order.
    pub cells: [Rect; 9],
    /// Turn / result line under the board.
    pub status: Rect,
    /// Win and draw counters.
    pub scoreboard: Rect,
    /// Finished games.
    pub history: Rect,
    /// Key hints.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(12),   // Board and panels
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT * 3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[1]);

        let board = center_rect(left[0], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(
                board.x + col * CELL_WIDTH,
                board.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        Self {
            header: rows[0],
            cells,
            status: left[1],
            scoreboard: right[0],
            history: right[1],
            footer: rows[2],
        }
    }

    /// The cell drawn at terminal coordinates (`column`, `row`), if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| {
                column >= cell.x && column < cell.right() && row >= cell.y && row < cell.bottom()
            })
            .and_then(Position::from_index)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let session = app.session();

    draw_header(frame, layout.header);
    draw_board(frame, &layout, session, *app.cursor());
    draw_status(frame, layout.status, session);
    draw_scoreboard(frame, layout.scoreboard, session.scores());
    if !session.history().is_empty() {
        draw_history(frame, layout.history, session, *app.history_limit());
    }
    draw_footer(frame, layout.footer);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The classic game reinvented",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, session: &Session, cursor: Position) {
    let winning = session.winning_cells();
    let in_progress = session.status() == GameStatus::InProgress;

    for pos in Position::ALL {
        let index = pos.to_index();
        let (symbol, mark_style) = match session.board().get(pos) {
            Square::Empty => (
                (index + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(player) => (
                player.to_string(),
                player_style(player).add_modifier(Modifier::BOLD),
            ),
        };

        let (cell_style, border_style) = if winning.contains(&index) {
            (
                Style::default().bg(Color::Green),
                Style::default().fg(Color::LightGreen),
            )
        } else if in_progress && pos == cursor {
            (
                Style::default().bg(Color::White).fg(Color::Black),
                Style::default().fg(Color::White),
            )
        } else {
            (Style::default(), Style::default().fg(Color::DarkGray))
        };

        let cell = Paragraph::new(Line::from(Span::styled(symbol, mark_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .style(cell_style),
            );
        frame.render_widget(cell, layout.cells[index]);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, session: &Session) {
    let line = match session.status() {
        GameStatus::Won(player) => Line::from(Span::styled(
            format!("{} wins!", player),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        GameStatus::Drawn => Line::from(Span::styled(
            "It's a draw!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        GameStatus::InProgress => {
            let player = session.current_player();
            Line::from(vec![
                Span::raw("Next: "),
                Span::styled(player.to_string(), player_style(player).add_modifier(Modifier::BOLD)),
            ])
        }
    };

    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, scores: &Scores) {
    let block = Block::default().title("Scoreboard").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let counters = [
        ("Player X", scores.x(), player_style(Player::X)),
        ("Draws", scores.draws(), Style::default().fg(Color::Gray)),
        ("Player O", scores.o(), player_style(Player::O)),
    ];
    for ((label, count, style), column) in counters.into_iter().zip(columns.iter()) {
        let counter = Paragraph::new(vec![
            Line::from(Span::styled(label, style)),
            Line::from(Span::styled(
                count.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(counter, *column);
    }
}

fn draw_history(frame: &mut Frame, area: Rect, session: &Session, limit: usize) {
    let history = session.history();
    // Newest games stay visible when the panel is shorter than the limit.
    let rows = usize::from(area.height.saturating_sub(2));
    let skip = history.len().saturating_sub(limit.min(rows));

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(n, record)| {
            let outcome = *record.outcome();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("Game {}: ", n + 1),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(outcome.to_string(), outcome_style(outcome)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Game History").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(
        "arrows move | Enter play | 1-9 play cell | n New Game | r Reset Scores | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue),
        Player::O => Style::default().fg(Color::Red),
    }
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome.winner() {
        Some(player) => player_style(player),
        None => Style::default().fg(Color::Yellow),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
