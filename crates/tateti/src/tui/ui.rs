//! Stateless rendering of the keypad board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tateti_core::{Cell, ColorSelector, Palette, Player, Position, Rgb, WinLine, key_for_position};

use super::view::TerminalView;
use crate::keypad::char_for_key;

/// Draws header, live board, last finished match and status.
pub fn draw(frame: &mut Frame, view: &TerminalView, palette: &Palette) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Boards
            Constraint::Length(3), // Status
            Constraint::Length(3), // Keys
        ])
        .split(area);

    draw_header(frame, chunks[0], view, palette);

    let boards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let snapshot = view.snapshot();
    draw_board(frame, boards[0], "Board", &snapshot.board, None, palette, true);
    match view.last_match() {
        Some((board, outcome)) => {
            let line = outcome.line();
            draw_board(frame, boards[1], "Last match", board, line, palette, false);
        }
        None => {
            let empty = Paragraph::new("No match finished yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().title("Last match").borders(Borders::ALL));
            frame.render_widget(empty, boards[1]);
        }
    }

    let status = match view.banner() {
        Some(banner) => format!("{banner} | {}", view.status()),
        None => view.status(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let keys = Paragraph::new(
        "1/2/3 easy/medium/hard  4 colour P1  r colour P2  f mode  v reset  Esc quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(keys, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &TerminalView, palette: &Palette) {
    let snapshot = view.snapshot();
    let score = |player: Player, points: u8| {
        Span::styled(
            format!(" {player} ({}) {points} ", player_mark(player)),
            Style::default()
                .fg(player_color(palette, player))
                .add_modifier(Modifier::BOLD),
        )
    };
    let header = Line::from(vec![
        score(Player::P1, snapshot.p1_score),
        Span::raw("-"),
        score(Player::P2, snapshot.p2_score),
        Span::styled(
            format!("  {} / {}", view.mode().label(), view.difficulty().label()),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    let paragraph = Paragraph::new(header)
        .alignment(Alignment::Center)
        .block(Block::default().title("Tateti").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    board: &[Cell; 9],
    highlight: Option<WinLine>,
    palette: &Palette,
    show_keys: bool,
) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let index = row * 3 + col;
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(board[index], index, highlight, palette, show_keys));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            rows[row * 2],
        );
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn cell_span(
    cell: Cell,
    index: usize,
    highlight: Option<WinLine>,
    palette: &Palette,
    show_keys: bool,
) -> Span<'static> {
    let (symbol, style) = match cell {
        Cell::Empty => {
            let label = Position::from_index(index)
                .filter(|_| show_keys)
                .map(|pos| char_for_key(key_for_position(pos)))
                .unwrap_or(' ');
            (
                format!("   {label}   "),
                Style::default().fg(Color::DarkGray),
            )
        }
        Cell::Occupied(player) => (
            format!("   {}   ", player_mark(player)),
            Style::default()
                .fg(player_color(palette, player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlight.is_some_and(|line| line.contains(index)) {
        style.bg(Color::White).add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Span::styled(symbol, style)
}

fn player_mark(player: Player) -> char {
    match player {
        Player::P1 => 'X',
        Player::P2 => 'O',
    }
}

fn player_color(palette: &Palette, player: Player) -> Color {
    let rgb = match player {
        Player::P1 => palette.player1_color(),
        Player::P2 => palette.player2_color(),
    };
    terminal_color(rgb)
}

/// Stretches LED intensities (at most 50) to the full terminal range.
fn terminal_color(rgb: Rgb) -> Color {
    let scale = |v: u8| (u16::from(v) * 255 / 50).min(255) as u8;
    Color::Rgb(scale(rgb.r), scale(rgb.g), scale(rgb.b))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
