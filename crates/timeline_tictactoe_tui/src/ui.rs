//! Stateless UI rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timeline_tictactoe::{GameView, Player, Position, Square};

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(frame.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(7), // Board
            Constraint::Length(3), // Status
            Constraint::Min(3),    // Message
        ])
        .split(columns[0]);

    let title = Paragraph::new("Timeline Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, left[0]);

    draw_board(frame, left[1], &view, app.cursor());

    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, left[2]);

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Last action"));
    frame.render_widget(message, left[3]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(columns[1]);

    draw_moves(frame, right[0], &view, app.selected());
    draw_help(frame, right[1], &view);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::from_grid(row, col) {
                spans.push(cell_span(view, pos, cursor));
            }
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn cell_span(view: &GameView, pos: Position, cursor: Position) -> Span<'static> {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if view.is_highlighted(pos.to_index()) {
        style = style.bg(Color::Green);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, selected: usize) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.displayed_index() == selected { "> " } else { "  " };
            let mut style = Style::default();
            if *entry.is_current() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if *entry.displayed_index() == selected {
                style = style.fg(Color::Yellow);
            }
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, entry.label()), style)))
        })
        .collect();

    let title = if *view.reversed() { "Moves (newest first)" } else { "Moves" };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_help(frame: &mut Frame, area: Rect, view: &GameView) {
    let help = vec![
        Line::from("arrows/1-9 choose  enter place  [ ] select  g jump"),
        Line::from(format!("o {}  q quit", view.order_label())),
    ];
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}
