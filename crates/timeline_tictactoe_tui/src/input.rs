//! Keyboard translation.
//!
//! Keys become [`Command`] values here; nothing in this module touches game
//! state. Commands that change the game carry an engine [`Action`].

use crossterm::event::KeyCode;
use timeline_tictactoe::{Action, Position};

/// Direction of a cursor step on the board.
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

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the engine.
    Engine(Action),
    /// Place a mark under the board cursor.
    PlaceAtCursor,
    /// Move the board cursor.
    Cursor(Direction),
    /// Highlight the previous move-list entry.
    SelectPrevious,
    /// Highlight the next move-list entry.
    SelectNext,
    /// Jump to the highlighted move-list entry.
    JumpToSelected,
    /// Leave the application.
    Quit,
}

/// Translates a key press into a command.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up => Some(Command::Cursor(Direction::Up)),
        KeyCode::Down => Some(Command::Cursor(Direction::Down)),
        KeyCode::Left => Some(Command::Cursor(Direction::Left)),
        KeyCode::Right => Some(Command::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char('[') => Some(Command::SelectPrevious),
        KeyCode::Char(']') => Some(Command::SelectNext),
        KeyCode::Char('g') => Some(Command::JumpToSelected),
        KeyCode::Char('o') => Some(Command::Engine(Action::ToggleOrder)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::Engine(Action::Move { cell: digit as usize - 1 })),
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.grid_row(), cursor.grid_col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_grid(row, col).unwrap_or(cursor)
}
