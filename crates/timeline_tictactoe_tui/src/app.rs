//! Application state and logic.

use crate::config::AppConfig;
use crate::input::{Command, command_for_key, move_cursor};
use crossterm::event::KeyCode;
use timeline_tictactoe::{Action, Game, GameView, MoveResult, Position, Transition};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// The game itself lives in the engine; the app only adds the board cursor,
/// the move-list selection and a one-line message.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    selected: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let mut game = Game::new();
        if *config.start_reversed() {
            game.toggle_order();
        }
        Self {
            game,
            cursor: Position::Center,
            selected: 0,
            message: "Player X starts. Press 1-9 or Enter to move.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Builds a fresh view of the game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Displayed index of the highlighted move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(command) = command_for_key(key) {
            self.handle_command(command);
        }
    }

    /// Handles a translated command.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Engine(action) => self.dispatch(action),
            Command::PlaceAtCursor => self.dispatch(Action::Move {
                cell: self.cursor.to_index(),
            }),
            Command::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Command::SelectNext => self.selected = (self.selected + 1).min(self.game.len() - 1),
            Command::JumpToSelected => self.dispatch(Action::Jump {
                index: self.selected,
            }),
            Command::Quit => self.should_quit = true,
        }
    }

    fn dispatch(&mut self, action: Action) {
        match self.game.dispatch(action) {
            Ok(transition) => {
                debug!(?transition, "Action applied");
                self.message = describe(transition);
            }
            Err(e) => {
                warn!(error = %e, %action, "Action refused");
                self.message = e.to_string();
            }
        }
        if let Some(entry) = self.game.view().current_entry() {
            self.selected = *entry.displayed_index();
        }
    }
}

fn describe(transition: Transition) -> String {
    match transition {
        Transition::Moved(MoveResult::Placed { player, position, .. }) => {
            format!("{} played {}", player, position.label())
        }
        Transition::Moved(MoveResult::Rejected(rejection)) => rejection.to_string(),
        Transition::Jumped { step: 0 } => "Back at the start of the game".to_string(),
        Transition::Jumped { step } => format!("Showing move #{}", step),
        Transition::Reordered { reversed: true } => "Move list: newest first".to_string(),
        Transition::Reordered { reversed: false } => "Move list: oldest first".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_cursor_placement() {
        let mut app = app();
        app.handle_command(Command::Cursor(Direction::Up));
        app.handle_command(Command::Cursor(Direction::Left));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.message(), "X played Top-left");
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.message(), "Square Center is already occupied");
    }

    #[test]
    fn test_selection_follows_pointer_and_jumps() {
        let mut app = app();
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.selected(), 3);

        app.handle_key(KeyCode::Char('['));
        app.handle_key(KeyCode::Char('['));
        app.handle_key(KeyCode::Char('g'));
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.message(), "Showing move #1");

        app.handle_key(KeyCode::Char('o'));
        // Same history entry, now shown third from the top.
        assert_eq!(app.selected(), 2);
        assert!(app.game().is_reversed());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_start_reversed_from_config() {
        let config: AppConfig = toml::from_str("start_reversed = true").unwrap();
        let app = App::new(&config);
        assert!(app.game().is_reversed());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
