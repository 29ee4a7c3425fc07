//! Terminal front end for timeline_tictactoe.
//!
//! Draws the board, status line and move list, and turns key presses into
//! engine actions. All game logic stays in the engine crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// A terminal mode switched on during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalMode {
    RawMode,
    AlternateScreen,
}

/// Undoes whatever terminal setup succeeded when dropped.
///
/// Covers early returns from a failed setup step as well as the normal exit.
/// Restore failures are logged and never replace the UI loop's own result.
#[derive(Debug, Default)]
struct TerminalGuard {
    entered: Vec<TerminalMode>,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    fn enter() -> Result<Self> {
        let mut guard = Self::default();
        enable_raw_mode()?;
        guard.entered.push(TerminalMode::RawMode);
        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.entered.push(TerminalMode::AlternateScreen);
        Ok(guard)
    }

    /// Modes to undo, most recent first.
    fn pending_restores(&self) -> impl Iterator<Item = TerminalMode> + '_ {
        self.entered.iter().rev().copied()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        for mode in self.pending_restores() {
            debug!(?mode, "Restoring terminal");
            let restored = match mode {
                TerminalMode::AlternateScreen => execute!(io::stdout(), LeaveAlternateScreen, Show),
                TerminalMode::RawMode => disable_raw_mode(),
            };
            if let Err(e) = restored {
                warn!(?mode, error = %e, "Failed to restore terminal");
            }
        }
    }
}

/// Runs the terminal UI until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Timeline Tic-Tac-Toe TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!(moves = app.game().move_count(), "Exiting");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_in_reverse_order() {
        let mut guard = TerminalGuard::default();
        guard.entered.push(TerminalMode::RawMode);
        guard.entered.push(TerminalMode::AlternateScreen);
        let pending: Vec<_> = guard.pending_restores().collect();
        assert_eq!(
            pending,
            vec![TerminalMode::AlternateScreen, TerminalMode::RawMode]
        );
        guard.entered.clear();
    }

    #[test]
    fn test_guard_after_failed_screen_switch_only_leaves_raw_mode() {
        let mut guard = TerminalGuard::default();
        guard.entered.push(TerminalMode::RawMode);
        let pending: Vec<_> = guard.pending_restores().collect();
        assert_eq!(pending, vec![TerminalMode::RawMode]);
        guard.entered.clear();
    }

    #[test]
    fn test_empty_guard_restores_nothing() {
        let guard = TerminalGuard::default();
        assert_eq!(guard.pending_restores().count(), 0);
    }
}
