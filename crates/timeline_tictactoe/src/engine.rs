//! History engine for tic-tac-toe.
//!
//! The engine owns an ordered list of [`Snapshot`]s and a pointer into it.
//! Jumping only moves the pointer. Moving from a pointer that is not at the
//! end discards the abandoned future before appending, so the history is
//! always a single line of play.

use super::action::{Action, EngineError, MoveResult, Rejection, Transition};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::position::Position;
use super::rules::{self, Outcome};
use super::snapshot::Snapshot;
use super::types::Player;
use super::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with a navigable move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) step: usize,
    pub(crate) reversed: bool,
}

impl Game {
    /// Creates a new game at the empty board, move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::start()],
            step: 0,
            reversed: false,
        }
    }

    /// Replays cell indices from a fresh game, stopping at the first fault.
    ///
    /// Rejected moves are skipped just as they would be interactively.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, EngineError> {
        let mut game = Self::new();
        for &cell in cells {
            game.apply_move(cell)?;
        }
        Ok(game)
    }

    /// Applies a state-changing [`Action`].
    #[instrument(skip(self), fields(step = self.step, reversed = self.reversed))]
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, EngineError> {
        match action {
            Action::Move { cell } => self.apply_move(cell).map(Transition::Moved),
            Action::Jump { index } => self.jump_to(index).map(|step| Transition::Jumped { step }),
            Action::ToggleOrder => Ok(Transition::Reordered {
                reversed: self.toggle_order(),
            }),
        }
    }

    /// Places the current player's mark at `cell` (0-8).
    ///
    /// Returns [`MoveResult::Rejected`] without touching any state when the
    /// current snapshot is already decided or the square is taken.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `cell > 8`.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveResult, EngineError> {
        let Some(position) = Position::from_index(cell) else {
            warn!(cell, "Move outside the board");
            return Err(EngineError::CellOutOfRange { cell });
        };

        let current = self.history[self.step];
        if rules::evaluate(current.board()).is_terminal() {
            debug!(%position, "Move rejected: game over");
            return Ok(MoveResult::Rejected(Rejection::GameOver));
        }
        if !current.board().is_empty(position) {
            debug!(%position, "Move rejected: square occupied");
            return Ok(MoveResult::Rejected(Rejection::Occupied(position)));
        }

        let player = Player::for_step(self.step);
        let next = current.advance(position, player);

        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping abandoned moves");
        }
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        if let Outcome::Win { winner, line } = rules::evaluate(next.board()) {
            info!(%winner, ?line, "Winning move");
        }
        debug!(%player, %position, step = self.step, "Move applied");

        self.check_invariants();

        Ok(MoveResult::Placed {
            player,
            position,
            step: self.step,
        })
    }

    /// Moves the pointer to the entry shown at `displayed_index` in the move list.
    ///
    /// When the list is reversed, displayed index 0 is the latest snapshot.
    /// Returns the history index the pointer now holds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if the index is past the list.
    #[instrument(skip(self), fields(reversed = self.reversed))]
    pub fn jump_to(&mut self, displayed_index: usize) -> Result<usize, EngineError> {
        let len = self.history.len();
        if displayed_index >= len {
            warn!(displayed_index, len, "Jump outside the move list");
            return Err(EngineError::StepOutOfRange {
                index: displayed_index,
                len,
            });
        }
        self.step = self.history_index(displayed_index);
        debug!(step = self.step, to_move = %self.to_move(), "Jumped");
        Ok(self.step)
    }

    /// Flips the display order of the move list and returns the new flag.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> bool {
        self.reversed = !self.reversed;
        debug!(reversed = self.reversed, "Move list order toggled");
        self.reversed
    }

    /// Builds the read-only view of the current state.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn view(&self) -> GameView {
        GameView::build(self)
    }

    /// Logs any broken history invariant; debug builds also panic.
    fn check_invariants(&self) {
        if let Err(violations) = TimelineInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            if cfg!(debug_assertions) {
                panic!("History invariants violated: {}", violations.len());
            }
        }
    }

    /// Translates a displayed move-list index into a history index.
    pub(crate) fn history_index(&self, displayed_index: usize) -> usize {
        if self.reversed {
            self.history.len() - 1 - displayed_index
        } else {
            displayed_index
        }
    }

    /// Current history index.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of snapshots, including the empty start.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Number of moves recorded in the history.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// All snapshots in chronological order.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// The snapshot the pointer refers to.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Outcome of the current snapshot.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current().board())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
