//! First-class action types for the history engine.
//!
//! Presentation layers never reach into engine state. They translate their
//! events into [`Action`] values and hand them to [`Game::dispatch`], which
//! reports back a [`Transition`].
//!
//! [`Game::dispatch`]: crate::Game::dispatch

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A request to change game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    /// Place the current player's mark at a cell index (0-8).
    #[display("move at cell {cell}")]
    Move {
        /// Cell index, row-major.
        cell: usize,
    },
    /// Jump to an entry of the move list as currently displayed.
    #[display("jump to displayed entry {index}")]
    Jump {
        /// Index into the displayed move list.
        index: usize,
    },
    /// Flip the move list between ascending and descending order.
    #[display("toggle order")]
    ToggleOrder,
}

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),
    /// The current snapshot already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of a well-formed move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed and a snapshot appended.
    Placed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// History index of the new snapshot.
        step: usize,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveResult::Placed { .. })
    }
}

/// What a dispatched [`Action`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Outcome of a move request.
    Moved(MoveResult),
    /// The pointer now sits at this history index.
    Jumped {
        /// History index after translation from the displayed index.
        step: usize,
    },
    /// The order flag after toggling.
    Reordered {
        /// True when the move list is shown newest first.
        reversed: bool,
    },
}

/// Caller contract violation.
///
/// These only arise from a presentation bug, never from player input,
/// so they are reported instead of absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell index {cell} is out of range (must be 0-8)")]
    CellOutOfRange {
        /// The offending index.
        cell: usize,
    },
    /// Displayed index outside the move list.
    #[display("Move list index {index} is out of range (list has {len} entries)")]
    StepOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the move list.
        len: usize,
    },
}
