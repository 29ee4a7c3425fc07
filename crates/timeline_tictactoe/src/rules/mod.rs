//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history bookkeeping so the engine and the
//! view can both ask the same question of any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    Ongoing,
    /// A player holds a full line.
    Win {
        /// The player owning the line.
        winner: Player,
        /// Cell indices of the line, in table order.
        line: [usize; 3],
    },
    /// The board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning cells if there are any.
    pub fn line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the snapshot accepts no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::Win { winner, line } => write!(f, "Player {} wins on {:?}", winner, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// A complete line always wins, even on a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(WinningLine { winner, line }) = check_winner(board) {
        return Outcome::Win { winner, line };
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
