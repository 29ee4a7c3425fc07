//! A single entry of the game history.

use super::position::{MoveCoords, Position};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// A board state plus the move that produced it.
///
/// The opening snapshot has no producing move, so `last_move` is `None`
/// rather than a placeholder coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<MoveCoords>,
}

impl Snapshot {
    /// The empty opening board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the snapshot that follows this one when `player` takes `pos`.
    ///
    /// The caller is responsible for checking that `pos` is empty.
    pub fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with(pos, Square::Occupied(player)),
            last_move: Some(MoveCoords::from(pos)),
        }
    }

    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the move that produced this snapshot.
    pub fn last_move(&self) -> Option<MoveCoords> {
        self.last_move
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::start()
    }
}
