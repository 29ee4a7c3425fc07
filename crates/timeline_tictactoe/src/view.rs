//! Read-only view model consumed by presentation layers.
//!
//! Everything here is recomputed from the engine on each call to
//! [`Game::view`](crate::Game::view); nothing is cached.

use super::engine::Game;
use super::position::MoveCoords;
use super::rules::{self, Outcome};
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player holds a complete line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Empty squares remain and nobody has won.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Position of this entry in the list as displayed.
    displayed_index: usize,
    /// Chronological history index; also the move number.
    step: usize,
    /// Coordinates of the move, `None` for the start of the game.
    coords: Option<MoveCoords>,
    /// True for the entry the pointer refers to.
    is_current: bool,
    /// Button text for this entry.
    label: String,
}

impl MoveEntry {
    fn new(
        displayed_index: usize,
        step: usize,
        coords: Option<MoveCoords>,
        is_current: bool,
    ) -> Self {
        let label = match coords {
            Some(coords) if step > 0 => format!("Go to move #{} at {}", step, coords),
            _ => "Go to start of game".to_string(),
        };
        Self {
            displayed_index,
            step,
            coords,
            is_current,
            label,
        }
    }
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board of the current snapshot.
    board: Board,
    /// Outcome of the current snapshot.
    outcome: Outcome,
    /// Status line.
    status: Status,
    /// Whose mark the next move places.
    to_move: Player,
    /// Cells to highlight; the winning line or nothing.
    highlighted: Vec<usize>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Whether the move list is newest first.
    reversed: bool,
    /// Text for the order toggle: the order it switches to.
    order_label: String,
}

fn order_label(reversed: bool) -> &'static str {
    if reversed { "Ascending" } else { "Descending" }
}

impl GameView {
    pub(crate) fn build(game: &Game) -> Self {
        let snapshot = game.current();
        let board = *snapshot.board();
        let outcome = rules::evaluate(&board);
        let to_move = game.to_move();

        let status = match outcome {
            Outcome::Win { winner, .. } => Status::Winner(winner),
            _ if board.occupied() < 9 => Status::NextPlayer(to_move),
            _ => Status::Draw,
        };

        let len = game.history().len();
        let moves = (0..len)
            .map(|displayed_index| {
                let step = game.history_index(displayed_index);
                MoveEntry::new(
                    displayed_index,
                    step,
                    game.history()[step].last_move(),
                    step == game.step(),
                )
            })
            .collect();

        Self {
            board,
            outcome,
            status,
            to_move,
            highlighted: outcome.line().map(Vec::from).unwrap_or_default(),
            moves,
            reversed: game.is_reversed(),
            order_label: order_label(game.is_reversed()).to_string(),
        }
    }

    /// The move-list entry the pointer refers to.
    pub fn current_entry(&self) -> Option<&MoveEntry> {
        self.moves.iter().find(|entry| entry.is_current)
    }

    /// Returns true if `cell` belongs to the winning line.
    pub fn is_highlighted(&self, cell: usize) -> bool {
        self.highlighted.contains(&cell)
    }
}
