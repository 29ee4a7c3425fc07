//! Tic-tac-toe with a navigable move history.
//!
//! The crate keeps every board snapshot of a game, lets a caller jump back
//! to any of them (with the move list shown oldest or newest first), and
//! branches a new line of play when a move is made from an earlier point.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a single board (win line, draw)
//! - **Engine**: [`Game`], the snapshot history, pointer and order flag
//! - **Actions**: [`Action`] values dispatched to [`Game::dispatch`]
//! - **View**: [`GameView`], recomputed on demand for presentation layers
//! - **Invariants**: properties of the history checked after each move
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Action, Game, Status};
//!
//! let mut game = Game::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.dispatch(Action::Move { cell }).unwrap();
//! }
//! assert_eq!(game.view().status().to_string(), "Winner: X");
//!
//! game.dispatch(Action::Jump { index: 2 }).unwrap();
//! assert_eq!(*game.view().status(), Status::NextPlayer(timeline_tictactoe::Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use action::{Action, EngineError, MoveResult, Rejection, Transition};
pub use engine::Game;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use position::{MoveCoords, Position};
pub use rules::{Outcome, WinningLine, evaluate};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, Status};
