//! Pointer bounds invariant.

use super::super::Game;
use super::Invariant;

/// Invariant: the pointer always refers to an existing snapshot.
pub struct StepInBoundsInvariant;

impl Invariant<Game> for StepInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Pointer refers to an existing snapshot"
    }
}
