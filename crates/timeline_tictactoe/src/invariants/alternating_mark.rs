//! Alternating mark invariant: X, O, X, O, ... along the history.

use super::super::{Game, Player, Position, Square};
use super::Invariant;

/// Invariant: the mark added at history index `k` belongs to `Player::for_step(k - 1)`.
///
/// X always opens, and branching from an earlier step keeps the pattern
/// because the turn is derived from the pointer.
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let expected = Square::Occupied(Player::for_step(k));
                Position::ALL.into_iter().any(|pos| {
                    pair[0].board().get(pos) == Square::Empty
                        && pair[1].board().get(pos) == expected
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
