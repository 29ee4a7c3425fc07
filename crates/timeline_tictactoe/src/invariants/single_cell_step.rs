//! Single-cell step invariant: each snapshot adds exactly one mark.

use super::super::{Game, MoveCoords, Position, Square};
use super::Invariant;

/// Invariant: adjacent snapshots differ in exactly one, previously empty, cell.
///
/// The opening snapshot is the empty board with no recorded move, and every
/// later snapshot records the coordinates of the cell it filled.
pub struct SingleCellStepInvariant;

impl Invariant<Game> for SingleCellStepInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied() != 0 || first.last_move().is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| before.get(pos) != after.get(pos))
                .collect();
            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && pair[1].last_move() == Some(MoveCoords::from(*pos))
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square and records its coordinates"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Snapshot};

    #[test]
    fn test_new_game_holds() {
        assert!(SingleCellStepInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let game = Game::replay(&[0, 4, 8, 2, 6]).unwrap();
        assert!(SingleCellStepInvariant::holds(&game));
    }

    #[test]
    fn test_two_cells_in_one_step_violates() {
        let mut game = Game::new();
        let skipped = Snapshot::start()
            .advance(Position::TopLeft, Player::X)
            .advance(Position::Center, Player::O);
        game.history.push(skipped);
        assert!(!SingleCellStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::replay(&[0]).unwrap();
        // O replaces X at the top-left: one cell changed, but it was not empty.
        game.history.push(Snapshot::start().advance(Position::TopLeft, Player::O));
        assert!(!SingleCellStepInvariant::holds(&game));
    }
}
