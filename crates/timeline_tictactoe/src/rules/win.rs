//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding all three cells.
    pub winner: Player,
    /// Cell indices of the line.
    pub line: [usize; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    let squares = board.squares();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match squares[a] {
            Square::Occupied(winner) if squares[a] == squares[b] && squares[a] == squares[c] => {
                Some(WinningLine { winner, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(
            check_winner(&board),
            Some(WinningLine {
                winner: Player::X,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::O))
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board).map(|w| w.line), Some([0, 4, 8]));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Row 0 and column 0 both complete; the row comes first.
        let x = Square::Occupied(Player::X);
        let e = Square::Empty;
        let board = Board::from_squares([x, x, x, x, e, e, x, e, e]);
        assert_eq!(check_winner(&board).map(|w| w.line), Some([0, 1, 2]));
    }
}
