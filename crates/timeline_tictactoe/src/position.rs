//! Board positions and the coordinates recorded for each move.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (cell index 0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in cell-index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a zero-based visual row and column.
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based visual row (top row is 0).
    pub fn grid_row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based visual column (left column is 0).
    pub fn grid_col(self) -> usize {
        self.to_index() % 3
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The 1-based `(row, col)` pair recorded alongside a move.
///
/// The mapping walks columns in the outer loop and rows in the inner one:
/// `col = index / 3 + 1`, `row = index % 3 + 1`. This is transposed with
/// respect to [`Position::grid_row`]/[`Position::grid_col`]; move labels
/// keep it so that cell 1 reads "row: 2 col: 1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCoords {
    /// Row label, 1..=3.
    pub row: u8,
    /// Column label, 1..=3.
    pub col: u8,
}

impl From<Position> for MoveCoords {
    fn from(pos: Position) -> Self {
        let index = pos.to_index() as u8;
        Self {
            col: index / 3 + 1,
            row: index % 3 + 1,
        }
    }
}

impl std::fmt::Display for MoveCoords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row: {} col: {}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_covers_board() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_grid_accessors() {
        assert_eq!(Position::MiddleRight.grid_row(), 1);
        assert_eq!(Position::MiddleRight.grid_col(), 2);
        assert_eq!(Position::from_grid(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_grid(3, 0), None);
    }

    #[test]
    fn test_move_coords_are_column_major() {
        assert_eq!(MoveCoords::from(Position::TopLeft), MoveCoords { row: 1, col: 1 });
        assert_eq!(MoveCoords::from(Position::TopCenter), MoveCoords { row: 2, col: 1 });
        assert_eq!(MoveCoords::from(Position::MiddleLeft), MoveCoords { row: 1, col: 2 });
        assert_eq!(MoveCoords::from(Position::BottomRight), MoveCoords { row: 3, col: 3 });
    }

    #[test]
    fn test_move_coords_display() {
        assert_eq!(MoveCoords::from(Position::BottomLeft).to_string(), "row: 1 col: 3");
    }
}
