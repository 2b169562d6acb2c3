//! Board coordinates.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position on the board, row-major, zero-indexed.
///
/// A `Position` can only be built from in-range coordinates, so holding one
/// means the bounds check already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Row 0, column 0
    TopLeft,
    /// Row 0, column 1
    TopCenter,
    /// Row 0, column 2
    TopRight,
    /// Row 1, column 0
    MiddleLeft,
    /// Row 1, column 1
    Center,
    /// Row 1, column 2
    MiddleRight,
    /// Row 2, column 0
    BottomLeft,
    /// Row 2, column 1
    BottomCenter,
    /// Row 2, column 2
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
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

    /// Builds a position from `(row, column)`; `None` unless both are in 0..=2.
    #[instrument]
    pub fn from_coords(row: usize, column: usize) -> Option<Self> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Label for display.
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

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coords(pos.row(), pos.column()), Some(pos));
        }
    }

    #[test]
    fn test_out_of_range_coords() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_coords(usize::MAX, 1), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_display_includes_coords() {
        assert_eq!(Position::BottomLeft.to_string(), "Bottom-left (2, 0)");
    }
}
