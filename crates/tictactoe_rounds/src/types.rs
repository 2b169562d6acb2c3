//! Core domain types for the round-based tic-tac-toe engine.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PlayerId {
    /// First seat, marks with `x`.
    #[strum(to_string = "Player One")]
    PlayerOne,
    /// Second seat, marks with `o`.
    #[strum(to_string = "Player Two")]
    PlayerTwo,
}

impl PlayerId {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::PlayerOne => PlayerId::PlayerTwo,
            PlayerId::PlayerTwo => PlayerId::PlayerOne,
        }
    }

    /// Marker placed on the board by this player.
    pub fn marker(self) -> char {
        match self {
            PlayerId::PlayerOne => 'x',
            PlayerId::PlayerTwo => 'o',
        }
    }

    /// Slot of this player in per-player arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::PlayerOne => 0,
            PlayerId::PlayerTwo => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell taken by a player.
    Occupied(PlayerId),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells held by `player`.
    pub fn count_for(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show as `.`; occupied cells show the occupant's marker.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.marker(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
