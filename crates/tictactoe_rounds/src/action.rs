//! Move rejection reasons.
//!
//! A rejected move leaves the engine untouched, so every variant is
//! recoverable: the caller fixes the input and tries again.

use super::position::Position;

/// Why a move was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The current round has concluded and no new round was started.
    #[display("Round is over; start a new round first")]
    RoundNotInProgress,

    /// The final round has concluded.
    #[display("Game is over")]
    GameOver,

    /// Row or column outside 0..=2.
    #[display("Coordinates ({}, {}) are off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The cell is already taken.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A post-move invariant check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(&'static str),
}

impl std::error::Error for MoveRejection {}
