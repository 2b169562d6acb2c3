//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} move {Q}`. Preconditions
//! run on every move; postconditions run in debug builds only.

use super::action::MoveRejection;
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::GameStatus;
use super::position::Position;
use super::types::Cell;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a passed precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round accepts moves.
pub struct RoundIsLive;

impl RoundIsLive {
    /// Fails with [`MoveRejection::GameOver`] or [`MoveRejection::RoundNotInProgress`].
    pub fn check(engine: &GameEngine) -> Result<(), MoveRejection> {
        match engine.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::RoundOver(_) => Err(MoveRejection::RoundNotInProgress),
            GameStatus::GameOver { .. } => Err(MoveRejection::GameOver),
        }
    }
}

/// Precondition: row and column are on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Returns the position for in-range coordinates.
    pub fn check(row: usize, column: usize) -> Result<Position, MoveRejection> {
        Position::from_coords(row, column).ok_or(MoveRejection::OutOfBounds { row, column })
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveRejection::CellOccupied`].
    pub fn check(engine: &GameEngine, position: Position) -> Result<(), MoveRejection> {
        if engine.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveRejection::CellOccupied(position))
        }
    }
}

/// Composite precondition, checked in order: live round, bounds, empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine, row: usize, column: usize) -> Result<Position, MoveRejection> {
        RoundIsLive::check(engine)?;
        let position = WithinBounds::check(row, column)?;
        CellIsEmpty::check(engine, position)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `submit_move`.
///
/// Postconditions:
/// - exactly one cell changed, from empty to the previous active player
/// - the active player flipped
/// - every engine invariant holds
pub struct MoveContract;

impl Contract<GameEngine, (usize, usize)> for MoveContract {
    type Checked = Position;

    fn pre(engine: &GameEngine, &(row, column): &(usize, usize)) -> Result<Position, MoveRejection> {
        LegalMove::check(engine, row, column)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveRejection> {
        let mover = before.active_player();
        let changed: Vec<(Cell, Cell)> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .map(|(b, a)| (*b, *a))
            .collect();
        if changed.as_slice() != [(Cell::Empty, Cell::Occupied(mover))] {
            return Err(MoveRejection::InvariantViolation(
                "A move marks exactly one empty cell for the mover",
            ));
        }

        if after.active_player() != mover.opponent() {
            return Err(MoveRejection::InvariantViolation("Active player flips after a move"));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            MoveRejection::InvariantViolation(violations[0].description)
        })
    }
}

impl MoveContract {
    /// Runs the postcondition and panics on failure.
    #[cfg(debug_assertions)]
    pub(crate) fn assert_post(before: &GameEngine, after: &GameEngine) {
        use super::types::PlayerId;

        if let Err(violation) = Self::post(before, after) {
            tracing::error!(
                %violation,
                player_one_cells = after.board().count_for(PlayerId::PlayerOne),
                player_two_cells = after.board().count_for(PlayerId::PlayerTwo),
                "Move postcondition failed"
            );
            panic!("Move postcondition failed: {violation}");
        }
    }
}
