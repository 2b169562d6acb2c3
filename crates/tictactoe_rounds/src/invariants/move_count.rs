//! Move counter invariant: counters agree with the board.

use super::super::{GameEngine, PlayerId};
use super::Invariant;

/// Invariant: the round's move counter equals the number of occupied cells,
/// and each player's counter equals the cells that player holds.
pub struct MoveCountInvariant;

impl Invariant<GameEngine> for MoveCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let counts = engine.move_counts();

        counts.total as usize == board.occupied_count()
            && counts.total <= 9
            && counts.player_one as usize == board.count_for(PlayerId::PlayerOne)
            && counts.player_two as usize == board.count_for(PlayerId::PlayerTwo)
    }

    fn description() -> &'static str {
        "Move counters match the occupied cells"
    }
}
