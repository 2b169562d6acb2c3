//! Alternating turn invariant: the opener and the other player take turns.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: players alternate within a round.
///
/// The round's opener has made either as many moves as the other player (and
/// is to move) or exactly one more (and the other player is to move).
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let opener = engine.opening().opener(engine.current_round());
        let opener_moves = *engine.player(opener).move_count();
        let other_moves = *engine.player(opener.opponent()).move_count();

        if opener_moves == other_moves {
            engine.active_player() == opener
        } else {
            opener_moves == other_moves + 1 && engine.active_player() == opener.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the round's opener"
    }
}
