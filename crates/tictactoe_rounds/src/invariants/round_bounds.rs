//! Round counter and score invariants.

use super::super::{GameEngine, GameStatus, PlayerId, MAX_ROUNDS};
use super::Invariant;

/// Invariant: the round number stays in `1..=MAX_ROUNDS`, and the game only
/// ends on the last round.
pub struct RoundInRangeInvariant;

impl Invariant<GameEngine> for RoundInRangeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let round = engine.current_round();
        (1..=MAX_ROUNDS).contains(&round) && (!engine.is_game_over() || round == MAX_ROUNDS)
    }

    fn description() -> &'static str {
        "Round number is within bounds and the game ends on the last round"
    }
}

/// Invariant: round wins never exceed the number of concluded rounds.
///
/// Tied rounds count toward neither player, so the sum can be lower.
pub struct ScoreBoundedInvariant;

impl Invariant<GameEngine> for ScoreBoundedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let concluded = match engine.status() {
            GameStatus::InProgress => engine.current_round() - 1,
            GameStatus::RoundOver(_) | GameStatus::GameOver { .. } => engine.current_round(),
        };
        engine.round_wins(PlayerId::PlayerOne) + engine.round_wins(PlayerId::PlayerTwo) <= concluded
    }

    fn description() -> &'static str {
        "Round wins do not exceed concluded rounds"
    }
}
