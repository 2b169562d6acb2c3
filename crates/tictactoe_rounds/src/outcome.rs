//! Round results, move outcomes and engine status.

use super::position::Position;
use super::types::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How a round concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// A player completed a line.
    Win(PlayerId),
    /// The board filled with no line.
    Tie,
}

impl RoundResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RoundResult::Win(player) => Some(*player),
            RoundResult::Tie => None,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Win(player) => write!(f, "{} wins the round", player),
            RoundResult::Tie => write!(f, "Round tied"),
        }
    }
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No line and free cells remain.
    Continue,
    /// The round is over.
    Ended(RoundResult),
}

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    InProgress,
    /// The round concluded; waiting for `new_round` or `restart_game`.
    RoundOver(RoundResult),
    /// The final round concluded. Terminal until `restart_game`.
    GameOver {
        /// Result of the final round.
        last_round: RoundResult,
        /// Overall winner by round wins.
        winner: PlayerId,
    },
}

/// Report for an accepted move.
///
/// Only accepted moves produce an outcome; rejected moves come back as
/// [`MoveRejection`](super::MoveRejection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who made the move.
    mover: PlayerId,
    /// Cell that was marked.
    position: Position,
    /// Set when this move ended the round.
    round_result: Option<RoundResult>,
    /// Set when this move ended the game.
    game_winner: Option<PlayerId>,
}

impl MoveOutcome {
    pub(crate) fn new(
        mover: PlayerId,
        position: Position,
        round_result: Option<RoundResult>,
        game_winner: Option<PlayerId>,
    ) -> Self {
        Self {
            mover,
            position,
            round_result,
            game_winner,
        }
    }

    /// True when this move concluded the round.
    pub fn round_ended(&self) -> bool {
        self.round_result.is_some()
    }

    /// Winner of the round, if this move won it.
    pub fn round_winner(&self) -> Option<PlayerId> {
        self.round_result.and_then(|r| r.winner())
    }

    /// True when this move concluded the final round.
    pub fn game_ended(&self) -> bool {
        self.game_winner.is_some()
    }
}
