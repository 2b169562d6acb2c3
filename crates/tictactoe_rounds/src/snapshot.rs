//! Serializable view of an engine for presenters.

use super::engine::{GameEngine, MAX_ROUNDS, MoveCounts};
use super::outcome::{GameStatus, RoundResult};
use super::player::Player;
use super::types::{Board, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presenter needs to redraw, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The board.
    board: Board,
    /// Lifecycle status.
    status: GameStatus,
    /// Current round, 1-indexed.
    current_round: u32,
    /// Rounds in a game.
    max_rounds: u32,
    /// Player to move.
    active_player: PlayerId,
    /// Move counters for the current round.
    move_counts: MoveCounts,
    /// Both player records, Player One first.
    players: [Player; 2],
}

impl From<&GameEngine> for EngineSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            status: engine.status(),
            current_round: engine.current_round(),
            max_rounds: MAX_ROUNDS,
            active_player: engine.active_player(),
            move_counts: engine.move_counts(),
            players: engine.players().clone(),
        }
    }
}

impl EngineSnapshot {
    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        let round = format!("Round {}/{}", self.current_round, self.max_rounds);
        match self.status {
            GameStatus::InProgress => format!(
                "{}. {} ({}) to move.",
                round,
                self.active_player,
                self.active_player.marker()
            ),
            GameStatus::RoundOver(RoundResult::Win(winner)) => {
                format!("{} over. {} wins the round!", round, winner)
            }
            GameStatus::RoundOver(RoundResult::Tie) => format!("{} over. Tie!", round),
            GameStatus::GameOver { winner, .. } => {
                format!("Game over. {} wins the game!", winner)
            }
        }
    }

    /// Returns the score line, e.g. `Player One (x) 1 - 0 Player Two (o)`.
    pub fn score_string(&self) -> String {
        let [one, two] = &self.players;
        format!(
            "{} ({}) {} - {} {} ({})",
            one.id(),
            one.marker(),
            one.round_wins(),
            two.round_wins(),
            two.id(),
            two.marker()
        )
    }
}
