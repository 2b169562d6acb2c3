//! Per-player records kept across rounds.

use super::types::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A seat with its counters.
///
/// `move_count` covers the current round only; `round_wins` persists until
/// the game is restarted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat identity.
    id: PlayerId,
    /// Moves made in the current round.
    move_count: u32,
    /// Rounds won in the current game.
    round_wins: u32,
}

impl Player {
    /// Creates a player with zeroed counters.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            move_count: 0,
            round_wins: 0,
        }
    }

    /// Marker placed on the board by this player.
    pub fn marker(&self) -> char {
        self.id.marker()
    }

    pub(crate) fn record_move(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn record_round_win(&mut self) {
        self.round_wins += 1;
    }

    /// Clears the per-round counter.
    pub(crate) fn reset_round(&mut self) {
        self.move_count = 0;
    }

    /// Clears every counter.
    pub(crate) fn reset(&mut self) {
        self.move_count = 0;
        self.round_wins = 0;
    }
}
