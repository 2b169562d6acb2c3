//! The multi-round game engine.
//!
//! [`GameEngine`] owns the board, both player records, the round counter and
//! turn order. Presenters drive it through [`GameEngine::submit_move`],
//! [`GameEngine::new_round`] and [`GameEngine::restart_game`], and poll the
//! query methods afterwards. Nothing here calls back into the presenter.

use super::action::MoveRejection;
use super::contracts::{Contract, MoveContract};
use super::outcome::{GameStatus, MoveOutcome, RoundResult, RoundStatus};
use super::player::Player;
use super::policy::OpeningPolicy;
use super::position::Position;
use super::rules;
use super::snapshot::EngineSnapshot;
use super::types::{Board, Cell, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of rounds in a game.
pub const MAX_ROUNDS: u32 = 3;

/// Move counters for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    /// Moves by both players.
    pub total: u32,
    /// Moves by Player One.
    pub player_one: u32,
    /// Moves by Player Two.
    pub player_two: u32,
}

/// Round-based tic-tac-toe engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    active: PlayerId,
    move_count: u32,
    current_round: u32,
    status: GameStatus,
    opening: OpeningPolicy,
}

impl GameEngine {
    /// Creates a game at round 1 with Player One to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opening(OpeningPolicy::default())
    }

    /// Creates a game using the given opening policy.
    #[instrument]
    pub fn with_opening(opening: OpeningPolicy) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(PlayerId::PlayerOne), Player::new(PlayerId::PlayerTwo)],
            active: opening.opener(1),
            move_count: 0,
            current_round: 1,
            status: GameStatus::InProgress,
            opening,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while the current round accepts moves.
    pub fn is_ongoing(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// True once the final round has concluded.
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    /// Current round, 1-indexed.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Opening policy in effect.
    pub fn opening(&self) -> OpeningPolicy {
        self.opening
    }

    /// Moves made in the current round.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Total and per-player move counts for the current round.
    pub fn move_counts(&self) -> MoveCounts {
        MoveCounts {
            total: self.move_count,
            player_one: *self.player(PlayerId::PlayerOne).move_count(),
            player_two: *self.player(PlayerId::PlayerTwo).move_count(),
        }
    }

    /// Both player records, Player One first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Record for one player.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Rounds won so far by `id`.
    pub fn round_wins(&self, id: PlayerId) -> u32 {
        *self.player(id).round_wins()
    }

    /// Result of the most recently concluded round, while it is still on the board.
    pub fn last_round_result(&self) -> Option<RoundResult> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::RoundOver(result) => Some(result),
            GameStatus::GameOver { last_round, .. } => Some(last_round),
        }
    }

    /// Overall winner, once the game is over.
    pub fn game_winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::GameOver { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Empty cells, or nothing when the round is not accepting moves.
    pub fn valid_moves(&self) -> Vec<Position> {
        if !self.is_ongoing() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Serializable view of the whole engine.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Marks `(row, column)` for the active player.
    ///
    /// Preconditions are checked in order: the round accepts moves, the
    /// coordinates are on the board, the cell is empty. A rejection leaves
    /// every piece of state untouched.
    ///
    /// The active player flips only after the board has been evaluated, so a
    /// completed line is credited to the player who made it.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition as a [`MoveRejection`].
    #[instrument(skip(self), fields(round = self.current_round, player = %self.active))]
    pub fn submit_move(&mut self, row: usize, column: usize) -> Result<MoveOutcome, MoveRejection> {
        let position = match MoveContract::pre(self, &(row, column)) {
            Ok(position) => position,
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                return Err(rejection);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.active;
        self.board.set(position, Cell::Occupied(mover));
        self.move_count += 1;
        self.players[mover.index()].record_move();

        let status = rules::evaluate_round(&self.board, self.move_count);
        self.active = mover.opponent();

        let outcome = match status {
            RoundStatus::Continue => {
                debug!(%position, move_count = self.move_count, "Move accepted");
                MoveOutcome::new(mover, position, None, None)
            }
            RoundStatus::Ended(result) => self.conclude_round(mover, position, result),
        };

        #[cfg(debug_assertions)]
        MoveContract::assert_post(&before, self);

        Ok(outcome)
    }

    /// Starts the next round.
    ///
    /// Does nothing and returns `false` when the current round is already the
    /// last one; check [`GameEngine::is_game_over`] before calling.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn new_round(&mut self) -> bool {
        if self.current_round >= MAX_ROUNDS {
            debug!("Round cap reached, ignoring new round");
            return false;
        }

        self.current_round += 1;
        self.reset_round();
        info!(round = self.current_round, opener = %self.active, "New round started");
        true
    }

    /// Zeroes scores and starts over from round 1.
    #[instrument(skip(self), fields(round = self.current_round))]
    pub fn restart_game(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.current_round = 1;
        self.reset_round();
        info!("Game restarted");
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn reset_round(&mut self) {
        self.board = Board::new();
        self.move_count = 0;
        for player in &mut self.players {
            player.reset_round();
        }
        self.active = self.opening.opener(self.current_round);
        self.status = GameStatus::InProgress;
    }

    fn conclude_round(&mut self, mover: PlayerId, position: Position, result: RoundResult) -> MoveOutcome {
        if let RoundResult::Win(winner) = result {
            self.players[winner.index()].record_round_win();
        }
        info!(
            round = self.current_round,
            %result,
            player_one_wins = self.round_wins(PlayerId::PlayerOne),
            player_two_wins = self.round_wins(PlayerId::PlayerTwo),
            "Round concluded"
        );

        if self.current_round < MAX_ROUNDS {
            self.status = GameStatus::RoundOver(result);
            return MoveOutcome::new(mover, position, Some(result), None);
        }

        let winner = decide_game_winner(
            self.round_wins(PlayerId::PlayerOne),
            self.round_wins(PlayerId::PlayerTwo),
        );
        self.status = GameStatus::GameOver {
            last_round: result,
            winner,
        };
        info!(%winner, "Game over");
        MoveOutcome::new(mover, position, Some(result), Some(winner))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Player One needs strictly more round wins; equal scores go to Player Two.
fn decide_game_winner(player_one_wins: u32, player_two_wins: u32) -> PlayerId {
    if player_one_wins > player_two_wins {
        PlayerId::PlayerOne
    } else {
        PlayerId::PlayerTwo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> MoveOutcome {
        let mut last = None;
        for &(row, column) in moves {
            last = Some(engine.submit_move(row, column).expect("legal move"));
        }
        last.expect("at least one move")
    }

    #[test]
    fn test_new_engine_defaults() {
        let engine = GameEngine::new();
        assert!(engine.is_ongoing());
        assert!(!engine.is_game_over());
        assert_eq!(engine.current_round(), 1);
        assert_eq!(engine.active_player(), PlayerId::PlayerOne);
        assert_eq!(engine.move_counts(), MoveCounts { total: 0, player_one: 0, player_two: 0 });
        assert_eq!(engine.valid_moves().len(), 9);
        assert_eq!(engine.last_round_result(), None);
    }

    #[test]
    fn test_decide_game_winner_tie_break() {
        assert_eq!(decide_game_winner(2, 1), PlayerId::PlayerOne);
        assert_eq!(decide_game_winner(1, 2), PlayerId::PlayerTwo);
        assert_eq!(decide_game_winner(1, 1), PlayerId::PlayerTwo);
        assert_eq!(decide_game_winner(0, 0), PlayerId::PlayerTwo);
    }

    #[test]
    fn test_per_player_move_counts() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(engine.move_counts(), MoveCounts { total: 3, player_one: 2, player_two: 1 });
    }

    #[test]
    fn test_round_over_blocks_moves_until_new_round() {
        let mut engine = GameEngine::new();
        let outcome = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(outcome.round_winner(), Some(PlayerId::PlayerOne));
        assert!(!outcome.game_ended());
        assert!(!engine.is_ongoing());
        assert!(engine.valid_moves().is_empty());
        assert_eq!(engine.submit_move(2, 2), Err(MoveRejection::RoundNotInProgress));

        assert!(engine.new_round());
        assert_eq!(engine.current_round(), 2);
        assert!(engine.submit_move(2, 2).is_ok());
    }

    #[test]
    fn test_alternate_opening_policy() {
        let mut engine = GameEngine::with_opening(OpeningPolicy::AlternateByRound);
        assert_eq!(engine.active_player(), PlayerId::PlayerOne);
        engine.new_round();
        assert_eq!(engine.active_player(), PlayerId::PlayerTwo);
        let outcome = engine.submit_move(1, 1).expect("legal move");
        assert_eq!(*outcome.mover(), PlayerId::PlayerTwo);
        assert_eq!(engine.move_counts().player_two, 1);
        engine.restart_game();
        assert_eq!(engine.active_player(), PlayerId::PlayerOne);
    }
}
