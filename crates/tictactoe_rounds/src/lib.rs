//! Multi-round tic-tac-toe engine.
//!
//! A [`GameEngine`] runs a game of [`MAX_ROUNDS`] rounds between two players,
//! validating moves, detecting wins and ties, and tallying round wins. After
//! the final round the player with more round wins takes the game; equal
//! scores go to Player Two.
//!
//! The engine has no I/O. A presenter submits coordinates, reads the returned
//! [`MoveOutcome`] or [`MoveRejection`], and polls queries to redraw.
//!
//! # Example
//!
//! ```
//! use tictactoe_rounds::{GameEngine, MoveRejection, PlayerId};
//!
//! let mut engine = GameEngine::new();
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     engine.submit_move(row, column)?;
//! }
//! let outcome = engine.submit_move(0, 2)?;
//! assert_eq!(outcome.round_winner(), Some(PlayerId::PlayerOne));
//!
//! assert_eq!(engine.submit_move(2, 2), Err(MoveRejection::RoundNotInProgress));
//! assert!(engine.new_round());
//! # Ok::<(), MoveRejection>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod outcome;
mod player;
mod policy;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::MoveRejection;
pub use engine::{GameEngine, MAX_ROUNDS, MoveCounts};
pub use outcome::{GameStatus, MoveOutcome, RoundResult, RoundStatus};
pub use player::Player;
pub use policy::OpeningPolicy;
pub use position::Position;
pub use snapshot::EngineSnapshot;
pub use types::{Board, Cell, PlayerId};
