//! Round rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls
//! [`evaluate_round`] after every accepted move; the lower-level checks are
//! exported for presenters and tests.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, evaluate_round};
