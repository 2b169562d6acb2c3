//! First-class invariants for the round engine.
//!
//! Invariants are logical properties that must hold between any two calls on
//! a [`GameEngine`](super::GameEngine). The move contract checks them after
//! every accepted move in debug builds; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: &'static str) -> Self {
        Self { description }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod move_count;
pub mod round_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use move_count::MoveCountInvariant;
pub use round_bounds::{RoundInRangeInvariant, ScoreBoundedInvariant};

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MoveCountInvariant,
    AlternatingTurnInvariant,
    RoundInRangeInvariant,
    ScoreBoundedInvariant,
);
