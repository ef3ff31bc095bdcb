//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and the engine checks them in debug builds.

pub mod alternating_marks;
pub mod initial_board_empty;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use initial_board_empty::InitialBoardEmptyInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
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

/// Every invariant a [`GameState`](crate::GameState) maintains.
pub type GameInvariants = (
    InitialBoardEmptyInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
    StepInBoundsInvariant,
);
