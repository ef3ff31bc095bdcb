//! Step bounds invariant: the viewed step is a recorded snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::invariants::{GameInvariants, InvariantSet};

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_dangling_step_reported_by_set() {
        let game = GameState::from_parts(History::new(), 3);
        assert!(!StepInBoundsInvariant::holds(&game));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            StepInBoundsInvariant::description()
        );
    }
}
