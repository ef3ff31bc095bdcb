//! Single cell delta invariant: each move fills exactly one empty square.

use super::Invariant;
use crate::GameState;

/// Invariant: consecutive snapshots differ in exactly one square, which went
/// from empty to a mark.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().boards().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.diff(after).as_slice() {
                [pos] => before.is_empty(*pos) && !after.is_empty(*pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous board"
    }
}
