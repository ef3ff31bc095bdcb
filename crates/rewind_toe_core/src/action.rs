//! Outcomes of clicking a cell.
//!
//! A click is never an error. It either places a mark or is ignored, and the
//! caller learns which through [`MoveOutcome`].

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// Why a click left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The viewed board already has a winner.
    #[display("Game is already decided")]
    GameDecided,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`GameState::apply_move`](crate::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A mark was placed and recorded as a new history entry.
    Placed {
        /// The player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
        /// The step the game now shows.
        step: usize,
    },
    /// The click was ignored; state is unchanged.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }

    /// Returns the rejection reason for an ignored click.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Placed { .. } => None,
            MoveOutcome::Ignored(reason) => Some(*reason),
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Placed {
                player,
                position,
                step,
            } => write!(f, "{} -> {} (move #{})", player, position.label(), step),
            MoveOutcome::Ignored(reason) => write!(f, "ignored: {}", reason),
        }
    }
}
