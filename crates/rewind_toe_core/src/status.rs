//! Derived game status.

use crate::Player;
use serde::{Deserialize, Serialize};

/// What the viewed board means for the players.
///
/// Always computed from the current snapshot, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet; `next` moves.
    #[display("Next player: {}", next)]
    InProgress {
        /// The player to move.
        next: Player,
    },
    /// A player holds a full line.
    #[display("Winner: {}", _0)]
    Won(Player),
}
