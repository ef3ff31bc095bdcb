//! Game state with time-travel.

use crate::action::{MoveOutcome, Rejection};
use crate::history::History;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::detect_winner;
use crate::status::GameStatus;
use crate::{Board, Player, Position};
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game state: snapshot history plus the step being viewed.
///
/// The player to move is never stored. It follows from the parity of
/// `current_step`, so jumping around history cannot desynchronise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    current_step: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }

    /// Returns the recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Returns the player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner of the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        detect_winner(self.current_board())
    }

    /// Derives the status of the viewed board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Clicks on a decided board or an occupied square are ignored and leave
    /// the state untouched. A successful move discards every snapshot after
    /// the current step before recording the new board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current_board();

        if detect_winner(&current).is_some() {
            debug!("Ignoring click on decided board");
            return MoveOutcome::Ignored(Rejection::GameDecided);
        }

        if !current.is_empty(pos) {
            debug!("Ignoring click on occupied square");
            return MoveOutcome::Ignored(Rejection::SquareOccupied(pos));
        }

        let player = self.next_player();
        let discarded = self
            .history
            .branch_from(self.current_step, current.with_mark(pos, player));
        self.current_step += 1;

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after move: {:?}",
            GameInvariants::check_all(self)
        );

        info!(%player, position = %pos, step = self.current_step, discarded, "Move placed");
        MoveOutcome::Placed {
            player,
            position: pos,
            step: self.current_step,
        }
    }

    /// Moves the view to `step` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a recorded step. Views only offer steps taken
    /// from the move list, so this indicates a bug in the caller.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump to step {} out of range (history has {} entries)",
            step,
            self.history.len()
        );
        self.current_step = step;
        info!(step, "Jumped");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for GameState {
    /// Decodes a state and rejects it unless every game invariant holds.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Record {
            history: History,
            current_step: usize,
        }

        let Record {
            history,
            current_step,
        } = Record::deserialize(deserializer)?;
        let game = Self {
            history,
            current_step,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            <D::Error as de::Error>::custom(reasons.join("; "))
        })?;
        Ok(game)
    }
}
