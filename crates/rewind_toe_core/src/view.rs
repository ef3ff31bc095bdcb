//! Presentation boundary.
//!
//! Views never touch [`GameState`] directly. They receive an immutable
//! [`RenderSnapshot`] and report user input back as [`ViewEvent`]s, which the
//! [`Controller`] applies one at a time.

use crate::action::MoveOutcome;
use crate::rules::winning_line;
use crate::{Board, GameState, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Button text.
    pub label: String,
    /// Step the entry jumps to.
    pub step: usize,
}

impl MoveListEntry {
    /// Builds the entry for `step`.
    pub fn for_step(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { label, step }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Board at the viewed step.
    pub board: Board,
    /// "Winner: X" or "Next player: O".
    pub status: String,
    /// One entry per recorded step, oldest first.
    pub moves: Vec<MoveListEntry>,
    /// Step currently shown.
    pub current_step: usize,
    /// Line completing the win on the shown board, if any.
    pub winning_line: Option<[Position; 3]>,
}

impl RenderSnapshot {
    /// Projects a game state into a snapshot.
    #[instrument(skip(game), fields(step = game.current_step()))]
    pub fn from_state(game: &GameState) -> Self {
        let board = *game.current_board();
        Self {
            board,
            status: game.status().to_string(),
            moves: (0..game.history().len())
                .map(MoveListEntry::for_step)
                .collect(),
            current_step: game.current_step(),
            winning_line: winning_line(&board),
        }
    }
}

/// User input reported by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewEvent {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A move-list entry was clicked.
    HistoryJump(usize),
}

/// Something that can draw a [`RenderSnapshot`].
pub trait GameView {
    /// Failure raised while drawing.
    type Error;

    /// Draws the snapshot.
    fn render(&mut self, snapshot: &RenderSnapshot) -> Result<(), Self::Error>;
}

/// Owns the single game state and routes view events into it.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    game: GameState,
}

impl Controller {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Applies one event.
    ///
    /// Returns the move outcome for cell clicks and `None` for jumps.
    ///
    /// # Panics
    ///
    /// Panics on a `HistoryJump` to a step that was never recorded.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: ViewEvent) -> Option<MoveOutcome> {
        debug!("Dispatching view event");
        match event {
            ViewEvent::CellClicked(pos) => Some(self.game.apply_move(pos)),
            ViewEvent::HistoryJump(step) => {
                self.game.jump_to(step);
                None
            }
        }
    }

    /// Builds the snapshot for the current state.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from_state(&self.game)
    }

    /// Hands the current snapshot to `view`.
    pub fn render_to<V: GameView + ?Sized>(&self, view: &mut V) -> Result<(), V::Error> {
        view.render(&self.snapshot())
    }
}
