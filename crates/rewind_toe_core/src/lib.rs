//! Tic-tac-toe with move history and time-travel.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order
//! - **GameState**: board snapshots plus the step being viewed; the player to
//!   move is derived from the step's parity
//! - **Rules**: pure win detection over a board
//! - **View boundary**: immutable render snapshots out, click events in
//!
//! # Example
//!
//! ```
//! use rewind_toe_core::{Controller, Position, ViewEvent};
//!
//! let mut controller = Controller::new();
//! controller.dispatch(ViewEvent::CellClicked(Position::Center));
//! controller.dispatch(ViewEvent::HistoryJump(0));
//! assert_eq!(controller.snapshot().status, "Next player: X");
//! assert_eq!(controller.snapshot().moves.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use action::{MoveOutcome, Rejection};
pub use game::GameState;
pub use history::History;
pub use position::Position;
pub use rules::{WINNING_LINES, detect_winner, winning_line};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{Controller, GameView, MoveListEntry, RenderSnapshot, ViewEvent};
