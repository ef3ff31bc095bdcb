//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! history bookkeeping so both the engine and the invariant checks can use them.

pub mod win;

pub use win::{WINNING_LINES, detect_winner, winning_line};
