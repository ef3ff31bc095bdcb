//! Rewind Toe - tic-tac-toe with move history and time-travel.
//!
//! The game logic lives in [`rewind_toe_core`]; this crate adds the views
//! that drive it.
//!
//! # Architecture
//!
//! - **Terminal view**: interactive ratatui front-end with keyboard and mouse
//! - **Replay view**: applies a scripted event list and prints the snapshot
//!   as text or JSON
//! - **Config**: TOML settings for logging and display
//!
//! # Example
//!
//! ```
//! use rewind_toe::replay::format_snapshot;
//! use rewind_toe::script::{parse_script, run_script};
//!
//! let events = parse_script(&["0", "4", "1", "3", "2"]).unwrap();
//! let controller = run_script(&events).unwrap();
//! assert!(format_snapshot(&controller.snapshot()).contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod script;
pub mod tui;

pub use config::{ConfigError, Settings};
pub use script::ScriptError;
