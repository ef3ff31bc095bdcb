//! Scripted event sequences for the headless replay view.
//!
//! A script is a list of tokens: a cell index `0`..`8` clicks that cell, and
//! `@N` jumps to step `N`.

use derive_more::{Display, Error};
use rewind_toe_core::{Controller, Position, ViewEvent};
use tracing::{debug, instrument};

/// Why a script could not be run.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// The token is neither a cell index nor a jump.
    #[display("Unrecognised event '{}': expected a cell 0-8 or @STEP", token)]
    BadToken {
        /// The offending token.
        token: String,
    },

    /// The jump names a step that does not exist at that point.
    #[display("Event #{} jumps to step {} but history has {} entries", index, step, history_len)]
    JumpOutOfRange {
        /// Zero-based position of the event in the script.
        index: usize,
        /// Requested step.
        step: usize,
        /// History length when the jump was reached.
        history_len: usize,
    },
}

/// Parses one script token.
#[instrument]
pub fn parse_event(token: &str) -> Result<ViewEvent, ScriptError> {
    let bad = || ScriptError::BadToken {
        token: token.to_string(),
    };
    let token = token.trim();

    if let Some(step) = token.strip_prefix('@') {
        return step
            .parse::<usize>()
            .map(ViewEvent::HistoryJump)
            .map_err(|_| bad());
    }

    token
        .parse::<usize>()
        .ok()
        .and_then(Position::from_index)
        .map(ViewEvent::CellClicked)
        .ok_or_else(bad)
}

/// Parses a whole script.
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ViewEvent>, ScriptError> {
    tokens.iter().map(|t| parse_event(t.as_ref())).collect()
}

/// Feeds `events` through a fresh controller and returns it.
///
/// Jumps are checked against the history before dispatch, since script input
/// is untrusted while the controller treats a bad jump as a bug.
#[instrument(skip(events), fields(count = events.len()))]
pub fn run_script(events: &[ViewEvent]) -> Result<Controller, ScriptError> {
    let mut controller = Controller::new();

    for (index, event) in events.iter().enumerate() {
        if let ViewEvent::HistoryJump(step) = *event {
            let history_len = controller.game().history().len();
            if step >= history_len {
                return Err(ScriptError::JumpOutOfRange {
                    index,
                    step,
                    history_len,
                });
            }
        }
        let outcome = controller.dispatch(*event);
        debug!(index, ?event, ?outcome, "Script event applied");
    }

    Ok(controller)
}
