//! Board snapshot history.

use crate::Board;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Ordered board snapshots, one per move plus the initial empty board.
///
/// Never empty: index 0 always exists and holds the blank board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    /// All snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[cfg(test)]
    pub(crate) fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Drops every snapshot after `step` and appends `board`.
    ///
    /// Returns how many snapshots were discarded.
    pub(crate) fn branch_from(&mut self, step: usize, board: Board) -> usize {
        let discarded = self.boards.len() - (step + 1);
        self.boards.truncate(step + 1);
        self.boards.push(board);
        discarded
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Record {
            boards: Vec<Board>,
        }

        let Record { boards } = Record::deserialize(deserializer)?;
        if boards.is_empty() {
            return Err(de::Error::custom(
                "history must hold at least the initial board",
            ));
        }
        Ok(Self { boards })
    }
}

impl std::ops::Index<usize> for History {
    type Output = Board;

    fn index(&self, step: usize) -> &Board {
        &self.boards[step]
    }
}
