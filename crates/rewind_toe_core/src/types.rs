//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player to move after `step` moves have been made.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks whether the square holds no mark.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks whether no square holds a mark.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| s.is_empty())
    }

    /// Lists the positions where `self` and `other` disagree.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the text doubles as a keypad hint.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
