//! Initial board invariant: history starts from a blank board.

use super::Invariant;
use crate::GameState;

/// Invariant: the snapshot at step 0 holds no marks.
pub struct InitialBoardEmptyInvariant;

impl Invariant<GameState> for InitialBoardEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0).is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::{Board, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(InitialBoardEmptyInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        let game = GameState::from_parts(History::from_boards(vec![start]), 0);
        assert!(!InitialBoardEmptyInvariant::holds(&game));
    }
}
