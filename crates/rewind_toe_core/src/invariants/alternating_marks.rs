//! Alternating marks invariant: X and O take turns from the first move.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the mark added by move `k` belongs to `Player::for_step(k - 1)`.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .boards()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Player::for_step(step);
                pair[0]
                    .diff(&pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos).player() == Some(expected))
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::BottomRight);
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let start = Board::new();
        let first = start.with_mark(Position::Center, Player::O);
        let game = GameState::from_parts(History::from_boards(vec![start, first]), 1);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
