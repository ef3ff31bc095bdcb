//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning triples, checked in this order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`WINNING_LINES`] held entirely by one player.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                assert_eq!(detect_winner(&board), Some(player), "line {line:?}");
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        // Top row and left column both belong to X.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some(WINNING_LINES[0]));
    }
}
