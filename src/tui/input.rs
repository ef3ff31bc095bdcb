//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_toe_core::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a digit key `1`-`9` to its square.
pub fn digit_to_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .filter(|d| (1..=9).contains(d))
        .and_then(|d| Position::from_index(d as usize - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(
            move_cursor(Position::TopRight, KeyCode::Down),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_other_keys_keep_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits_map_to_squares() {
        assert_eq!(digit_to_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_to_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_to_position('0'), None);
        assert_eq!(digit_to_position('a'), None);
    }
}
