//! Keyboard mapping for the board cursor.

use crossterm::event::KeyCode;
use oxo_engine::Position;

/// Moves cursor based on arrow keys, staying put at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps keys `1`-`9` to board positions, numbered like a phone keypad.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Position::from_index(digit as usize - 1),
        _ => None,
    }
}
