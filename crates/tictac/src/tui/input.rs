//! Keyboard and mouse mapping onto board cells.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictac_core::Position;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Digit keys 1-9 address cells directly.
pub fn digit_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .and_then(|digit| Position::from_number(digit as usize))
}

/// The cell whose last drawn area contains the terminal coordinate.
pub fn cell_at(areas: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    areas
        .iter()
        .position(|area| {
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
        .and_then(Position::from_index)
}
