//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use puzzle_hub::GridPos;

/// Moves a grid cursor one step, skipping cells for which `blocked` holds.
///
/// Stays put at the edge or when every cell in that direction is blocked.
pub fn move_cursor(
    cursor: GridPos,
    key: KeyCode,
    size: usize,
    blocked: impl Fn(GridPos) -> bool,
) -> GridPos {
    let (dr, dc): (isize, isize) = match key {
        KeyCode::Up => (-1, 0),
        KeyCode::Down => (1, 0),
        KeyCode::Left => (0, -1),
        KeyCode::Right => (0, 1),
        _ => return cursor,
    };

    let mut row = cursor.row as isize;
    let mut col = cursor.col as isize;
    loop {
        row += dr;
        col += dc;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return cursor;
        }
        let next = GridPos::new(row as usize, col as usize);
        if !blocked(next) {
            return next;
        }
    }
}

/// Moves a card cursor within a `columns`-wide deck of `slots` cards.
pub fn move_slot(slot: usize, key: KeyCode, columns: usize, slots: usize) -> usize {
    match key {
        KeyCode::Left if slot % columns > 0 => slot - 1,
        KeyCode::Right if slot % columns + 1 < columns && slot + 1 < slots => slot + 1,
        KeyCode::Up if slot >= columns => slot - columns,
        KeyCode::Down if slot + columns < slots => slot + columns,
        _ => slot,
    }
}
