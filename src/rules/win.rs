//! Win condition checking anchored at the most recent stone
//!
//! A placement wins when it sits in a run of five or more stones of the
//! same side along any of the four axes. Runs longer than five count too;
//! there is no overline exclusion.

use crate::board::{Board, Player, Pos, BOARD_SIZE};

/// Direction vectors as (dx, dy), one per axis
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal up-right
];

/// Check whether the stone at `pos` completes a run of 5+ for `player`.
///
/// Counts from the anchor outward in both directions along each axis,
/// stopping at the first mismatch or board edge. Checked once per placed
/// stone; never scans the whole board.
#[inline]
pub fn is_winning_placement(board: &Board, pos: Pos, player: Player) -> bool {
    let sz = BOARD_SIZE as i32;
    for (dx, dy) in DIRECTIONS {
        let mut count = 1;
        // Positive direction
        let mut x = pos.x as i32 + dx;
        let mut y = pos.y as i32 + dy;
        while x >= 0 && x < sz && y >= 0 && y < sz {
            if board.get(Pos::new(x as u8, y as u8)) == Some(player) {
                count += 1;
                x += dx;
                y += dy;
            } else {
                break;
            }
        }
        // Negative direction
        x = pos.x as i32 - dx;
        y = pos.y as i32 - dy;
        while x >= 0 && x < sz && y >= 0 && y < sz {
            if board.get(Pos::new(x as u8, y as u8)) == Some(player) {
                count += 1;
                x -= dx;
                y -= dy;
            } else {
                break;
            }
        }
        if count >= 5 {
            return true;
        }
    }
    false
}

/// Find the winning run through `pos`, if one exists.
///
/// Returns the stones of the first axis whose run reaches five or more,
/// ordered from the negative end to the positive end. Used by the UI to
/// highlight the line after a win.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    for &(dx, dy) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        for i in 1..5 {
            let x = pos.x as i32 - dx * i;
            let y = pos.y as i32 - dy * i;
            if !Pos::is_valid(x, y) {
                break;
            }
            let prev = Pos::new(x as u8, y as u8);
            if board.get(prev) == Some(player) {
                line.insert(0, prev);
            } else {
                break;
            }
        }

        // Extend in positive direction
        for i in 1..5 {
            let x = pos.x as i32 + dx * i;
            let y = pos.y as i32 + dy * i;
            if !Pos::is_valid(x, y) {
                break;
            }
            let next = Pos::new(x as u8, y as u8);
            if board.get(next) == Some(player) {
                line.push(next);
            } else {
                break;
            }
        }

        if line.len() >= 5 {
            return Some(line);
        }
    }
    None
}
