//! Line-pattern windows for the pattern strategy
//!
//! Each axis through a candidate cell is flattened into a nine-symbol
//! string covering offsets -4..=4, then matched against a small table of
//! scored shapes. Positions beyond the board edge get their own symbol so
//! an edge cell can never masquerade as an open line end.

use crate::board::{Board, Player, Pos};

use super::DIRECTIONS;

/// Window symbols: CPU stone, human stone, empty cell, off-board
const SYM_CPU: char = '2';
const SYM_HUMAN: char = '1';
const SYM_EMPTY: char = '_';
const SYM_EDGE: char = '#';

/// Offsets scanned on each side of the candidate cell
const WINDOW_RADIUS: i32 = 4;

/// Scored line shapes, matched as substrings of an axis window.
///
/// A CPU four with an open end outranks spotting a human four, which
/// outranks the split fours and the open human three. The shapes are
/// directional: `2222_` wants the empty after the run, `_1111` wants it
/// before.
const PATTERNS: [(&str, i64); 5] = [
    ("2222_", 10_000),
    ("_1111", 9_000),
    ("222_2", 8_000),
    ("_111_", 7_000),
    ("22_22", 6_000),
];

/// Build the nine-symbol window along one axis, centered on `pos`.
fn axis_window(board: &Board, pos: Pos, dx: i32, dy: i32) -> String {
    let mut window = String::with_capacity((2 * WINDOW_RADIUS + 1) as usize);
    for i in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let x = pos.x as i32 + dx * i;
        let y = pos.y as i32 + dy * i;
        if !Pos::is_valid(x, y) {
            window.push(SYM_EDGE);
            continue;
        }
        window.push(match board.get(Pos::new(x as u8, y as u8)) {
            Some(Player::Cpu) => SYM_CPU,
            Some(Player::Human) => SYM_HUMAN,
            None => SYM_EMPTY,
        });
    }
    window
}

/// Total pattern score of the cell at `pos` given the current stones.
///
/// Sums the value of every table shape found in any of the four axis
/// windows. The pattern strategy places its probe stone before calling
/// this, so the window center is a CPU stone on that path; any five-long
/// match necessarily runs through the center.
#[must_use]
pub fn line_score(board: &Board, pos: Pos) -> i64 {
    let mut score = 0;
    for &(dx, dy) in &DIRECTIONS {
        let window = axis_window(board, pos, dx, dy);
        for &(pattern, value) in &PATTERNS {
            if window.contains(pattern) {
                score += value;
            }
        }
    }
    score
}
