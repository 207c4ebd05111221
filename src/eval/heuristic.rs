//! Heuristic scorers used by the search and positional strategies
//!
//! Two independent functions with different consumers:
//! - [`evaluate_board`] scores the whole position and is the leaf value
//!   of the minimax search. It slides a 4-cell window across every cell
//!   and axis, rewarding single-sided windows exponentially.
//! - [`evaluate_placement`] scores one candidate cell for one side by
//!   counting its forward runs. The forward-only counting is asymmetric
//!   with the win detector's bidirectional scan and is kept that way;
//!   the positional strategy's weights were tuned against it.

use crate::board::{Board, Player, Pos, BOARD_SIZE};

use super::DIRECTIONS;

/// Cells per scan window
const WINDOW_LEN: i32 = 4;

/// Score the whole board from the CPU's perspective.
///
/// For every cell and every axis, look at the window of four cells
/// starting there and stepping along the axis. A window holding only CPU
/// stones adds `10^count`; only human stones subtracts `10^count`; mixed
/// or empty windows contribute nothing. Window cells beyond the board
/// edge are skipped, so edge windows are simply shorter.
///
/// Positive totals favor the CPU, negative totals favor the human.
#[must_use]
pub fn evaluate_board(board: &Board) -> i64 {
    let sz = BOARD_SIZE as i32;
    let mut score: i64 = 0;
    for y in 0..sz {
        for x in 0..sz {
            for &(dx, dy) in &DIRECTIONS {
                let mut cpu: u32 = 0;
                let mut human: u32 = 0;
                for i in 0..WINDOW_LEN {
                    let nx = x + dx * i;
                    let ny = y + dy * i;
                    if !Pos::is_valid(nx, ny) {
                        continue;
                    }
                    match board.get(Pos::new(nx as u8, ny as u8)) {
                        Some(Player::Cpu) => cpu += 1,
                        Some(Player::Human) => human += 1,
                        None => {}
                    }
                }
                if cpu > 0 && human == 0 {
                    score += 10i64.pow(cpu);
                } else if human > 0 && cpu == 0 {
                    score -= 10i64.pow(human);
                }
            }
        }
    }
    score
}

/// Score a single cell for `player` by its forward runs.
///
/// For each axis, count the contiguous `player` stones strictly in the
/// positive direction from `pos` (the cell itself is not counted) and
/// add `10^count`. An axis with no neighboring stone still contributes
/// `10^0 = 1`, so an isolated cell scores 4.
#[must_use]
pub fn evaluate_placement(board: &Board, pos: Pos, player: Player) -> i64 {
    let mut score: i64 = 0;
    for &(dx, dy) in &DIRECTIONS {
        let mut count: u32 = 0;
        let mut x = pos.x as i32 + dx;
        let mut y = pos.y as i32 + dy;
        while Pos::is_valid(x, y) {
            if board.get(Pos::new(x as u8, y as u8)) == Some(player) {
                count += 1;
                x += dx;
                y += dy;
            } else {
                break;
            }
        }
        score += 10i64.pow(count);
    }
    score
}
