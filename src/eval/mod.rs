//! Position evaluation for the CPU strategies
//!
//! Contains:
//! - Whole-board line scoring, the leaf value of the minimax search
//! - Per-cell directional run scoring for the positional strategy
//! - Nine-symbol window patterns for the pattern strategy

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, evaluate_placement};
pub use patterns::line_score;

/// Direction vectors as (dx, dy), one per axis. Shared by both scorers
/// and the pattern windows; the order matches the win detector.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal up-right
];
