//! Game rules: the five-in-a-row win condition
//!
//! Free-style gomoku: no captures, no forbidden moves, and overlines
//! (six or more in a row) count as wins.

pub mod win;

// Re-exports for convenient access
pub use win::{is_winning_placement, winning_line};
