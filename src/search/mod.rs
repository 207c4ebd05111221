//! Game-tree search for the minimax strategy
//!
//! Contains:
//! - Candidate generation restricted to the neighborhood of placed stones
//! - Fixed-depth minimax over that candidate set

pub mod minimax;

pub use minimax::{best_move, candidate_moves, SEARCH_DEPTH};
