//! Gomoku rule engine and computer opponent
//!
//! A two-player gomoku (five-in-a-row) game against the computer:
//! - Standard 15x15 board
//! - 5-in-a-row to win (overlines count)
//! - Human plays black and always opens; the CPU replies as white
//! - Six selectable difficulty levels
//! - Limited undo (3 per game, each taking back a full move pair)
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Win detection
//! - [`eval`]: Position evaluation and pattern scoring
//! - [`search`]: Minimax search
//! - [`engine`]: CPU move selection for all difficulty levels
//! - [`game`]: Turn-taking state machine (moves, undo, status)
//! - [`config`]: TOML configuration file
//! - [`ui`]: egui desktop frontend
//!
//! # Quick Start
//!
//! ```
//! use gomoku_duel::{Difficulty, Game, Pos, TurnOutcome};
//!
//! let mut game = Game::new(Difficulty::Smart);
//!
//! // Human opens in the center
//! let outcome = game.apply_human_move(Pos::new(7, 7));
//! assert_eq!(outcome, Ok(TurnOutcome::Continue));
//!
//! // CPU replies
//! let (reply, _) = game.run_automated_turn().unwrap();
//! assert!(game.cell(reply).is_some());
//! ```
//!
//! # Difficulty Levels
//!
//! From weakest to strongest:
//! 1. Random - uniform choice over empty cells
//! 2. Defensive - blocks an immediate human win, otherwise random
//! 3. Smart - wins if possible, blocks, otherwise plays near the center
//! 4. Minimax - depth-limited minimax over nearby candidate cells
//! 5. Positional - weighted placement scoring with a center bonus
//! 6. Pattern - scores line patterns around each candidate cell

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, BOARD_SIZE};
pub use engine::{CpuEngine, Difficulty};
pub use error::GameError;
pub use game::{Game, GameStatus, MoveRecord, TurnOutcome};
