//! Error types for game actions and configuration loading

use std::path::PathBuf;

use crate::board::{Player, Pos};

/// Errors reported by the game controller and the CPU engine.
///
/// Every variant is a deterministic precondition violation; none of them
/// mutates game state, and all are recoverable at the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {0} is already occupied")]
    OccupiedCell(Pos),

    #[error("{} cannot move now", .0.label())]
    NotYourTurn(Player),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("undo is not available")]
    UndoUnavailable,

    #[error("no empty cell is left to play")]
    NoLegalMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
