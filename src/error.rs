use crate::board::{Stone, MAX_BOARD_SIZE};

/// Errors returned to a caller that made a malformed or out-of-turn request.
///
/// Illegal moves are not errors; they come back as a rejected move report.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board size {0} out of range (1..={max})", max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("invalid color code {0} (expected 1=Black or 2=White)")]
    InvalidColor(u8),

    #[error("snapshot has {actual} cells, expected {expected}")]
    InvalidSnapshot { expected: usize, actual: usize },

    #[error("no active game")]
    NoActiveGame,

    #[error("human color mismatch: game was started with {expected:?}, request says {actual:?}")]
    ColorMismatch { expected: Stone, actual: Stone },

    #[error("game is over")]
    GameOver,

    #[error("not the human's turn")]
    NotHumanTurn,

    #[error("not the bot's turn")]
    NotBotTurn,

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed request: {0}")]
    Protocol(#[from] serde_json::Error),
}

/// Errors that can occur when validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
