use std::path::PathBuf;

/// Errors raised by grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid column {column} (expected 0..{columns})")]
    InvalidColumn { column: usize, columns: usize },

    #[error("invalid piece: cannot drop an empty cell")]
    InvalidPiece,

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error(
        "invalid grid dimensions {rows}x{columns} (each must be 1..={})",
        crate::game::MAX_DIMENSION
    )]
    InvalidDimensions { rows: usize, columns: usize },
}

/// Errors returned by a single move on the match controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("the round is over; start the next round first")]
    RoundOver,

    #[error("the match is already over")]
    MatchOver,
}

/// Errors that end an interactive match early.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the match finished")]
    InputClosed,

    #[error("move failed: {0}")]
    Move(#[from] MoveError),
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

    #[error("grid setup failed: {0}")]
    Grid(#[from] GridError),
}
