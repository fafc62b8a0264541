use std::path::PathBuf;

/// Errors that can occur when setting up or running a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("win length {win_length} must be in [1, {max}] for a {rows}x{cols} board")]
    InvalidWinLength {
        win_length: usize,
        max: usize,
        rows: usize,
        cols: usize,
    },

    #[error("board has {first} X and {second} O tokens; X must equal O or lead by one")]
    ImpossibleTokenCount { first: usize, second: usize },

    #[error("a game needs two seated players, found {found}")]
    MissingPlayers { found: usize },

    #[error("player error: {0}")]
    Agent(#[from] AgentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors a seat occupant can raise while choosing a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("input closed, player gave up")]
    InputAbandoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read board snapshot {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("board snapshot contains no rows")]
    NoRows,

    #[error("row on line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
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
