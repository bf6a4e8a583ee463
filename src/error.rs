use std::path::PathBuf;

use crate::game::Chip;

/// Errors that can occur when dropping a chip into the stand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {0} does not exist (expected 0..=6)")]
    InvalidColumn(i32),

    #[error("column {0} is full")]
    FullColumn(usize),

    #[error("{attempted} dropped out of turn ({expected} to move)")]
    OutOfTurn { attempted: Chip, expected: Chip },

    #[error("game is over, no more chips can be dropped")]
    GameOver,
}

/// Errors that can occur when asking for the winning placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("game is not over yet")]
    NotOver,

    #[error("game ended in a stalemate, there is no winning placement")]
    Stalemate,
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
}
