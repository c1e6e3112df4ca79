//! Error types for the standings registry

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while loading a standings snapshot
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read standings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse standings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid team record: {0}")]
    InvalidRecord(#[from] scorebook::ScoreError),

    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("standings file contains no teams")]
    EmptyTable,
}
