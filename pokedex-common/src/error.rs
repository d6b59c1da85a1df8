//! Common error types for the Pokédex gallery

use thiserror::Error;

/// Common result type for gallery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the gallery crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record data could not be parsed as JSON
    #[error("Record data error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed as TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record breaks the data model (e.g. no categories)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
