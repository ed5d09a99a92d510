//! Common error types for stagetrack

use thiserror::Error;

/// Common result type for stagetrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across stagetrack crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested artist not found in the catalog
    #[error("Artist not found: {0}")]
    NotFound(u32),
}
