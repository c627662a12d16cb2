//! Error types for page composition

use thiserror::Error;

/// Result type alias for composition operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing the page
#[derive(Error, Debug)]
pub enum Error {
    /// An element the page depends on is not present in the host document
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A link record violates its invariants (empty target, empty icon, bad URL)
    #[error("Invalid link record: {0}")]
    InvalidRecord(String),

    /// Invalid or unreadable configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
