//! Error types for the affinity engine
//!
//! Recommendation queries never fail; only loading content, affinity tables
//! and configuration can. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for affinity loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the affinity engine
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a data or config file
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Malformed TOML or JSON input
    #[error("Parse error: {0}")]
    Parse(String),

    /// The same identifier appears twice where identifiers must be unique
    #[error("Duplicate {kind} identifier: {id}")]
    DuplicateId {
        /// What kind of identifier collided ("calculator", "post (en)", ...)
        kind: String,
        /// The offending identifier
        id: String,
    },

    /// Unknown locale code
    #[error("Invalid locale '{0}'. Expected \"en\" or \"tr\".")]
    InvalidLocale(String),

    /// Configuration that parses but cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build a `DuplicateId` error
    pub fn duplicate(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Error::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}
