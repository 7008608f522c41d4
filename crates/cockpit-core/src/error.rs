//! Error types for Cockpit Core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or rejected input. Maps to HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Unknown identifier. Maps to HTTP 404. The `code` is the wire-level
    /// error code (e.g. `SOURCE_NOT_FOUND`).
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected failure. Maps to HTTP 500.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a not-found error with a wire code.
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Error::NotFound {
            code,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
