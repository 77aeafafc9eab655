//! Error types for the replog_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for replog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required field is missing or cannot be coerced
    #[error("{0}")]
    Validation(String),

    /// No user document exists for the given id
    #[error("unknown user: {0}")]
    UserNotFound(String),

    /// Document store failure
    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    /// Validation error for a missing required field
    pub fn missing_field(field: &str) -> Self {
        Error::Validation(format!("Path `{}` is required.", field))
    }
}
