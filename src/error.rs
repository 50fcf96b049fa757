//! Error handling module for poimap
//!
//! Provides centralized error handling with proper error types using thiserror.
//! A missing icon is not an error: lookups return `Option` for that case.

use thiserror::Error;

/// Main error type for poimap
#[derive(Error, Debug)]
pub enum PoiMapError {
    /// Caller passed an argument the operation cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Catalog configuration errors (missing default, bad overrides)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (blank keywords, malformed feature data)
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors (reading config or feature files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for poimap operations
pub type Result<T> = std::result::Result<T, PoiMapError>;

// Convenient error constructors
impl PoiMapError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
