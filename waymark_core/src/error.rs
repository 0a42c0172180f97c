//! Error types for the waymark_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for waymark_core operations
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

    /// Workout form validation error
    #[error("{0}")]
    Validation(String),

    /// Geolocation lookup failure
    #[error("Geolocation error: {0}")]
    Geolocation(String),

    /// Session flow error
    #[error("Session error: {0}")]
    Session(String),
}
