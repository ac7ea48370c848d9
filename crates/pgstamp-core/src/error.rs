//! Error types for pgstamp

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading stamp plans or parsing user input
///
/// SQL generation itself never fails.
#[derive(Error, Debug)]
pub enum PgStampError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML plan: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON plan: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown trigger event: {0}")]
    UnknownEvent(String),

    #[error("Unsupported plan format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for pgstamp operations
pub type Result<T> = std::result::Result<T, PgStampError>;
