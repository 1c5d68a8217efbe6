//! Error types for result formatting

use thiserror::Error;

/// Errors that can occur while loading or shaping search responses
#[derive(Error, Debug)]
pub enum FormatError {
    /// Malformed JSON, or a required object (e.g. `result_metadata`) is missing
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}
