//! Error types for BioSheet

use thiserror::Error;

/// Result type alias for BioSheet operations
pub type Result<T> = std::result::Result<T, BiosheetError>;

/// Main error type for BioSheet
#[derive(Error, Debug)]
pub enum BiosheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown entity category: {0}")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
