//! Error types for the BioSheet CLI
//!
//! Messages are shown to the user as-is, so each one says what to try next.

use biosheet_common::BiosheetError;
use biosheet_ingest::IngestError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Category key not in the catalog
    #[error("Unknown entity type: '{0}'. Run 'biosheet list' to see the available entity types.")]
    UnknownCategory(String),

    /// Output format other than csv / xlsx
    #[error("Unsupported output format: '{0}'. Supported formats are 'csv' and 'xlsx' ('both' writes each).")]
    UnsupportedFormat(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// CSV writer failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX writer failed
    #[error("Failed to write XLSX: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),

    /// Shared library error
    #[error(transparent)]
    Common(BiosheetError),

    /// HTTP client setup failed
    #[error("Could not set up database clients: {0}")]
    Ingest(#[from] IngestError),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }
}

impl From<BiosheetError> for CliError {
    fn from(err: BiosheetError) -> Self {
        match err {
            BiosheetError::UnknownCategory(key) => Self::UnknownCategory(key),
            BiosheetError::Io(e) => Self::Io(e),
            BiosheetError::Config(msg) => Self::Config(msg),
            other => Self::Common(other),
        }
    }
}
