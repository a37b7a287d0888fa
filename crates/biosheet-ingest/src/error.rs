//! Error types for the ingest clients
//!
//! These never reach the aggregator: every public client method turns them
//! into an empty result plus a warning log.

use thiserror::Error;

/// Result type alias for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed {service} response: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },

    #[error("Invalid entity name: {0:?}")]
    InvalidName(String),
}

impl IngestError {
    pub fn malformed(service: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            service,
            message: message.into(),
        }
    }
}
