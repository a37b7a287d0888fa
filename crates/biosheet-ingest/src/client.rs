//! Shared HTTP plumbing for the database clients
//!
//! One `reqwest::Client` is built per run and cloned into every wrapper.

use crate::error::{IngestError, Result};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

// ============================================================================
// HTTP Client Constants
// ============================================================================

/// Public UniProt REST endpoint
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org";

/// NCBI E-utilities endpoint
pub const DEFAULT_PUBMED_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Reactome ContentService endpoint
pub const DEFAULT_REACTOME_URL: &str = "https://reactome.org/ContentService";

/// KEGG REST endpoint
pub const DEFAULT_KEGG_URL: &str = "https://rest.kegg.jp";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings shared by all database clients
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub uniprot_url: String,
    pub pubmed_url: String,
    pub reactome_url: String,
    pub kegg_url: String,

    /// Optional NCBI key, raises the E-utilities rate limit
    pub ncbi_api_key: Option<String>,

    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            pubmed_url: DEFAULT_PUBMED_URL.to_string(),
            reactome_url: DEFAULT_REACTOME_URL.to_string(),
            kegg_url: DEFAULT_KEGG_URL.to_string(),
            ncbi_api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Point every client at the same base URL (used against mock servers)
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            uniprot_url: base_url.to_string(),
            pubmed_url: base_url.to_string(),
            reactome_url: base_url.to_string(),
            kegg_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

/// Build the shared client with the BioSheet User-Agent
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(format!("BioSheet/{}", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Send a request and fail on non-success status
pub(crate) async fn send(
    service: &'static str,
    request: RequestBuilder,
) -> Result<reqwest::Response> {
    let response = request.send().await?;
    let status = response.status();
    debug!(service, status = %status, url = %response.url(), "Received response");

    if !status.is_success() {
        return Err(IngestError::Status { service, status });
    }
    Ok(response)
}

/// Send a request and read the body as text
pub(crate) async fn send_text(service: &'static str, request: RequestBuilder) -> Result<String> {
    Ok(send(service, request).await?.text().await?)
}

/// Send a request and decode the body as JSON.
///
/// Decoding goes through `serde_json` rather than `Response::json` so that
/// body and schema problems surface as [`IngestError::Json`].
pub(crate) async fn send_json<T: serde::de::DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T> {
    let body = send_text(service, request).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Encode a free-text value for use as a URL path segment
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = HttpConfig::default();
        assert_eq!(config.uniprot_url, DEFAULT_UNIPROT_URL);
        assert_eq!(config.reactome_url, DEFAULT_REACTOME_URL);
        assert!(config.ncbi_api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = HttpConfig::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.pubmed_url, "http://127.0.0.1:4000");
        assert_eq!(config.kegg_url, "http://127.0.0.1:4000");
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment(" growth hormone "), "growth%20hormone");
        assert_eq!(path_segment("gamma-aminobutyric acid"), "gamma-aminobutyric%20acid");
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(&HttpConfig::default()).is_ok());
    }
}
