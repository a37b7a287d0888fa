//! PubMed client over NCBI E-utilities
//!
//! A keyword lookup is two round trips: `esearch.fcgi` (JSON) resolves the
//! query to PMIDs, then `efetch.fcgi` (XML) returns the article records.

pub mod parser;

use crate::client::{self, HttpConfig};
use crate::error::Result;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SERVICE: &str = "pubmed";

/// One PubMed article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub pmid: String,
    pub title: String,
    pub abstract_text: String,
    /// "ForeName LastName", authors without both parts are skipped
    pub authors: Vec<String>,
    pub journal: String,
    /// "Month Year" or "Year"
    pub publication_date: String,
    pub keywords: Vec<String>,
    pub mesh_terms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// PubMed client
#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn from_config(client: Client, config: &HttpConfig) -> Self {
        Self::new(client, config.pubmed_url.clone(), config.ncbi_api_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search PubMed and fetch up to `max_results` articles.
    ///
    /// Returns an empty list on any failure.
    pub async fn lookup_by_keyword(&self, query: &str, max_results: usize) -> Vec<Publication> {
        match self.try_lookup(query, max_results).await {
            Ok(publications) => {
                debug!(query, count = publications.len(), "PubMed lookup complete");
                publications
            },
            Err(e) => {
                warn!(service = SERVICE, query, error = %e, "PubMed lookup failed");
                Vec::new()
            },
        }
    }

    /// Fetch one article by PMID. Returns `None` on any failure.
    pub async fn lookup_by_id(&self, pmid: &str) -> Option<Publication> {
        match self.try_fetch(&[pmid.trim().to_string()]).await {
            Ok(publications) => publications.into_iter().next(),
            Err(e) => {
                warn!(service = SERVICE, pmid, error = %e, "PubMed fetch failed");
                None
            },
        }
    }

    async fn try_lookup(&self, query: &str, max_results: usize) -> Result<Vec<Publication>> {
        let ids = self.try_search_ids(query, max_results).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.try_fetch(&ids).await
    }

    async fn try_search_ids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        let retmax = max_results.to_string();
        let request = self.client.get(&url).query(&[
            ("db", "pubmed"),
            ("term", query),
            ("retmax", retmax.as_str()),
            ("retmode", "json"),
            ("sort", "relevance"),
        ]);

        let response: ESearchResponse =
            client::send_json(SERVICE, self.with_api_key(request)).await?;
        Ok(response.esearchresult.idlist)
    }

    async fn try_fetch(&self, ids: &[String]) -> Result<Vec<Publication>> {
        let url = format!("{}/efetch.fcgi", self.base_url);
        let id = ids.join(",");
        let request = self.client.get(&url).query(&[
            ("db", "pubmed"),
            ("id", id.as_str()),
            ("retmode", "xml"),
        ]);

        let body = client::send_text(SERVICE, self.with_api_key(request)).await?;
        parser::parse_article_set(&body)
    }

    fn with_api_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("api_key", key.as_str())]),
            None => request,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_dropped() {
        let client = PubMedClient::new(Client::new(), "http://localhost/", Some("  ".into()));
        assert!(client.api_key.is_none());
        assert_eq!(client.base_url(), "http://localhost");
    }

    #[test]
    fn test_esearch_response_shape() {
        let json = r#"{"header": {"type": "esearch"},
            "esearchresult": {"count": "2", "retmax": "2", "idlist": ["111", "222"]}}"#;
        let parsed: ESearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.esearchresult.idlist, vec!["111", "222"]);
    }

    #[test]
    fn test_esearch_error_shape_is_empty() {
        let parsed: ESearchResponse =
            serde_json::from_str(r#"{"error": "API rate limit exceeded"}"#).unwrap();
        assert!(parsed.esearchresult.idlist.is_empty());
    }
}
