//! UniProtKB REST client
//!
//! Keyword search and accession lookup against `rest.uniprot.org`.
//! Failures are logged and reported as "no results".

pub mod models;

pub use models::ProteinEntry;

use crate::client::{self, HttpConfig};
use crate::error::{IngestError, Result};
use models::{RawEntry, RawSearchResponse};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

const SERVICE: &str = "uniprot";

/// Fields requested from the search endpoint
pub const SEARCH_FIELDS: &str = "accession,id,protein_name,gene_names,organism_name,\
    cc_function,cc_subcellular_location,cc_disease,xref_kegg";

/// NCBI taxonomy id for Homo sapiens
pub const HUMAN_TAXON_ID: &str = "9606";

/// Build a UniProt query string with an optional organism filter
pub fn build_query(keyword: &str, organism_id: Option<&str>) -> String {
    match organism_id {
        Some(taxon) => format!("{} AND organism_id:{}", keyword.trim(), taxon),
        None => keyword.trim().to_string(),
    }
}

/// UniProtKB client
#[derive(Debug, Clone)]
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(client: Client, config: &HttpConfig) -> Self {
        Self::new(client, config.uniprot_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search proteins by keyword, optionally restricted to one organism.
    ///
    /// Returns an empty list on any failure.
    pub async fn lookup_by_keyword(
        &self,
        keyword: &str,
        organism_id: Option<&str>,
        limit: usize,
    ) -> Vec<ProteinEntry> {
        let query = build_query(keyword, organism_id);
        match self.try_search(&query, limit).await {
            Ok(entries) => {
                debug!(query = %query, count = entries.len(), "UniProt search complete");
                entries
            },
            Err(e) => {
                warn!(service = SERVICE, query = %query, error = %e, "UniProt search failed");
                Vec::new()
            },
        }
    }

    /// Fetch one entry by accession. Returns `None` on any failure.
    pub async fn lookup_by_id(&self, accession: &str) -> Option<ProteinEntry> {
        match self.try_get(accession).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(service = SERVICE, accession, error = %e, "UniProt lookup failed");
                None
            },
        }
    }

    async fn try_search(&self, query: &str, limit: usize) -> Result<Vec<ProteinEntry>> {
        let url = format!("{}/uniprotkb/search", self.base_url);
        let size = limit.to_string();
        let request = self.client.get(&url).query(&[
            ("query", query),
            ("fields", SEARCH_FIELDS),
            ("size", size.as_str()),
            ("format", "json"),
        ]);

        let response: RawSearchResponse = client::send_json(SERVICE, request).await?;
        Ok(response.results.into_iter().map(ProteinEntry::from).collect())
    }

    async fn try_get(&self, accession: &str) -> Result<Option<ProteinEntry>> {
        let url = format!(
            "{}/uniprotkb/{}",
            self.base_url,
            client::path_segment(accession)
        );
        let request = self.client.get(&url).query(&[("format", "json")]);

        match client::send_json::<RawEntry>(SERVICE, request).await {
            Ok(raw) => Ok(Some(ProteinEntry::from(raw))),
            Err(IngestError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_with_organism() {
        assert_eq!(
            build_query("insulin", Some(HUMAN_TAXON_ID)),
            "insulin AND organism_id:9606"
        );
    }

    #[test]
    fn test_build_query_without_organism() {
        assert_eq!(build_query("  hexokinase ", None), "hexokinase");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = UniProtClient::new(Client::new(), "http://localhost:9000/");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
