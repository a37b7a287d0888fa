//! KEGG REST client for compound entries
//!
//! Only the amino-acid categories use it. KEGG answers plain text, a 404
//! for unknown ids and an empty body for searches without hits.

pub mod parser;

use crate::client::{self, HttpConfig};
use crate::error::{IngestError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SERVICE: &str = "kegg";

/// A KEGG reference pathway linked from a compound
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeggPathway {
    /// Map identifier (e.g., "map00250")
    pub id: String,
    pub name: String,
}

/// A KEGG COMPOUND entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    /// Compound identifier (e.g., "C00041")
    pub id: String,
    pub names: Vec<String>,
    pub formula: String,
    pub exact_mass: Option<f64>,
    pub pathways: Vec<KeggPathway>,
    /// EC numbers of enzymes acting on the compound
    pub enzymes: Vec<String>,
}

/// One line of a compound search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundHit {
    pub id: String,
    pub names: Vec<String>,
}

/// KEGG client
#[derive(Debug, Clone)]
pub struct KeggClient {
    client: Client,
    base_url: String,
}

impl KeggClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(client: Client, config: &HttpConfig) -> Self {
        Self::new(client, config.kegg_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a compound by id (e.g., "C00041"). Returns `None` on any failure.
    pub async fn lookup_by_id(&self, compound_id: &str) -> Option<Compound> {
        match self.try_get(compound_id).await {
            Ok(compound) => compound,
            Err(e) => {
                warn!(service = SERVICE, compound_id, error = %e, "KEGG lookup failed");
                None
            },
        }
    }

    /// Search compounds by name. Returns an empty list on any failure.
    pub async fn lookup_by_keyword(&self, query: &str) -> Vec<CompoundHit> {
        match self.try_find(query).await {
            Ok(hits) => {
                debug!(query, count = hits.len(), "KEGG search complete");
                hits
            },
            Err(e) => {
                warn!(service = SERVICE, query, error = %e, "KEGG search failed");
                Vec::new()
            },
        }
    }

    async fn try_get(&self, compound_id: &str) -> Result<Option<Compound>> {
        let compound_id = compound_id.trim();
        if compound_id.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/get/{}", self.base_url, client::path_segment(compound_id));
        match client::send_text(SERVICE, self.client.get(&url)).await {
            Ok(body) if body.trim().is_empty() => Ok(None),
            Ok(body) => parser::parse_compound(&body).map(Some),
            Err(IngestError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn try_find(&self, query: &str) -> Result<Vec<CompoundHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/find/compound/{}", self.base_url, client::path_segment(query));
        let body = client::send_text(SERVICE, self.client.get(&url)).await?;
        Ok(parser::parse_find(&body))
    }
}
