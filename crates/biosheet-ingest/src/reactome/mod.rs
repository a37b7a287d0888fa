//! Reactome ContentService client
//!
//! Three read paths are used:
//!
//! - `/search/query`: free-text pathway search (a 404 means no hits)
//! - `/data/mapping/UniProt/{accession}/pathways`: pathways containing the
//!   protein with that UniProt accession
//! - `/data/query/{stId}`: a single pathway by stable identifier
//!
//! Search results carry `<span class="highlighting">` markup around matched
//! terms; it is stripped before names leave this module.

use crate::client::{self, HttpConfig};
use crate::error::{IngestError, Result};
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, warn};

const SERVICE: &str = "reactome";

/// Species name used by the search endpoint
pub const HUMAN_SPECIES: &str = "Homo sapiens";

/// Taxonomy id used by the entity endpoint
pub const HUMAN_TAXON_ID: &str = "9606";

static MARKUP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

/// Remove inline HTML tags and collapse whitespace
pub fn strip_markup(text: &str) -> String {
    let stripped = match MARKUP.as_ref() {
        Some(re) => re.replace_all(text, ""),
        None => text.into(),
    };
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A Reactome pathway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    /// Stable identifier (e.g., "R-HSA-74749")
    pub st_id: String,
    pub name: String,
    pub species: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn first(self) -> String {
        match self {
            Self::One(value) => value,
            Self::Many(values) => values.into_iter().next().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchGroup>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchGroup {
    #[serde(default)]
    entries: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchEntry {
    #[serde(default)]
    st_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    species: Option<OneOrMany>,
}

impl From<SearchEntry> for Pathway {
    fn from(entry: SearchEntry) -> Self {
        Self {
            st_id: entry.st_id,
            name: strip_markup(&entry.name),
            species: entry.species.map(OneOrMany::first).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventEntry {
    #[serde(default)]
    st_id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    species_name: String,
}

impl From<EventEntry> for Pathway {
    fn from(entry: EventEntry) -> Self {
        Self {
            st_id: entry.st_id,
            name: strip_markup(&entry.display_name),
            species: entry.species_name,
        }
    }
}

/// Reactome client
#[derive(Debug, Clone)]
pub struct ReactomeClient {
    client: Client,
    base_url: String,
}

impl ReactomeClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(client: Client, config: &HttpConfig) -> Self {
        Self::new(client, config.reactome_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Human pathways matching `name`
    pub async fn search_by_name(&self, name: &str) -> Vec<Pathway> {
        self.lookup_by_keyword(name, Some(HUMAN_SPECIES)).await
    }

    /// Free-text pathway search with an optional species filter.
    ///
    /// Returns an empty list on any failure.
    pub async fn lookup_by_keyword(&self, text: &str, species: Option<&str>) -> Vec<Pathway> {
        match self.try_search(text, species).await {
            Ok(pathways) => {
                debug!(query = text, count = pathways.len(), "Reactome search complete");
                pathways
            },
            Err(e) => {
                warn!(service = SERVICE, query = text, error = %e, "Reactome search failed");
                Vec::new()
            },
        }
    }

    /// Human pathways containing the protein with a UniProt accession
    pub async fn pathways_for_entity(&self, accession: &str) -> Vec<Pathway> {
        match self.try_entity_pathways(accession).await {
            Ok(pathways) => pathways,
            Err(e) => {
                warn!(service = SERVICE, accession, error = %e, "Reactome entity lookup failed");
                Vec::new()
            },
        }
    }

    /// One pathway by stable identifier. Returns `None` on any failure.
    pub async fn lookup_by_id(&self, st_id: &str) -> Option<Pathway> {
        let url = format!("{}/data/query/{}", self.base_url, client::path_segment(st_id));
        match client::send_json::<EventEntry>(SERVICE, self.client.get(&url)).await {
            Ok(entry) if !entry.st_id.is_empty() => Some(Pathway::from(entry)),
            Ok(_) => None,
            Err(e) => {
                warn!(service = SERVICE, st_id, error = %e, "Reactome lookup failed");
                None
            },
        }
    }

    async fn try_search(&self, text: &str, species: Option<&str>) -> Result<Vec<Pathway>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search/query", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("query", text), ("types", "Pathway"), ("cluster", "true")]);
        if let Some(species) = species {
            request = request.query(&[("species", species)]);
        }

        let response: SearchResponse = match client::send_json(SERVICE, request).await {
            Ok(response) => response,
            Err(IngestError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(response
            .results
            .into_iter()
            .flat_map(|group| group.entries)
            .filter(|entry| !entry.st_id.is_empty())
            .map(Pathway::from)
            .collect())
    }

    async fn try_entity_pathways(&self, accession: &str) -> Result<Vec<Pathway>> {
        let accession = accession.trim();
        if accession.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/data/mapping/UniProt/{}/pathways",
            self.base_url,
            client::path_segment(accession)
        );
        let request = self.client.get(&url).query(&[("species", HUMAN_TAXON_ID)]);

        match client::send_json::<Vec<EventEntry>>(SERVICE, request).await {
            Ok(entries) => Ok(entries
                .into_iter()
                .filter(|entry| !entry.st_id.is_empty())
                .map(Pathway::from)
                .collect()),
            Err(IngestError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_highlight_markup() {
        assert_eq!(
            strip_markup(r#"Regulation of <span class="highlighting" >insulin</span>  secretion"#),
            "Regulation of insulin secretion"
        );
        assert_eq!(strip_markup("Glycolysis"), "Glycolysis");
    }

    #[test]
    fn test_search_entry_species_forms() {
        let json = r#"{"results": [{"typeName": "Pathway", "entries": [
            {"stId": "R-HSA-74749", "name": "Signal attenuation", "species": ["Homo sapiens"]},
            {"stId": "R-HSA-422356", "name": "Regulation of <span class=\"highlighting\">insulin</span> secretion", "species": "Homo sapiens"},
            {"name": "no id"}
        ]}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let pathways: Vec<Pathway> = response
            .results
            .into_iter()
            .flat_map(|g| g.entries)
            .filter(|e| !e.st_id.is_empty())
            .map(Pathway::from)
            .collect();

        assert_eq!(pathways.len(), 2);
        assert_eq!(pathways[0].species, "Homo sapiens");
        assert_eq!(pathways[1].name, "Regulation of insulin secretion");
    }

    #[test]
    fn test_event_entry_conversion() {
        let json = r#"{"stId": "R-HSA-70171", "displayName": "Glycolysis", "speciesName": "Homo sapiens", "dbId": 70171}"#;
        let pathway = Pathway::from(serde_json::from_str::<EventEntry>(json).unwrap());

        assert_eq!(pathway.st_id, "R-HSA-70171");
        assert_eq!(pathway.name, "Glycolysis");
    }
}
