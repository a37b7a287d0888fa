//! Source traits consumed by the fetcher
//!
//! The fetcher depends on these traits rather than on the concrete clients
//! so tests can substitute canned answers. Like the clients, implementations
//! never fail: an error is an empty answer.

use crate::client::{self, HttpConfig};
use crate::error::Result;
use crate::kegg::{Compound, KeggClient};
use crate::pubmed::{PubMedClient, Publication};
use crate::reactome::{Pathway, ReactomeClient};
use crate::uniprot::{self, ProteinEntry, UniProtClient};
use async_trait::async_trait;
use std::sync::Arc;

/// Protein annotation database
#[async_trait]
pub trait ProteinSource: Send + Sync {
    /// Human proteins matching `query`, best match first
    async fn search_human(&self, query: &str, limit: usize) -> Vec<ProteinEntry>;
}

/// Literature database
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Vec<Publication>;
}

/// Pathway database
#[async_trait]
pub trait PathwaySource: Send + Sync {
    /// Human pathways matching free text
    async fn search_by_name(&self, name: &str) -> Vec<Pathway>;

    /// Pathways containing a protein accession
    async fn pathways_for_entity(&self, accession: &str) -> Vec<Pathway>;
}

/// Small-molecule database
#[async_trait]
pub trait CompoundSource: Send + Sync {
    async fn compound(&self, compound_id: &str) -> Option<Compound>;
}

#[async_trait]
impl ProteinSource for UniProtClient {
    async fn search_human(&self, query: &str, limit: usize) -> Vec<ProteinEntry> {
        self.lookup_by_keyword(query, Some(uniprot::HUMAN_TAXON_ID), limit)
            .await
    }
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search(&self, query: &str, max_results: usize) -> Vec<Publication> {
        self.lookup_by_keyword(query, max_results).await
    }
}

#[async_trait]
impl PathwaySource for ReactomeClient {
    async fn search_by_name(&self, name: &str) -> Vec<Pathway> {
        ReactomeClient::search_by_name(self, name).await
    }

    async fn pathways_for_entity(&self, accession: &str) -> Vec<Pathway> {
        ReactomeClient::pathways_for_entity(self, accession).await
    }
}

#[async_trait]
impl CompoundSource for KeggClient {
    async fn compound(&self, compound_id: &str) -> Option<Compound> {
        self.lookup_by_id(compound_id).await
    }
}

/// The set of databases one fetcher reads from
#[derive(Clone)]
pub struct Sources {
    pub proteins: Arc<dyn ProteinSource>,
    pub literature: Arc<dyn LiteratureSource>,
    pub pathways: Arc<dyn PathwaySource>,
    pub compounds: Arc<dyn CompoundSource>,
}

impl Sources {
    /// Live clients sharing one HTTP client
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let http = client::build_client(config)?;

        Ok(Self {
            proteins: Arc::new(UniProtClient::from_config(http.clone(), config)),
            literature: Arc::new(PubMedClient::from_config(http.clone(), config)),
            pathways: Arc::new(ReactomeClient::from_config(http.clone(), config)),
            compounds: Arc::new(KeggClient::from_config(http, config)),
        })
    }
}

impl std::fmt::Debug for Sources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sources").finish_non_exhaustive()
    }
}
