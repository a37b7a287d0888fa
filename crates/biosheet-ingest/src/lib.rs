//! BioSheet Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Clients for the public biomedical databases BioSheet reads from, and the
//! per-category fetcher that merges their answers into [`EntityRecord`]s.
//!
//! # Supported Data Sources
//!
//! - **UniProt**: protein function, location, genes, diseases, synonyms
//! - **PubMed**: literature identifiers via NCBI E-utilities
//! - **Reactome**: human pathways
//! - **KEGG**: compound entries for the amino-acid categories
//!
//! # Example
//!
//! ```no_run
//! use biosheet_common::Category;
//! use biosheet_ingest::{EntityFetcher, HttpConfig, Sources};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sources = Sources::from_config(&HttpConfig::default())?;
//!     let fetcher = EntityFetcher::new(Category::Hormones, sources);
//!     let table = fetcher.fetch_all().await;
//!     println!("{} hormones collected", table.len());
//!     Ok(())
//! }
//! ```
//!
//! [`EntityRecord`]: biosheet_common::EntityRecord

pub mod catalog;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod kegg;
pub mod pubmed;
pub mod reactome;
pub mod sources;
pub mod uniprot;

pub use client::HttpConfig;
pub use error::{IngestError, Result};
pub use fetcher::EntityFetcher;
pub use sources::Sources;
