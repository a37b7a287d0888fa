//! Per-category entity fetcher
//!
//! For each name of a category, in list order:
//!
//! 1. protein lookup (first human hit) fills function, location, genes,
//!    diseases and synonyms
//! 2. for the amino-acid categories, the KEGG compound adds its id and up
//!    to five EC numbers
//! 3. literature lookup appends PubMed ids
//! 4. pathway lookup tries name, first gene symbol, accession, then a
//!    derived phrase; the first non-empty answer wins
//! 5. the category's fallback table fills its designated field if empty
//!
//! Requests are awaited one at a time and the fetcher pauses after every
//! name.

use crate::catalog::{self, CategoryProfile};
use crate::error::{IngestError, Result};
use crate::kegg::Compound;
use crate::reactome::Pathway;
use crate::sources::Sources;
use crate::uniprot::ProteinEntry;
use biosheet_common::{Category, EntityRecord, EntityTable, RecordField};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pause after each name when none is configured
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(1000);

/// Publications requested per entity
pub const LITERATURE_LIMIT: usize = 5;

/// Pathways kept per entity
pub const PATHWAY_LIMIT: usize = 3;

/// EC numbers kept from a KEGG compound
pub const ENZYME_LIMIT: usize = 5;

/// Builds [`EntityRecord`]s for one category
#[derive(Debug, Clone)]
pub struct EntityFetcher {
    profile: &'static CategoryProfile,
    sources: Sources,
    delay: Duration,
    show_progress: bool,
}

impl EntityFetcher {
    pub fn new(category: Category, sources: Sources) -> Self {
        Self {
            profile: catalog::profile(category),
            sources,
            delay: DEFAULT_REQUEST_DELAY,
            show_progress: false,
        }
    }

    /// Pause inserted after every name (zero disables it)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Draw a progress bar on stderr while fetching
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn category(&self) -> Category {
        self.profile.category
    }

    /// Static entity names this fetcher iterates
    pub fn names(&self) -> &'static [&'static str] {
        self.profile.names
    }

    /// Fetch every name of the category.
    ///
    /// Names that fail are logged and left out of the table.
    pub async fn fetch_all(&self) -> EntityTable {
        self.fetch_names(self.profile.names).await
    }

    /// Fetch an explicit list of names, in order
    pub async fn fetch_names<S: AsRef<str>>(&self, names: &[S]) -> EntityTable {
        let category = self.profile.category;
        info!(category = %category, count = names.len(), "Fetching entities");

        let progress = self.progress_bar(names.len() as u64);
        let mut records = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            progress.set_message(name.to_string());

            match self.fetch_entity(name).await {
                Ok(record) => records.push(record),
                Err(e) => warn!(category = %category, name, error = %e, "Skipping entity"),
            }

            progress.inc(1);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        progress.finish_and_clear();
        info!(category = %category, records = records.len(), "Fetch complete");
        EntityTable::new(records)
    }

    /// Build the record for a single name
    pub async fn fetch_entity(&self, name: &str) -> Result<EntityRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IngestError::InvalidName(name.to_string()));
        }

        let profile = self.profile;
        let mut record = EntityRecord::new(name, profile.category.entity_type());
        debug!(name, "Fetching entity");

        let protein = self
            .sources
            .proteins
            .search_human(&profile.protein_query(name), profile.protein_limit)
            .await
            .into_iter()
            .next();
        if let Some(protein) = &protein {
            merge_protein(&mut record, protein);
        }

        if let Some(compound_id) = profile.compound_id(name) {
            if let Some(compound) = self.sources.compounds.compound(compound_id).await {
                merge_compound(&mut record, &compound);
            }
        }

        let publications = self
            .sources
            .literature
            .search(&profile.literature_query(name), LITERATURE_LIMIT)
            .await;
        record.push_source_link("PubMed", publications.iter().map(|p| p.pmid.as_str()));

        let pathways = self.find_pathways(name, protein.as_ref()).await;
        if pathways.is_empty() {
            if let Some(known) = profile.known_pathways(name) {
                debug!(name, "Using known pathways");
                record.set_if_empty(RecordField::RelatedSystems, known);
            }
        } else {
            merge_pathways(&mut record, &pathways);
        }

        if let Some(value) = profile.fallback_value(name) {
            if record.set_if_empty(profile.fallback.field, value) {
                debug!(name, field = %profile.fallback.field, "Filled from fallback table");
            }
        }

        Ok(record)
    }

    async fn find_pathways(&self, name: &str, protein: Option<&ProteinEntry>) -> Vec<Pathway> {
        let pathways = &self.sources.pathways;

        let found = pathways.search_by_name(name).await;
        if !found.is_empty() {
            debug!(name, strategy = "name", "Pathways found");
            return found;
        }

        if let Some(gene) = protein.and_then(|p| p.gene_names.first()) {
            let found = pathways.search_by_name(gene).await;
            if !found.is_empty() {
                debug!(name, strategy = "gene", gene = %gene, "Pathways found");
                return found;
            }
        }

        if let Some(accession) = protein.map(|p| p.accession.as_str()).filter(|a| !a.is_empty()) {
            let found = pathways.pathways_for_entity(accession).await;
            if !found.is_empty() {
                debug!(name, strategy = "accession", accession, "Pathways found");
                return found;
            }
        }

        let found = pathways.search_by_name(&self.profile.pathway_phrase(name)).await;
        if !found.is_empty() {
            debug!(name, strategy = "phrase", "Pathways found");
        }
        found
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{prefix:.bold} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_prefix(self.profile.category.label());
        pb
    }
}

fn merge_protein(record: &mut EntityRecord, protein: &ProteinEntry) {
    record.set_if_empty(RecordField::Function, &protein.function);
    record.set_if_empty(RecordField::Location, protein.locations.join(", "));
    record.append_list(RecordField::RelatedMolecules, protein.gene_names.join(", "));
    record.set_if_empty(RecordField::Diseases, protein.diseases.join(", "));
    record.set_if_empty(RecordField::Synonyms, protein.synonyms.join(", "));
    record.push_source_link("UniProt", [protein.accession.as_str()]);
}

fn merge_compound(record: &mut EntityRecord, compound: &Compound) {
    record.push_source_link("KEGG", [compound.id.as_str()]);
    let enzymes: Vec<&str> = compound
        .enzymes
        .iter()
        .take(ENZYME_LIMIT)
        .map(String::as_str)
        .collect();
    record.append_list(RecordField::RelatedMolecules, enzymes.join(", "));
}

fn merge_pathways(record: &mut EntityRecord, pathways: &[Pathway]) {
    let kept = &pathways[..pathways.len().min(PATHWAY_LIMIT)];
    record.push_source_link("Reactome", kept.iter().map(|p| p.st_id.as_str()));

    let names: Vec<&str> = kept
        .iter()
        .map(|p| p.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();
    record.set_if_empty(RecordField::RelatedSystems, names.join(", "));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn protein() -> ProteinEntry {
        ProteinEntry {
            accession: "P01308".into(),
            gene_names: vec!["INS".into()],
            function: "Decreases blood glucose.".into(),
            locations: vec!["Secreted".into()],
            diseases: vec!["Hyperproinsulinemia".into()],
            synonyms: vec!["Proinsulin".into()],
            ..ProteinEntry::default()
        }
    }

    #[test]
    fn test_merge_protein() {
        let mut record = EntityRecord::new("insulin", "hormone");
        merge_protein(&mut record, &protein());

        assert_eq!(record.function, "Decreases blood glucose.");
        assert_eq!(record.location, "Secreted");
        assert_eq!(record.related_molecules, "INS");
        assert_eq!(record.source_links, "UniProt:P01308");
    }

    #[test]
    fn test_merge_compound_after_protein() {
        let mut record = EntityRecord::new("alanine", "amino_acid");
        merge_protein(&mut record, &protein());
        merge_compound(
            &mut record,
            &Compound {
                id: "C00041".into(),
                enzymes: (1..=7).map(|i| format!("1.1.1.{}", i)).collect(),
                ..Compound::default()
            },
        );

        assert_eq!(
            record.related_molecules,
            "INS, 1.1.1.1, 1.1.1.2, 1.1.1.3, 1.1.1.4, 1.1.1.5"
        );
        assert_eq!(record.source_links, "UniProt:P01308 KEGG:C00041");
    }

    #[test]
    fn test_merge_pathways_keeps_three() {
        let pathways: Vec<Pathway> = (1..=5)
            .map(|i| Pathway {
                st_id: format!("R-HSA-{}", i),
                name: format!("Pathway {}", i),
                species: "Homo sapiens".into(),
            })
            .collect();

        let mut record = EntityRecord::new("insulin", "hormone");
        merge_pathways(&mut record, &pathways);

        assert_eq!(record.source_links, "Reactome:R-HSA-1,R-HSA-2,R-HSA-3");
        assert_eq!(record.related_systems, "Pathway 1, Pathway 2, Pathway 3");
    }
}
