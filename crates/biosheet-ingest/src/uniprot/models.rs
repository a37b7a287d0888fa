//! UniProt data models
//!
//! `Raw*` types mirror the UniProtKB REST JSON closely enough to deserialize
//! the fields BioSheet reads; everything else in the payload is ignored.
//! [`ProteinEntry`] is the flattened view handed to the fetcher.

use serde::{Deserialize, Serialize};

/// Flattened protein annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinEntry {
    /// Primary accession number (e.g., "P01308")
    pub accession: String,
    /// Entry name / ID (e.g., "INS_HUMAN")
    pub entry_name: String,
    /// Recommended full name
    pub protein_name: String,
    pub gene_names: Vec<String>,
    /// Organism scientific name
    pub organism: String,
    /// Text of the first FUNCTION comment
    pub function: String,
    /// Subcellular locations, deduplicated in document order
    pub locations: Vec<String>,
    /// KEGG gene cross-references (e.g., "hsa:3630")
    pub kegg_ids: Vec<String>,
    /// Disease identifiers from DISEASE comments
    pub diseases: Vec<String>,
    /// Alternative protein names
    pub synonyms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSearchResponse {
    #[serde(default)]
    pub results: Vec<RawEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEntry {
    #[serde(default)]
    pub primary_accession: String,
    #[serde(default, rename = "uniProtkbId")]
    pub uniprotkb_id: String,
    #[serde(default)]
    pub protein_description: Option<RawProteinDescription>,
    #[serde(default)]
    pub genes: Vec<RawGene>,
    #[serde(default)]
    pub organism: Option<RawOrganism>,
    #[serde(default)]
    pub comments: Vec<RawComment>,
    #[serde(default, rename = "uniProtKBCrossReferences")]
    pub cross_references: Vec<RawCrossReference>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProteinDescription {
    #[serde(default)]
    pub recommended_name: Option<RawName>,
    #[serde(default)]
    pub alternative_names: Vec<RawName>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawName {
    #[serde(default)]
    pub full_name: Option<RawValue>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawValue {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGene {
    #[serde(default)]
    pub gene_name: Option<RawValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOrganism {
    #[serde(default)]
    pub scientific_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawComment {
    #[serde(default)]
    pub comment_type: String,
    #[serde(default)]
    pub texts: Vec<RawValue>,
    #[serde(default)]
    pub subcellular_locations: Vec<RawSubcellularLocation>,
    #[serde(default)]
    pub disease: Option<RawDisease>,
}

impl RawComment {
    /// UniProt spells multi-word types with a space ("SUBCELLULAR LOCATION");
    /// compare with separators normalised.
    fn is(&self, comment_type: &str) -> bool {
        self.comment_type.replace(' ', "_").eq_ignore_ascii_case(comment_type)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSubcellularLocation {
    #[serde(default)]
    pub location: Option<RawValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDisease {
    #[serde(default)]
    pub disease_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCrossReference {
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub id: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl From<RawEntry> for ProteinEntry {
    fn from(raw: RawEntry) -> Self {
        let (protein_name, synonyms) = match raw.protein_description {
            Some(description) => {
                let name = description
                    .recommended_name
                    .and_then(|n| n.full_name)
                    .map(|v| v.value)
                    .unwrap_or_default();
                let synonyms = description
                    .alternative_names
                    .into_iter()
                    .filter_map(|n| n.full_name)
                    .filter_map(|v| non_empty(&v.value))
                    .collect();
                (name, synonyms)
            },
            None => (String::new(), Vec::new()),
        };

        let gene_names = raw
            .genes
            .into_iter()
            .filter_map(|g| g.gene_name)
            .filter_map(|v| non_empty(&v.value))
            .collect();

        let function = raw
            .comments
            .iter()
            .find(|c| c.is("FUNCTION"))
            .and_then(|c| c.texts.first())
            .map(|t| t.value.trim().to_string())
            .unwrap_or_default();

        let mut locations: Vec<String> = Vec::new();
        for comment in raw.comments.iter().filter(|c| c.is("SUBCELLULAR_LOCATION")) {
            for location in &comment.subcellular_locations {
                if let Some(value) = location.location.as_ref().and_then(|v| non_empty(&v.value)) {
                    if !locations.contains(&value) {
                        locations.push(value);
                    }
                }
            }
        }

        let diseases = raw
            .comments
            .iter()
            .filter(|c| c.is("DISEASE"))
            .filter_map(|c| c.disease.as_ref())
            .filter_map(|d| non_empty(&d.disease_id))
            .collect();

        let kegg_ids = raw
            .cross_references
            .iter()
            .filter(|x| x.database.eq_ignore_ascii_case("KEGG"))
            .filter_map(|x| non_empty(&x.id))
            .collect();

        Self {
            accession: raw.primary_accession,
            entry_name: raw.uniprotkb_id,
            protein_name,
            gene_names,
            organism: raw.organism.map(|o| o.scientific_name).unwrap_or_default(),
            function,
            locations,
            kegg_ids,
            diseases,
            synonyms,
        }
    }
}
