//! Common types used across BioSheet

use crate::error::BiosheetError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record Schema
// ============================================================================

/// One column of the exported table.
///
/// The order of [`RecordField::ALL`] is the column order of every CSV and
/// XLSX file the workspace writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    Name,
    Type,
    Function,
    Location,
    RelatedMolecules,
    RelatedSystems,
    Diseases,
    SourceLinks,
    Synonyms,
}

impl RecordField {
    /// All fields in column order
    pub const ALL: [RecordField; 9] = [
        RecordField::Name,
        RecordField::Type,
        RecordField::Function,
        RecordField::Location,
        RecordField::RelatedMolecules,
        RecordField::RelatedSystems,
        RecordField::Diseases,
        RecordField::SourceLinks,
        RecordField::Synonyms,
    ];

    /// Column header as written to exported files
    pub fn header(&self) -> &'static str {
        match self {
            RecordField::Name => "Name",
            RecordField::Type => "Type",
            RecordField::Function => "Function",
            RecordField::Location => "Location",
            RecordField::RelatedMolecules => "Related molecules",
            RecordField::RelatedSystems => "Related systems",
            RecordField::Diseases => "Diseases/dysfunctions",
            RecordField::SourceLinks => "Source links",
            RecordField::Synonyms => "Synonyms",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// A single row of collected metadata for one biological entity.
///
/// Every field is a plain string that defaults to empty. Serde renames
/// match the exported column headers, so a record serialized to JSON uses
/// the same keys as the spreadsheet columns and reads back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub entity_type: String,

    #[serde(rename = "Function")]
    pub function: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Related molecules")]
    pub related_molecules: String,

    #[serde(rename = "Related systems")]
    pub related_systems: String,

    #[serde(rename = "Diseases/dysfunctions")]
    pub diseases: String,

    #[serde(rename = "Source links")]
    pub source_links: String,

    #[serde(rename = "Synonyms")]
    pub synonyms: String,
}

impl EntityRecord {
    /// Create a record with only `Name` and `Type` populated
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            ..Self::default()
        }
    }

    /// Read a field by column
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Type => &self.entity_type,
            RecordField::Function => &self.function,
            RecordField::Location => &self.location,
            RecordField::RelatedMolecules => &self.related_molecules,
            RecordField::RelatedSystems => &self.related_systems,
            RecordField::Diseases => &self.diseases,
            RecordField::SourceLinks => &self.source_links,
            RecordField::Synonyms => &self.synonyms,
        }
    }

    fn get_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Name => &mut self.name,
            RecordField::Type => &mut self.entity_type,
            RecordField::Function => &mut self.function,
            RecordField::Location => &mut self.location,
            RecordField::RelatedMolecules => &mut self.related_molecules,
            RecordField::RelatedSystems => &mut self.related_systems,
            RecordField::Diseases => &mut self.diseases,
            RecordField::SourceLinks => &mut self.source_links,
            RecordField::Synonyms => &mut self.synonyms,
        }
    }

    /// Assign `value` only when the field is still empty.
    ///
    /// Returns `true` if the field was written. Empty values never count as
    /// a write, so a later source still gets its chance.
    pub fn set_if_empty(&mut self, field: RecordField, value: impl AsRef<str>) -> bool {
        let value = value.as_ref().trim();
        let slot = self.get_mut(field);
        if !slot.is_empty() || value.is_empty() {
            return false;
        }
        slot.push_str(value);
        true
    }

    /// Append `value` to a comma-separated field
    pub fn append_list(&mut self, field: RecordField, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return;
        }
        let slot = self.get_mut(field);
        if !slot.is_empty() {
            slot.push_str(", ");
        }
        slot.push_str(value);
    }

    /// Append a `Label:id1,id2` token to `Source links`
    pub fn push_source_link<I, S>(&mut self, label: &str, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        if ids.is_empty() {
            return;
        }
        if !self.source_links.is_empty() {
            self.source_links.push(' ');
        }
        self.source_links.push_str(label);
        self.source_links.push(':');
        self.source_links.push_str(&ids.join(","));
    }

    /// All cells in column order
    pub fn cells(&self) -> [&str; 9] {
        RecordField::ALL.map(|field| self.get(field))
    }

    /// Whether every column holds a value
    pub fn is_complete(&self) -> bool {
        self.cells().iter().all(|cell| !cell.is_empty())
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Biological entity category a fetch runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hormones,
    Enzymes,
    AminoAcids,
    Cells,
    ForeignAminoAcids,
}

impl Category {
    /// All categories in the order `fetch-all` processes them
    pub const ALL: [Category; 5] = [
        Category::Hormones,
        Category::Enzymes,
        Category::AminoAcids,
        Category::Cells,
        Category::ForeignAminoAcids,
    ];

    /// Key used on the command line and in output file names
    pub fn key(&self) -> &'static str {
        match self {
            Category::Hormones => "hormones",
            Category::Enzymes => "enzymes",
            Category::AminoAcids => "amino_acids",
            Category::Cells => "cells",
            Category::ForeignAminoAcids => "foreign_amino_acids",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hormones => "Hormones",
            Category::Enzymes => "Enzymes",
            Category::AminoAcids => "Endogenous Amino Acids",
            Category::Cells => "Human Cells",
            Category::ForeignAminoAcids => "Foreign Amino Acids",
        }
    }

    /// Value written to the `Type` column
    pub fn entity_type(&self) -> &'static str {
        match self {
            Category::Hormones => "hormone",
            Category::Enzymes => "enzyme",
            Category::AminoAcids => "amino_acid",
            Category::Cells => "cell",
            Category::ForeignAminoAcids => "foreign_amino_acid",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = BiosheetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s.trim().to_lowercase())
            .ok_or_else(|| BiosheetError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Ordered collection of records produced by one category fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTable {
    pub records: Vec<EntityRecord>,
}

impl EntityTable {
    pub fn new(records: Vec<EntityRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityRecord> {
        self.records.iter()
    }

    /// Number of rows with a non-empty value in `field`
    pub fn count_filled(&self, field: RecordField) -> usize {
        self.records
            .iter()
            .filter(|record| !record.get(field).is_empty())
            .count()
    }

    /// Number of rows where every column holds a value
    pub fn count_complete(&self) -> usize {
        self.records.iter().filter(|record| record.is_complete()).count()
    }
}

impl From<Vec<EntityRecord>> for EntityTable {
    fn from(records: Vec<EntityRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a EntityTable {
    type Item = &'a EntityRecord;
    type IntoIter = std::slice::Iter<'a, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
