//! Table export
//!
//! CSV and XLSX share one layout: a header row with the nine column names,
//! then one row per record in table order. The Markdown report summarizes
//! a table and lists the files written for it.

pub mod csv;
pub mod report;
pub mod xlsx;

use crate::error::{CliError, Result};
use biosheet_common::{Category, EntityTable};
use std::path::{Path, PathBuf};

/// A single file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// `<output_dir>/<category>.<ext>`
    pub fn path_for(&self, output_dir: &Path, category: Category) -> PathBuf {
        output_dir.join(format!("{}.{}", category.key(), self.extension()))
    }

    /// Write `table` to `path`
    pub fn write(&self, table: &EntityTable, category: Category, path: &Path) -> Result<()> {
        match self {
            ExportFormat::Csv => csv::write_csv(table, path),
            ExportFormat::Xlsx => xlsx::write_xlsx(table, category.key(), path),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(CliError::unsupported_format(s)),
        }
    }
}

/// Format selection on the command line, where `both` is also accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
    Both,
}

impl OutputFormat {
    /// Formats to write, CSV first
    pub fn formats(&self) -> &'static [ExportFormat] {
        match self {
            OutputFormat::Csv => &[ExportFormat::Csv],
            OutputFormat::Xlsx => &[ExportFormat::Xlsx],
            OutputFormat::Both => &[ExportFormat::Csv, ExportFormat::Xlsx],
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            "both" => Ok(OutputFormat::Both),
            _ => Err(CliError::unsupported_format(s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parse() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" XLSX ".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert!(matches!(
            "both".parse::<ExportFormat>(),
            Err(CliError::UnsupportedFormat(_))
        ));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_output_format_expands() {
        assert_eq!(
            "both".parse::<OutputFormat>().unwrap().formats(),
            &[ExportFormat::Csv, ExportFormat::Xlsx]
        );
        assert_eq!("excel".parse::<OutputFormat>().unwrap(), OutputFormat::Xlsx);
        assert!("json".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_path_for_category() {
        let path = ExportFormat::Xlsx.path_for(Path::new("data"), Category::ForeignAminoAcids);
        assert_eq!(path, Path::new("data/foreign_amino_acids.xlsx"));
    }
}
