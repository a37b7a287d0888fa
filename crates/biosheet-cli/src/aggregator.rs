//! Category aggregator
//!
//! Resolves category keys to fetchers, runs them, and writes the resulting
//! tables. Keys and formats arrive as user text and are validated here, so
//! an unknown category or format fails before any request or file write.

use crate::config::Config;
use crate::error::Result;
use crate::export::{report, ExportFormat};
use biosheet_common::{Category, EntityTable};
use biosheet_ingest::{EntityFetcher, Sources};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub struct Aggregator {
    sources: Sources,
    output_dir: PathBuf,
    delay: Duration,
    show_progress: bool,
}

impl Aggregator {
    pub fn new(sources: Sources, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            output_dir: output_dir.into(),
            delay: biosheet_ingest::fetcher::DEFAULT_REQUEST_DELAY,
            show_progress: false,
        }
    }

    /// Live database clients configured from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let sources = Sources::from_config(&config.http)?;
        Ok(Self::new(sources, config.output_dir.clone()).with_delay(config.request_delay))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Parse a category key
    pub fn resolve(&self, category: &str) -> Result<Category> {
        Ok(category.parse::<Category>()?)
    }

    /// Display label for a category key
    pub fn label(&self, category: &str) -> Result<&'static str> {
        Ok(self.resolve(category)?.label())
    }

    /// Fetcher for a category key
    pub fn fetcher(&self, category: &str) -> Result<EntityFetcher> {
        let category = self.resolve(category)?;
        Ok(EntityFetcher::new(category, self.sources.clone())
            .with_delay(self.delay)
            .with_progress(self.show_progress))
    }

    /// Fetch every entity of a category
    pub async fn fetch(&self, category: &str) -> Result<EntityTable> {
        let fetcher = self.fetcher(category)?;
        Ok(fetcher.fetch_all().await)
    }

    /// Write `table` as `<output_dir>/<category>.<format>` and return the path
    pub fn export(&self, table: &EntityTable, category: &str, format: &str) -> Result<PathBuf> {
        let category = self.resolve(category)?;
        let format: ExportFormat = format.parse()?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = format.path_for(&self.output_dir, category);
        format.write(table, category, &path)?;

        info!(category = %category, format = %format, path = %path.display(), "Exported table");
        Ok(path)
    }

    /// Write `<output_dir>/<category>_report.md` and return the path
    pub fn write_report(
        &self,
        category: &str,
        table: &EntityTable,
        files: &[PathBuf],
    ) -> Result<PathBuf> {
        let category = self.resolve(category)?;
        let path = report::write_report(&self.output_dir, category, table, files)?;

        info!(category = %category, path = %path.display(), "Wrote report");
        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use biosheet_common::EntityRecord;
    use biosheet_ingest::HttpConfig;
    use tempfile::TempDir;

    fn aggregator(dir: &Path) -> Aggregator {
        // Unroutable endpoints; these tests never reach the network
        let sources = Sources::from_config(&HttpConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        Aggregator::new(sources, dir).with_delay(Duration::ZERO)
    }

    fn table() -> EntityTable {
        EntityTable::new(vec![EntityRecord::new("insulin", "hormone")])
    }

    fn file_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[test]
    fn test_labels() {
        let dir = TempDir::new().unwrap();
        let aggregator = aggregator(dir.path());

        assert_eq!(aggregator.label("amino_acids").unwrap(), "Endogenous Amino Acids");
        assert_eq!(aggregator.label("cells").unwrap(), "Human Cells");
    }

    #[tokio::test]
    async fn test_fetch_unknown_category() {
        let dir = TempDir::new().unwrap();
        let aggregator = aggregator(dir.path());

        let err = aggregator.fetch("vitamins").await.unwrap_err();
        assert!(matches!(err, CliError::UnknownCategory(ref key) if key == "vitamins"));
    }

    #[test]
    fn test_export_unknown_category_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let aggregator = aggregator(&out);

        let err = aggregator.export(&table(), "vitamins", "csv").unwrap_err();
        assert!(matches!(err, CliError::UnknownCategory(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_export_unsupported_format_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let aggregator = aggregator(dir.path());

        let err = aggregator.export(&table(), "hormones", "pdf").unwrap_err();
        assert!(matches!(err, CliError::UnsupportedFormat(ref f) if f == "pdf"));
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_export_paths() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("data");
        let aggregator = aggregator(&out);

        let csv = aggregator.export(&table(), "hormones", "csv").unwrap();
        let xlsx = aggregator.export(&table(), "hormones", "xlsx").unwrap();

        assert_eq!(csv, out.join("hormones.csv"));
        assert_eq!(xlsx, out.join("hormones.xlsx"));
        assert!(csv.exists() && xlsx.exists());
    }

    #[test]
    fn test_write_report_path() {
        let dir = TempDir::new().unwrap();
        let aggregator = aggregator(dir.path());

        let path = aggregator.write_report("enzymes", &EntityTable::default(), &[]).unwrap();
        assert_eq!(path, dir.path().join("enzymes_report.md"));
        assert!(std::fs::read_to_string(path).unwrap().contains("Enzymes"));
    }
}
