//! CSV writer

use crate::error::Result;
use biosheet_common::{EntityTable, RecordField};
use std::path::Path;

/// Write the header row and every record to `path`
pub fn write_csv(table: &EntityTable, path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path)?;

    writer.write_record(RecordField::ALL.map(|field| field.header()))?;
    for record in table {
        writer.write_record(record.cells())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use biosheet_common::EntityRecord;
    use tempfile::TempDir;

    #[test]
    fn test_write_csv_quotes_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cells.csv");

        let mut record = EntityRecord::new("neuron", "cell");
        record.location = "Brain, Nervous system".into();
        write_csv(&EntityTable::new(vec![record]), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Name,Type,Function,Location,Related molecules,Related systems,Diseases/dysfunctions,Source links,Synonyms"
        );
        assert_eq!(
            lines.next().unwrap(),
            "neuron,cell,,\"Brain, Nervous system\",,,,,"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_empty_table_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&EntityTable::default(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
