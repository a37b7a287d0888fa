//! Command implementations

pub mod fetch;
pub mod fetch_all;
pub mod interactive;
pub mod list;

use crate::aggregator::Aggregator;
use crate::error::Result;
use crate::export::OutputFormat;
use biosheet_common::{EntityTable, RecordField};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::path::PathBuf;

/// Rows shown after a fetch
pub const PREVIEW_ROWS: usize = 5;

const PREVIEW_CELL_CHARS: usize = 60;

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

/// Name / Function / Location preview of the first rows
pub fn preview_table(table: &EntityTable, rows: usize) -> Table {
    let columns = [RecordField::Name, RecordField::Function, RecordField::Location];

    let mut preview = Table::new();
    preview
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|f| f.header()));

    for record in table.iter().take(rows) {
        preview.add_row(
            columns
                .iter()
                .map(|f| truncate(record.get(*f), PREVIEW_CELL_CHARS)),
        );
    }
    preview
}

/// Export `table` in every requested format, returning the written paths
pub fn export_table(
    aggregator: &Aggregator,
    table: &EntityTable,
    category: &str,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    format
        .formats()
        .iter()
        .map(|f| aggregator.export(table, category, f.extension()))
        .collect()
}
