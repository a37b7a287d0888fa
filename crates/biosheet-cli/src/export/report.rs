//! Markdown summary report

use crate::error::Result;
use biosheet_common::{Category, EntityTable, RecordField};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Rows shown in the sample table
const SAMPLE_ROWS: usize = 5;

/// Longest cell shown in the sample table
const SAMPLE_CELL_CHARS: usize = 80;

const SAMPLE_COLUMNS: [RecordField; 4] = [
    RecordField::Name,
    RecordField::Function,
    RecordField::Location,
    RecordField::RelatedSystems,
];

/// `<output_dir>/<category>_report.md`
pub fn report_path(output_dir: &Path, category: Category) -> PathBuf {
    output_dir.join(format!("{}_report.md", category.key()))
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn sample_cell(value: &str) -> String {
    let mut cell: String = value.chars().take(SAMPLE_CELL_CHARS).collect();
    if value.chars().count() > SAMPLE_CELL_CHARS {
        cell.push_str("...");
    }
    cell.replace('|', "\\|").replace('\n', " ")
}

/// Render the report for one category
pub fn render_report(
    category: Category,
    table: &EntityTable,
    files: &[PathBuf],
    generated_at: DateTime<Local>,
) -> String {
    let total = table.len();
    let mut md = String::new();

    md.push_str("# BioSheet Data Collection Report\n\n");
    md.push_str(&format!("## Entity Type: {}\n", category.label()));
    md.push_str(&format!(
        "## Collection Date: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    md.push_str(&format!("## Total Records: {}\n\n", total));

    md.push_str("## Data Summary\n");
    for field in RecordField::ALL {
        if field == RecordField::Type {
            continue;
        }
        md.push_str(&format!(
            "- **{}**: {} records with data\n",
            field.header(),
            table.count_filled(field)
        ));
    }
    md.push('\n');

    md.push_str("## Sample Data\n");
    if table.is_empty() {
        md.push_str("_No records collected._\n");
    } else {
        let headers: Vec<&str> = SAMPLE_COLUMNS.iter().map(|f| f.header()).collect();
        md.push_str(&format!("| {} |\n", headers.join(" | ")));
        md.push_str(&format!("|{}\n", "---|".repeat(SAMPLE_COLUMNS.len())));
        for record in table.iter().take(SAMPLE_ROWS) {
            let cells: Vec<String> = SAMPLE_COLUMNS
                .iter()
                .map(|f| sample_cell(record.get(*f)))
                .collect();
            md.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
    }
    md.push('\n');

    let complete = table.count_complete();
    let with_function = table.count_filled(RecordField::Function);
    let with_location = table.count_filled(RecordField::Location);

    md.push_str("## Data Quality\n");
    md.push_str(&format!(
        "- Complete records: {} / {} ({:.1}%)\n",
        complete,
        total,
        percent(complete, total)
    ));
    md.push_str(&format!(
        "- Records with function data: {} / {} ({:.1}%)\n",
        with_function,
        total,
        percent(with_function, total)
    ));
    md.push_str(&format!(
        "- Records with location data: {} / {} ({:.1}%)\n\n",
        with_location,
        total,
        percent(with_location, total)
    ));

    md.push_str("## Files Generated\n");
    if files.is_empty() {
        md.push_str("_None._\n");
    }
    for file in files {
        md.push_str(&format!("- `{}`\n", file.display()));
    }

    md
}

/// Render and write the report, returning its path
pub fn write_report(
    output_dir: &Path,
    category: Category,
    table: &EntityTable,
    files: &[PathBuf],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = report_path(output_dir, category);
    std::fs::write(&path, render_report(category, table, files, Local::now()))?;
    Ok(path)
}
