//! `biosheet interactive` command implementation
//!
//! Prompt-driven shell over the same operations as `fetch`: pick a
//! category, a format and whether to write a report, then wait for the
//! blocking fetch. Repeats until the user declines or cancels.

use super::{export_table, preview_table, PREVIEW_ROWS};
use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::export::OutputFormat;
use crate::progress::{create_spinner, format_percent};
use biosheet_common::{Category, EntityTable, RecordField};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use inquire::{Confirm, InquireError, Select};
use std::fmt;

#[derive(Debug, Clone, Copy)]
struct CategoryChoice(Category);

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.label(), self.0.key())
    }
}

const FORMAT_CHOICES: [&str; 3] = ["CSV", "Excel", "Both"];

fn format_from_choice(choice: &str) -> OutputFormat {
    match choice {
        "CSV" => OutputFormat::Csv,
        "Excel" => OutputFormat::Xlsx,
        _ => OutputFormat::Both,
    }
}

/// Total / function / location / complete counts for a table
pub fn metrics_table(table: &EntityTable) -> Table {
    let total = table.len();
    let with_function = table.count_filled(RecordField::Function);
    let with_location = table.count_filled(RecordField::Location);
    let complete = table.count_complete();

    let mut metrics = Table::new();
    metrics
        .load_preset(UTF8_FULL)
        .set_header(vec!["Total Records", "With Function", "With Location", "Complete Records"])
        .add_row(vec![
            total.to_string(),
            format!("{} ({})", with_function, format_percent(with_function, total)),
            format!("{} ({})", with_location, format_percent(with_location, total)),
            format!("{} ({})", complete, format_percent(complete, total)),
        ]);
    metrics
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Run the interactive shell
pub async fn run(config: &Config) -> Result<()> {
    let aggregator = Aggregator::from_config(config)?;

    println!("{}", "BioSheet".cyan().bold());
    println!("Biological data collection and spreadsheet generation");
    println!("Files are written to {}", aggregator.output_dir().display());
    println!();

    loop {
        match session(&aggregator).await {
            Ok(()) => {},
            Err(crate::error::CliError::Prompt(e)) if is_cancel(&e) => break,
            Err(e) => eprintln!("Error: {}", e),
        }

        match Confirm::new("Collect another category?")
            .with_default(false)
            .prompt()
        {
            Ok(true) => println!(),
            Ok(false) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

async fn session(aggregator: &Aggregator) -> Result<()> {
    let choices: Vec<CategoryChoice> = Category::ALL.into_iter().map(CategoryChoice).collect();
    let CategoryChoice(category) = Select::new("Entity type:", choices).prompt()?;
    let format = format_from_choice(Select::new("Output format:", FORMAT_CHOICES.to_vec()).prompt()?);
    let generate_report = Confirm::new("Generate summary report?")
        .with_default(false)
        .prompt()?;

    let key = category.key();
    let spinner = create_spinner(&format!("Collecting {} data...", key));
    let table = aggregator.fetch(key).await;
    spinner.finish_and_clear();
    let table = table?;

    if table.is_empty() {
        println!("{} No data collected.", "✗".red());
        return Ok(());
    }
    println!("{} Collected {} records!", "✓".green(), table.len());

    let files = export_table(aggregator, &table, key, format)?;
    for path in &files {
        println!("  Saved {}", path.display());
    }

    if generate_report {
        let path = aggregator.write_report(key, &table, &files)?;
        println!("  Report saved to {}", path.display());
    }

    println!();
    println!("{}", "Collected Data".cyan().bold());
    println!("{}", preview_table(&table, PREVIEW_ROWS));
    println!("{}", metrics_table(&table));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosheet_common::EntityRecord;

    #[test]
    fn test_format_choices_map() {
        assert_eq!(format_from_choice("CSV"), OutputFormat::Csv);
        assert_eq!(format_from_choice("Excel"), OutputFormat::Xlsx);
        assert_eq!(format_from_choice("Both"), OutputFormat::Both);
    }

    #[test]
    fn test_category_choice_display() {
        assert_eq!(
            CategoryChoice(Category::ForeignAminoAcids).to_string(),
            "Foreign Amino Acids (foreign_amino_acids)"
        );
    }

    #[test]
    fn test_metrics_table() {
        let mut record = EntityRecord::new("insulin", "hormone");
        record.function = "Lowers blood glucose".into();
        let table = EntityTable::new(vec![record, EntityRecord::new("glucagon", "hormone")]);

        let rendered = metrics_table(&table).to_string();
        assert!(rendered.contains("1 (50.0%)"));
        assert!(rendered.contains("0 (0.0%)"));
    }
}
