//! `biosheet fetch` command implementation
//!
//! Collects one category, exports it and optionally writes a report.

use super::{export_table, preview_table, PREVIEW_ROWS};
use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::export::OutputFormat;
use colored::Colorize;

/// Fetch one category
pub async fn run(
    config: &Config,
    entity_type: &str,
    output_format: &str,
    generate_report: bool,
) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let aggregator = Aggregator::from_config(config)?.with_progress(true);
    let label = aggregator.label(entity_type)?;

    println!("Starting data collection for {}...", label.cyan().bold());

    let table = aggregator.fetch(entity_type).await?;
    if table.is_empty() {
        println!("No data collected.");
        return Ok(());
    }

    println!("Collected {} records for {}", table.len(), entity_type);

    let files = export_table(&aggregator, &table, entity_type, format)?;
    for path in &files {
        println!("{} Data saved to {}", "✓".green(), path.display());
    }

    if generate_report {
        let path = aggregator.write_report(entity_type, &table, &files)?;
        println!("{} Report saved to {}", "✓".green(), path.display());
    }

    println!();
    println!("{}", "Data Summary:".cyan().bold());
    println!("{}", preview_table(&table, PREVIEW_ROWS));

    Ok(())
}
