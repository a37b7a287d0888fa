//! `biosheet fetch-all` command implementation

use super::export_table;
use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::export::OutputFormat;
use biosheet_common::{Category, EntityTable};
use colored::Colorize;
use tracing::error;

/// Fetch every category in order.
///
/// A failure in one category is printed and the next one still runs.
pub async fn run(config: &Config, output_format: &str, generate_report: bool) -> Result<()> {
    let format: OutputFormat = output_format.parse()?;
    let aggregator = Aggregator::from_config(config)?.with_progress(true);

    let mut collected = 0usize;
    for category in Category::ALL {
        let key = category.key();
        println!();
        println!("Fetching {}...", category.label().cyan().bold());

        match collect(&aggregator, key, format, generate_report).await {
            Ok(table) if table.is_empty() => {
                println!("{} No data collected for {}", "✗".red(), key);
            },
            Ok(table) => {
                collected += 1;
                println!("{} Collected {} records for {}", "✓".green(), table.len(), key);
            },
            Err(e) => {
                error!(category = key, error = %e, "Category failed");
                println!("{} Error fetching {}: {}", "✗".red(), key, e);
            },
        }
    }

    println!();
    println!(
        "{} {}/{} categories collected into {}",
        "Done:".cyan().bold(),
        collected,
        Category::ALL.len(),
        aggregator.output_dir().display()
    );
    Ok(())
}

async fn collect(
    aggregator: &Aggregator,
    key: &str,
    format: OutputFormat,
    generate_report: bool,
) -> Result<EntityTable> {
    let table = aggregator.fetch(key).await?;
    if table.is_empty() {
        return Ok(table);
    }

    let files = export_table(aggregator, &table, key, format)?;
    if generate_report {
        aggregator.write_report(key, &table, &files)?;
    }
    Ok(table)
}
