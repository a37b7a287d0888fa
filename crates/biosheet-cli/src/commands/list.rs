//! `biosheet list` command implementation

use crate::error::Result;
use biosheet_common::Category;
use biosheet_ingest::catalog;
use comfy_table::{presets::UTF8_FULL, Table};

/// Table of categories, labels and entity counts
pub fn category_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Key", "Label", "Entities", "Fallback field"]);

    for category in Category::ALL {
        let profile = catalog::profile(category);
        table.add_row(vec![
            category.key().to_string(),
            category.label().to_string(),
            profile.names.len().to_string(),
            profile.fallback.field.header().to_string(),
        ]);
    }
    table
}

/// Print the available categories
pub fn run() -> Result<()> {
    println!("{}", category_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_lists_all() {
        let table = category_table();
        assert_eq!(table.row_iter().count(), Category::ALL.len());

        let rendered = table.to_string();
        assert!(rendered.contains("foreign_amino_acids"));
        assert!(rendered.contains("Endogenous Amino Acids"));
    }
}
