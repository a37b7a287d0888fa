//! XLSX writer
//!
//! One worksheet named after the category, bold frozen header row. Empty
//! strings are left as blank cells.

use crate::error::Result;
use biosheet_common::{EntityTable, RecordField};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use std::path::Path;

const COLUMN_WIDTH: f64 = 28.0;

pub fn write_xlsx(table: &EntityTable, sheet_name: &str, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, field) in RecordField::ALL.iter().enumerate() {
        let col = col as ColNum;
        worksheet.write_string_with_format(0, col, field.header(), &header)?;
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (index, record) in table.iter().enumerate() {
        let row = (index + 1) as RowNum;
        for (col, cell) in record.cells().iter().enumerate() {
            if !cell.is_empty() {
                worksheet.write_string(row, col as ColNum, *cell)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use biosheet_common::EntityRecord;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    #[test]
    fn test_write_xlsx_sheet_and_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hormones.xlsx");

        let mut record = EntityRecord::new("insulin", "hormone");
        record.related_molecules = "INS".into();
        write_xlsx(&EntityTable::new(vec![record]), "hormones", &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["hormones".to_string()]);

        let range = workbook.worksheet_range("hormones").unwrap();
        assert_eq!(range.get_size(), (2, 9));
        assert_eq!(range.get((0, 0)), Some(&Data::String("Name".into())));
        assert_eq!(range.get((1, 4)), Some(&Data::String("INS".into())));
        assert_eq!(range.get((1, 2)), Some(&Data::Empty));
    }
}
