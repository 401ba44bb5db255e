use crate::error::ExportError;
use crate::export::sheet_name::SheetNamer;
use crate::model::{IssueTable, COLUMNS};
use rust_xlsxwriter::{Format, Workbook};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, warn};

/// Longest text Excel accepts in a single cell.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Writes one worksheet per model, each with the issue header and its rows.
///
/// The workbook is assembled in memory and saved in one step, so a failure
/// never leaves a partial file behind.
pub fn export_xlsx<P: AsRef<Path>>(table: &IssueTable, path: P) -> Result<(), ExportError> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

/// Builds the workbook for `table` without touching the filesystem.
pub fn build_workbook(table: &IssueTable) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let mut namer = SheetNamer::default();

    for (model_name, rows) in &table.sheets {
        let sheet_name = namer.assign(model_name);
        debug!(model = %model_name, sheet = %sheet_name, rows = rows.len(), "writing sheet");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;

        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let row_num = (index + 1) as u32;
            for (col, value) in row.cells().into_iter().enumerate() {
                let text = fit_cell(value, &sheet_name, row_num);
                worksheet.write_string(row_num, col as u16, &*text)?;
            }
        }

        worksheet.set_freeze_panes(1, 0)?;
        worksheet.autofit();
    }

    Ok(workbook)
}

fn fit_cell<'a>(value: &'a str, sheet: &str, row: u32) -> Cow<'a, str> {
    if value.chars().count() <= MAX_CELL_CHARS {
        return Cow::Borrowed(value);
    }
    warn!(sheet, row, "cell text exceeds {MAX_CELL_CHARS} characters, truncating");
    Cow::Owned(value.chars().take(MAX_CELL_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_cells_are_borrowed() {
        assert!(matches!(fit_cell("abc", "S", 1), Cow::Borrowed("abc")));
    }

    #[test]
    fn oversized_cells_are_truncated() {
        let long = "x".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(fit_cell(&long, "S", 1).chars().count(), MAX_CELL_CHARS);
    }

    #[test]
    fn empty_table_builds() {
        let mut workbook = build_workbook(&IssueTable::default()).unwrap();
        assert!(workbook.save_to_buffer().is_ok());
    }
}
