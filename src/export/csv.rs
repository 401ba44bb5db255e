use crate::error::ExportError;
use crate::export::sheet_name::SheetNamer;
use crate::model::{IssueTable, COLUMNS};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes `<sheet name>.csv` per model into `dir`, using the workbook's sheet names.
///
/// Returns the paths written, in sheet order.
pub fn export_csv<P: AsRef<Path>>(
    table: &IssueTable,
    dir: P,
) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ExportError::FileCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut namer = SheetNamer::default();
    let mut written = Vec::with_capacity(table.sheet_count());

    for (model_name, rows) in &table.sheets {
        let path = dir.join(format!("{}.csv", namer.assign(model_name)));
        let file = File::create(&path).map_err(|source| ExportError::FileCreate {
            path: path.clone(),
            source,
        })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(COLUMNS)?;
        for row in rows {
            writer.write_record(row.cells())?;
        }

        writer.flush().map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

        written.push(path);
    }

    Ok(written)
}
