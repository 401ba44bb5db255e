use crate::error::ExportError;
use crate::model::IssueTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the grouped rows as pretty-printed JSON, keeping model order.
///
/// Each row is keyed by its worksheet column name, so the JSON mirrors the workbook.
pub fn export_json<P: AsRef<Path>>(table: &IssueTable, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table)?;

    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })
}
