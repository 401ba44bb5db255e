//! End-to-end conversion of one upgrade log into a workbook.

use crate::error::{ConvertError, ParseError};
use crate::export::export_xlsx;
use crate::model::IssueTable;
use crate::parser::parse_report_file;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appended to the sanitized project name to form the workbook file name.
pub const OUTPUT_SUFFIX: &str = "_UpgradeReport.xlsx";

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: PathBuf,
    pub table: IssueTable,
}

/// Reads `input` and flattens its report into per-model rows.
///
/// A missing project name falls back to the input file's base name.
pub fn load_table<P: AsRef<Path>>(input: P) -> Result<IssueTable, ParseError> {
    let input = input.as_ref();
    let report = parse_report_file(input)?;
    let fallback = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let table = IssueTable::from_report(&report, &fallback);
    debug!(
        project = %table.project_name,
        sheets = table.sheet_count(),
        rows = table.total_rows(),
        "flattened report"
    );
    Ok(table)
}

/// Replace spaces and path separators so the project name is a safe file stem.
#[must_use]
pub fn sanitize_file_stem(name: &str) -> String {
    name.replace([' ', '/', '\\'], "_")
}

/// `<input dir>/<project>_UpgradeReport.xlsx`.
#[must_use]
pub fn default_output_path(input: &Path, project_name: &str) -> PathBuf {
    let file_name = format!("{}{OUTPUT_SUFFIX}", sanitize_file_stem(project_name));
    input
        .parent()
        .map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
}

/// Converts the upgrade log at `input` into a workbook.
///
/// The workbook goes to `output` when given, otherwise next to the input. Nothing is
/// written unless every stage succeeds.
///
/// # Example
///
/// ```no_run
/// use upgrade_report::convert::convert_file;
///
/// let done = convert_file("UpgradeLog.html", None)?;
/// println!("{} sheets in {}", done.table.sheet_count(), done.output.display());
/// # Ok::<(), upgrade_report::error::ConvertError>(())
/// ```
pub fn convert_file<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
) -> Result<Conversion, ConvertError> {
    let input = input.as_ref();
    let table = load_table(input)?;

    let output = output.map_or_else(
        || default_output_path(input, &table.project_name),
        Path::to_path_buf,
    );

    export_xlsx(&table, &output)?;
    Ok(Conversion { output, table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn project_name_is_sanitized_for_file_name() {
        assert_eq!(sanitize_file_stem(r"Tower B/Phase\2"), "Tower_B_Phase_2");
    }

    #[test]
    fn output_lands_next_to_input() {
        let path = default_output_path(Path::new("/data/logs/UpgradeLog.html"), "My Project");
        assert_eq!(path, PathBuf::from("/data/logs/My_Project_UpgradeReport.xlsx"));
    }

    #[test]
    fn bare_file_name_outputs_to_relative_path() {
        let path = default_output_path(Path::new("UpgradeLog.html"), "P");
        assert_eq!(path, PathBuf::from("P_UpgradeReport.xlsx"));
    }
}
