use crate::error::ParseError;
use crate::model::Report;
use crate::parser::html::extract_payload;
use std::path::Path;
use tracing::debug;

/// Decodes the JSON payload of an upgrade log.
///
/// Unknown fields are ignored and missing ones take their defaults, so only
/// syntax errors or a non-object document are rejected.
///
/// # Errors
///
/// Returns [`ParseError::MalformedPayload`] with the failing line and column.
pub fn parse_report(json: &str) -> Result<Report, ParseError> {
    let report: Report = serde_json::from_str(json)?;
    Ok(report)
}

/// Reads an upgrade log from disk and decodes its embedded report.
///
/// # Arguments
///
/// * `path` - Path to the HTML upgrade log
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read,
/// [`ParseError::MissingDataBlock`] if it has no `reportsData` script and
/// [`ParseError::MalformedPayload`] if the script does not hold valid JSON.
///
/// # Example
///
/// ```no_run
/// use upgrade_report::parser::parse_report_file;
///
/// let report = parse_report_file("UpgradeLog.html")?;
/// println!("Models: {}", report.models().count());
/// # Ok::<(), upgrade_report::error::ParseError>(())
/// ```
pub fn parse_report_file<P: AsRef<Path>>(path: P) -> Result<Report, ParseError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let payload = extract_payload(&content)?;
    debug!(bytes = payload.len(), "extracted report payload");

    let report = parse_report(&payload)?;
    debug!(models = report.models().count(), "decoded report");
    Ok(report)
}
