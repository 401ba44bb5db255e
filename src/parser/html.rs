use crate::error::ParseError;
use scraper::{Html, Selector};

/// The script element holding the report data.
const DATA_BLOCK_SELECTOR: &str = "script#reportsData";

/// Assignment the upgrade log wraps its JSON in.
const ASSIGNMENT_PREFIX: &str = "var reports =";

/// Locates the `reportsData` script in an upgrade log and returns the JSON it assigns.
///
/// The script body looks like `var reports = {...};`. The assignment prefix and any
/// trailing statement terminators are removed; nothing else is touched. When the
/// document contains more than one matching element, the first one wins.
///
/// # Errors
///
/// Returns [`ParseError::MissingDataBlock`] if the document has no such script.
pub fn extract_payload(html: &str) -> Result<String, ParseError> {
    let selector = Selector::parse(DATA_BLOCK_SELECTOR).map_err(|e| ParseError::Selector {
        message: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let script = document
        .select(&selector)
        .next()
        .ok_or(ParseError::MissingDataBlock)?;

    let text: String = script.text().collect();
    Ok(strip_assignment(&text).to_string())
}

fn strip_assignment(script: &str) -> &str {
    let body = script.trim();
    let body = body.strip_prefix(ASSIGNMENT_PREFIX).unwrap_or(body);
    body.trim_end().trim_end_matches(';').trim()
}
