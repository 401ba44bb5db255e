use super::issue::IssueRow;
use super::report::Report;
use indexmap::IndexMap;
use serde::Serialize;

/// Flattened issues of one report, grouped by model name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueTable {
    pub project_name: String,
    /// Model name → rows, in order of first appearance.
    pub sheets: IndexMap<String, Vec<IssueRow>>,
}

impl IssueTable {
    /// Flatten `report`; `fallback_name` stands in for a missing project name.
    #[must_use]
    pub fn from_report(report: &Report, fallback_name: &str) -> Self {
        Self {
            project_name: report.project_name_or(fallback_name).to_string(),
            sheets: flatten(report),
        }
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.sheets.values().map(Vec::len).sum()
    }
}

/// One row per issue occurrence, grouped by model name.
///
/// Rows for a model accumulate across every category key and resolved bucket.
#[must_use]
pub fn flatten(report: &Report) -> IndexMap<String, Vec<IssueRow>> {
    let mut sheets: IndexMap<String, Vec<IssueRow>> = IndexMap::new();

    for model in report.models() {
        let name = model.name();
        for issue in model.issues() {
            sheets
                .entry(name.to_string())
                .or_default()
                .push(IssueRow::new(name, issue));
        }
    }

    sheets
}
