use super::element::{lenient_string, Element};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Worksheet header, in column order.
pub const COLUMNS: [&str; 6] = [
    "RevitFile",
    "IssueType",
    "Message",
    "ElementID",
    "ElementName",
    "CategoryName",
];

/// One reported upgrade problem.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Issue {
    #[serde(rename = "Message", default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(rename = "RelatedElements", default)]
    pub related_elements: Option<Vec<Element>>,
}

impl Issue {
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn related_elements(&self) -> &[Element] {
        self.related_elements.as_deref().unwrap_or_default()
    }
}

/// Issue classification derived from the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueType {
    #[serde(rename = "[Warning]")]
    Warning,
    #[serde(rename = "[Error]")]
    Error,
    #[serde(rename = "[DocumentCorruption]")]
    DocumentCorruption,
    Unknown,
}

impl IssueType {
    /// Tags are checked in priority order; the first one found wins.
    const TAGGED: [IssueType; 3] = [
        IssueType::Warning,
        IssueType::Error,
        IssueType::DocumentCorruption,
    ];

    /// Classify a message by the bracketed tag it carries.
    ///
    /// The resolved bucket the issue was listed under is deliberately ignored:
    /// a `Warnings` entry whose text says `[Error]` is an `[Error]`.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        Self::TAGGED
            .into_iter()
            .find(|kind| message.contains(kind.label()))
            .unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "[Warning]",
            Self::Error => "[Error]",
            Self::DocumentCorruption => "[DocumentCorruption]",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One flattened output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRow {
    #[serde(rename = "RevitFile")]
    pub revit_file: String,
    #[serde(rename = "IssueType")]
    pub issue_type: IssueType,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "ElementID")]
    pub element_ids: String,
    #[serde(rename = "ElementName")]
    pub element_names: String,
    #[serde(rename = "CategoryName")]
    pub category_names: String,
}

impl IssueRow {
    /// Build the row for `issue` reported against `model_name`.
    #[must_use]
    pub fn new(model_name: &str, issue: &Issue) -> Self {
        let elements = issue.related_elements();
        let join = |text: fn(&Element) -> String| {
            elements.iter().map(text).collect::<Vec<_>>().join(", ")
        };

        Self {
            revit_file: model_name.to_string(),
            issue_type: IssueType::classify(issue.message()),
            message: issue.message().to_string(),
            element_ids: join(Element::id_text),
            element_names: join(Element::name_text),
            category_names: join(Element::category_text),
        }
    }

    /// Cell values in [`COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            self.revit_file.as_str(),
            self.issue_type.label(),
            self.message.as_str(),
            self.element_ids.as_str(),
            self.element_names.as_str(),
            self.category_names.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn classify_follows_priority_order() {
        assert_eq!(IssueType::classify("[Warning] wall misaligned"), IssueType::Warning);
        assert_eq!(IssueType::classify("[Error] then [Warning]"), IssueType::Warning);
        assert_eq!(
            IssueType::classify("[DocumentCorruption] and [Error]"),
            IssueType::Error
        );
        assert_eq!(
            IssueType::classify("x [DocumentCorruption]"),
            IssueType::DocumentCorruption
        );
        assert_eq!(IssueType::classify("warning without brackets"), IssueType::Unknown);
        assert_eq!(IssueType::classify(""), IssueType::Unknown);
    }

    #[test]
    fn row_joins_related_elements_in_order() {
        let issue: Issue = serde_json::from_value(json!({
            "Message": "[Error] overlapping",
            "RelatedElements": [
                {"ElementID": 1, "ElementName": "A", "CategoryName": "Walls"},
                {"ElementID": "2", "CategoryName": "Doors"}
            ]
        }))
        .unwrap();

        let row = IssueRow::new("M1", &issue);
        assert_eq!(row.issue_type, IssueType::Error);
        assert_eq!(row.element_ids, "1, 2");
        assert_eq!(row.element_names, "A, ");
        assert_eq!(row.category_names, "Walls, Doors");
    }

    #[test]
    fn row_without_elements_has_empty_columns() {
        let issue: Issue = serde_json::from_value(json!({"RelatedElements": null})).unwrap();
        let row = IssueRow::new("M1", &issue);
        assert_eq!(row.cells(), ["M1", "Unknown", "", "", "", ""]);
    }

    #[test]
    fn issue_type_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&IssueType::DocumentCorruption).unwrap(),
            "\"[DocumentCorruption]\""
        );
        assert_eq!(serde_json::to_string(&IssueType::Unknown).unwrap(), "\"Unknown\"");
    }
}
