use super::element::lenient_string;
use super::issue::Issue;
use indexmap::IndexMap;
use serde::Deserialize;

/// Sheet and row label for models that carry no usable name.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// The decoded `reports` payload of an upgrade log.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Report {
    #[serde(rename = "ProjectName", default, deserialize_with = "lenient_string")]
    pub project_name: Option<String>,
    /// Category key → models, in document order.
    #[serde(rename = "UpgradedModels", default)]
    pub upgraded_models: Option<IndexMap<String, Option<Vec<Model>>>>,
}

impl Report {
    /// Project name, or `fallback` when the report has none.
    #[must_use]
    pub fn project_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.project_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => fallback,
        }
    }

    /// All models across every category key, in document order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.upgraded_models
            .iter()
            .flat_map(|groups| groups.values())
            .flatten()
            .flatten()
    }
}

/// One upgraded Revit file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Model {
    #[serde(rename = "ModelName", default, deserialize_with = "lenient_string")]
    pub model_name: Option<String>,
    #[serde(rename = "Resolved", default)]
    pub resolved: Option<Resolved>,
}

impl Model {
    #[must_use]
    pub fn name(&self) -> &str {
        match self.model_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_MODEL,
        }
    }

    /// Issues from every resolved bucket.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.resolved.iter().flat_map(|resolved| resolved.issues())
    }
}

/// Issues grouped by the bucket Revit reported them under.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resolved {
    #[serde(rename = "Warnings", default)]
    pub warnings: Option<Vec<Issue>>,
    #[serde(rename = "Errors", default)]
    pub errors: Option<Vec<Issue>>,
    #[serde(rename = "DocumentCorruption", default)]
    pub document_corruption: Option<Vec<Issue>>,
}

impl Resolved {
    /// Warnings, then errors, then document corruption.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        [&self.warnings, &self.errors, &self.document_corruption]
            .into_iter()
            .flatten()
            .flatten()
    }
}
