use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A model element referenced by an issue.
///
/// The identifying fields are kept as raw JSON scalars: Revit writes `ElementID`
/// as a number, but nothing in the report format guarantees it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Element {
    #[serde(rename = "ElementID", default)]
    pub element_id: Option<Value>,
    #[serde(rename = "ElementName", default)]
    pub element_name: Option<Value>,
    #[serde(rename = "CategoryName", default)]
    pub category_name: Option<Value>,
}

impl Element {
    #[must_use]
    pub fn id_text(&self) -> String {
        render_scalar(self.element_id.as_ref())
    }

    #[must_use]
    pub fn name_text(&self) -> String {
        render_scalar(self.element_name.as_ref())
    }

    #[must_use]
    pub fn category_text(&self) -> String {
        render_scalar(self.category_name.as_ref())
    }
}

/// Render a JSON scalar as cell text. Missing and `null` become the empty string.
#[must_use]
pub fn render_scalar(value: Option<&Value>) -> String {
    scalar_text(value).unwrap_or_default()
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Accepts any JSON value for a text field: numbers and booleans keep their
/// JSON spelling, `null` is treated as absent.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(scalar_text(value.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn numeric_id_renders_without_quotes() {
        let element: Element =
            serde_json::from_value(json!({"ElementID": 42, "ElementName": "Wall-A"})).unwrap();
        assert_eq!(element.id_text(), "42");
        assert_eq!(element.name_text(), "Wall-A");
        assert_eq!(element.category_text(), "");
    }

    #[test]
    fn null_fields_render_empty() {
        let element: Element =
            serde_json::from_value(json!({"ElementID": null, "CategoryName": true})).unwrap();
        assert_eq!(element.id_text(), "");
        assert_eq!(element.category_text(), "true");
    }

    #[test]
    fn nested_values_render_as_compact_json() {
        assert_eq!(render_scalar(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(render_scalar(None), "");
    }
}
