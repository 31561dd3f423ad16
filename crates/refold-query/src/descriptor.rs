//! The query descriptor submitted to a search endpoint.

use serde::{Deserialize, Serialize};

use crate::FieldName;

/// A query as handed to the query-execution collaborator.
///
/// Field names follow the wire format of the search endpoint (`q`, `aq`,
/// `cq`, `numberOfResults`, ...), so a descriptor serializes directly into a
/// request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryDescriptor {
    /// Basic (free-text) keyword expression.
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub keyword_expression: Option<String>,
    /// Advanced (filter) expression.
    #[serde(rename = "aq", skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    /// Constant expression, cacheable by the endpoint.
    #[serde(rename = "cq", skip_serializing_if = "Option::is_none")]
    pub constant_expression: Option<String>,
    /// Number of results to return; `None` means the endpoint default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_results: Option<usize>,
    /// Zero-based offset of the first result.
    pub first_result: usize,
    /// Field the endpoint folds results on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_field: Option<FieldName>,
    /// Number of folded child results the endpoint returns per top result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_field_range: Option<u32>,
    /// Field identifying a record to its attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_field: Option<FieldName>,
    /// Field pointing an attachment at its parent record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_field: Option<FieldName>,
    /// Fields the endpoint must include in each result's raw payload.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<FieldName>,
    /// Numeric range constraints.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub range_constraints: Vec<RangeConstraint>,
}

impl QueryDescriptor {
    /// Creates a descriptor with only a keyword expression.
    pub fn with_keywords(keywords: impl Into<String>) -> Self {
        Self {
            keyword_expression: Some(keywords.into()),
            ..Self::default()
        }
    }

    /// Returns the keyword expression if it contains anything but whitespace.
    pub fn keywords(&self) -> Option<&str> {
        self.keyword_expression
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Adds a required field unless it is already present.
    pub fn require_field(&mut self, field: &FieldName) {
        if !self.required_fields.contains(field) {
            self.required_fields.push(field.clone());
        }
    }
}

/// An inclusive numeric window on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConstraint {
    /// The constrained field.
    pub field: FieldName,
    /// Lower bound (inclusive).
    pub lower: f64,
    /// Upper bound (inclusive).
    pub upper: f64,
}

impl RangeConstraint {
    /// Creates a window of `width` centered on `center`.
    pub fn centered(field: FieldName, center: f64, width: f64) -> Self {
        let half = width / 2.0;
        Self {
            field,
            lower: center - half,
            upper: center + half,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_wire_names() {
        let mut query = QueryDescriptor::with_keywords("foo bar");
        query.filter_expression = Some("@fieldname=fieldvalue".into());
        query.number_of_results = Some(7);

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "q": "foo bar",
                "aq": "@fieldname=fieldvalue",
                "numberOfResults": 7,
                "firstResult": 0,
            })
        );
    }

    #[test]
    fn deserializes_partial_body() {
        let query: QueryDescriptor =
            serde_json::from_value(json!({ "q": "hello", "filterField": "@thread" })).unwrap();
        assert_eq!(query.keywords(), Some("hello"));
        assert_eq!(query.filter_field.unwrap().as_str(), "@thread");
        assert!(query.number_of_results.is_none());
    }

    #[test]
    fn blank_keywords_are_none() {
        assert_eq!(QueryDescriptor::with_keywords("   ").keywords(), None);
        assert_eq!(QueryDescriptor::default().keywords(), None);
    }

    #[test]
    fn require_field_deduplicates() {
        let field = FieldName::parse("@thread").unwrap();
        let mut query = QueryDescriptor::default();
        query.require_field(&field);
        query.require_field(&field);
        assert_eq!(query.required_fields, vec![field]);
    }

    #[test]
    fn centered_range() {
        let field = FieldName::parse("@position").unwrap();
        let range = RangeConstraint::centered(field, 10.0, 2.0);
        assert_eq!(range.lower, 9.0);
        assert_eq!(range.upper, 11.0);
    }
}
