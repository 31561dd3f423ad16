//! Typed access to a record's raw field payload.

use std::collections::BTreeMap;

use refold_query::FieldName;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FieldError;

/// The open-ended field payload of a record, keyed by bare field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(BTreeMap<String, Value>);

/// A scalar read from a raw payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A string value.
    Text(&'a str),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
}

impl FieldValue<'_> {
    /// Renders the value for use on the right side of a field expression.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(s) => (*s).to_string(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Returns true for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl RawFields {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field by bare name, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the untyped value stored under a bare name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the payload has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads a field as a scalar.
    pub fn field_value(&self, field: &FieldName) -> Result<FieldValue<'_>, FieldError> {
        match self.0.get(field.raw_key()) {
            None | Some(Value::Null) => Err(FieldError::NotFound {
                field: field.to_string(),
            }),
            Some(Value::String(s)) => Ok(FieldValue::Text(s)),
            Some(Value::Bool(b)) => Ok(FieldValue::Bool(*b)),
            Some(Value::Number(n)) => n.as_f64().map(FieldValue::Number).ok_or_else(|| {
                FieldError::NotNumeric {
                    field: field.to_string(),
                    value: n.to_string(),
                }
            }),
            Some(Value::Array(_) | Value::Object(_)) => Err(FieldError::NotScalar {
                field: field.to_string(),
            }),
        }
    }

    /// Reads a field as a scalar, rejecting blank text.
    pub fn filled_value(&self, field: &FieldName) -> Result<FieldValue<'_>, FieldError> {
        let value = self.field_value(field)?;
        if value.is_blank() {
            return Err(FieldError::Blank {
                field: field.to_string(),
            });
        }
        Ok(value)
    }

    /// Reads a field as a number, accepting numeric strings.
    pub fn numeric_value(&self, field: &FieldName) -> Result<f64, FieldError> {
        match self.field_value(field)? {
            FieldValue::Number(n) => Ok(n),
            FieldValue::Text(s) => s.trim().parse().map_err(|_| FieldError::NotNumeric {
                field: field.to_string(),
                value: s.to_string(),
            }),
            FieldValue::Bool(b) => Err(FieldError::NotNumeric {
                field: field.to_string(),
                value: b.to_string(),
            }),
        }
    }
}

impl FromIterator<(String, Value)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn field(name: &str) -> FieldName {
        FieldName::parse(name).unwrap()
    }

    fn payload() -> RawFields {
        serde_json::from_value(json!({
            "fieldname": "fieldvalue",
            "position": 12,
            "ratio": "0.5",
            "flag": true,
            "empty": null,
            "tags": ["a", "b"],
        }))
        .unwrap()
    }

    #[test]
    fn reads_text_field() {
        let raw = payload();
        assert_eq!(
            raw.field_value(&field("@fieldname")),
            Ok(FieldValue::Text("fieldvalue"))
        );
    }

    #[test]
    fn missing_and_null_are_not_found() {
        let raw = payload();
        assert_eq!(
            raw.field_value(&field("@absent")),
            Err(FieldError::NotFound {
                field: "@absent".into()
            })
        );
        assert!(matches!(
            raw.field_value(&field("@empty")),
            Err(FieldError::NotFound { .. })
        ));
    }

    #[test]
    fn arrays_are_not_scalar() {
        let raw = payload();
        assert!(matches!(
            raw.field_value(&field("@tags")),
            Err(FieldError::NotScalar { .. })
        ));
    }

    #[test]
    fn filled_value_rejects_blank_text() {
        let mut raw = payload();
        raw.insert("blank", " ");
        assert_eq!(
            raw.filled_value(&field("@blank")),
            Err(FieldError::Blank {
                field: "@blank".into()
            })
        );
        assert_eq!(
            raw.filled_value(&field("@position")),
            Ok(FieldValue::Number(12.0))
        );
    }

    #[test]
    fn numeric_value_accepts_numbers_and_numeric_text() {
        let raw = payload();
        assert_eq!(raw.numeric_value(&field("@position")), Ok(12.0));
        assert_eq!(raw.numeric_value(&field("@ratio")), Ok(0.5));
        assert_eq!(
            raw.numeric_value(&field("@fieldname")),
            Err(FieldError::NotNumeric {
                field: "@fieldname".into(),
                value: "fieldvalue".into(),
            })
        );
        assert!(raw.numeric_value(&field("@flag")).is_err());
    }

    #[test]
    fn query_value_rendering() {
        assert_eq!(FieldValue::Text("abc").to_query_value(), "abc");
        assert_eq!(FieldValue::Number(42.0).to_query_value(), "42");
        assert_eq!(FieldValue::Bool(true).to_query_value(), "true");
        assert!(FieldValue::Text("  ").is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
    }
}
