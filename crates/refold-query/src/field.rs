//! Validated field references.
//!
//! Fields are written `@name` in query expressions and configuration, while the
//! raw payload of a result stores the same value under the bare `name` key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FieldNameError;

/// Prefix that marks a field reference in query expressions.
pub const FIELD_PREFIX: char = '@';

/// A field reference such as `@foldingcollection`.
///
/// Construction goes through [`FieldName::parse`], so every value held by this
/// type is a well-formed reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Parses a field reference.
    ///
    /// Leading and trailing whitespace is ignored. The reference must be `@`
    /// followed by one or more ASCII alphanumerics, `_` or `.`.
    pub fn parse(input: &str) -> Result<Self, FieldNameError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(FieldNameError::Empty);
        }

        let Some(bare) = name.strip_prefix(FIELD_PREFIX) else {
            return Err(FieldNameError::MissingPrefix {
                name: name.to_string(),
            });
        };

        if bare.is_empty() {
            return Err(FieldNameError::Empty);
        }

        if let Some((offset, ch)) = bare
            .char_indices()
            .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '.'))
        {
            return Err(FieldNameError::InvalidCharacter {
                name: name.to_string(),
                ch,
                position: offset + FIELD_PREFIX.len_utf8(),
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the reference including the `@` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key under which the field is stored in a raw payload.
    pub fn raw_key(&self) -> &str {
        &self.0[FIELD_PREFIX.len_utf8()..]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FieldName {
    type Error = FieldNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldName> for String {
    fn from(field: FieldName) -> Self {
        field.0
    }
}
