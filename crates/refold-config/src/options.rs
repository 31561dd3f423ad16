//! Validated folding options.

use refold_query::FieldName;

use crate::{ConfigError, FoldingSettings};

/// Default width of the child-results window.
pub const DEFAULT_RANGE: u32 = 2;

/// Folding options after validation.
///
/// Holding a `FoldingOptions` guarantees a well-formed folding field; the
/// remaining options keep the defaults of [`FoldingSettings`] unless set.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldingOptions {
    /// Field results are folded on.
    pub field: FieldName,
    /// Field identifying a record to its attachments.
    pub child_field: Option<FieldName>,
    /// Field pointing an attachment at its parent.
    pub parent_field: Option<FieldName>,
    /// Child results per top result in the primary query, and expansion window width.
    pub range: u32,
    /// Numeric field the expansion window is centered on.
    pub range_field: Option<FieldName>,
    /// Expression OR-ed with the keywords of the expansion query (defaults to `@uri`).
    pub expand_expression: Option<String>,
    /// Maximum number of records requested by an expansion; `None` is the endpoint default.
    pub maximum_expanded_results: Option<usize>,
    /// Whether top results get a "more results" capability.
    pub enable_expand: bool,
}

impl FoldingOptions {
    /// Creates options for `field` with every other option at its default.
    pub fn new(field: &str) -> Result<Self, ConfigError> {
        Self::from_settings(&FoldingSettings {
            field: Some(field.to_string()),
            ..FoldingSettings::default()
        })
    }

    /// Validates merged settings.
    ///
    /// Fails when the folding field is missing or blank, when any field
    /// reference is malformed, or when `maximum_expanded_results` is zero.
    pub fn from_settings(settings: &FoldingSettings) -> Result<Self, ConfigError> {
        let field = match settings.field.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingFoldingField),
            Some(field) => parse_field("field", field)?,
        };

        if settings.maximum_expanded_results == Some(0) {
            return Err(ConfigError::InvalidValue {
                option: "maximum_expanded_results",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            field,
            child_field: parse_optional_field("child_field", settings.child_field.as_deref())?,
            parent_field: parse_optional_field("parent_field", settings.parent_field.as_deref())?,
            range: settings.range,
            range_field: parse_optional_field("range_field", settings.range_field.as_deref())?,
            expand_expression: settings
                .expand_expression
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from),
            maximum_expanded_results: settings.maximum_expanded_results,
            enable_expand: settings.enable_expand,
        })
    }

    /// Returns every configured field, folding field first.
    pub fn fields(&self) -> impl Iterator<Item = &FieldName> {
        [
            Some(&self.field),
            self.child_field.as_ref(),
            self.parent_field.as_ref(),
            self.range_field.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Parses a field reference, tagging failures with the option name.
fn parse_field(option: &'static str, value: &str) -> Result<FieldName, ConfigError> {
    FieldName::parse(value).map_err(|source| ConfigError::InvalidField {
        option,
        value: value.to_string(),
        source,
    })
}

/// Parses an optional field reference; blank values count as unset.
fn parse_optional_field(
    option: &'static str,
    value: Option<&str>,
) -> Result<Option<FieldName>, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_field(option, value).map(Some),
    }
}
