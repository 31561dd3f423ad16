//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings that are
//! accepted but have no effect, or that are likely mistakes.

use std::fmt;

use crate::{Config, FoldingSettings};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No folding field is configured, so nothing will be folded.
    NoFoldingField,
    /// An expansion option is set while expansion is disabled.
    ExpandOptionIgnored {
        /// Name of the ignored option.
        option: &'static str,
    },
    /// A range field is set but the range is zero, so the window is empty.
    RangeFieldWithoutRange {
        /// The configured range field.
        field: String,
    },
    /// Only one of `child_field` and `parent_field` is set.
    UnpairedRelationField {
        /// The option that is set.
        present: &'static str,
        /// The option that is missing.
        missing: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFoldingField => {
                write!(f, "no folding field is configured")
            }
            Self::ExpandOptionIgnored { option } => {
                write!(f, "'{option}' has no effect while enable_expand is false")
            }
            Self::RangeFieldWithoutRange { field } => {
                write!(f, "range_field '{field}' is set but range is 0")
            }
            Self::UnpairedRelationField { present, missing } => {
                write!(f, "'{present}' is set without '{missing}'")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A missing folding field
/// - Expansion options set while expansion is disabled
/// - A range field combined with a zero-width range
/// - A child field without a parent field, or the reverse
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let folding = &config.folding;
    let mut warnings = Vec::new();

    if is_blank(folding.field.as_deref()) {
        warnings.push(ConfigWarning::NoFoldingField);
    }

    if !folding.enable_expand {
        warnings.extend(ignored_expand_options(folding));
    }

    if folding.range == 0
        && let Some(field) = folding.range_field.as_deref()
        && !field.trim().is_empty()
    {
        warnings.push(ConfigWarning::RangeFieldWithoutRange {
            field: field.to_string(),
        });
    }

    let has_child = !is_blank(folding.child_field.as_deref());
    let has_parent = !is_blank(folding.parent_field.as_deref());
    if has_child && !has_parent {
        warnings.push(ConfigWarning::UnpairedRelationField {
            present: "child_field",
            missing: "parent_field",
        });
    } else if has_parent && !has_child {
        warnings.push(ConfigWarning::UnpairedRelationField {
            present: "parent_field",
            missing: "child_field",
        });
    }

    warnings
}

/// Lists the expansion options that are set.
fn ignored_expand_options(folding: &FoldingSettings) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    if !is_blank(folding.expand_expression.as_deref()) {
        warnings.push(ConfigWarning::ExpandOptionIgnored {
            option: "expand_expression",
        });
    }
    if folding.maximum_expanded_results.is_some() {
        warnings.push(ConfigWarning::ExpandOptionIgnored {
            option: "maximum_expanded_results",
        });
    }
    if !is_blank(folding.range_field.as_deref()) {
        warnings.push(ConfigWarning::ExpandOptionIgnored {
            option: "range_field",
        });
    }
    warnings
}

/// True when a value is unset or only whitespace.
fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
