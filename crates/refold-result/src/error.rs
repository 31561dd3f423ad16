//! Error types for raw field access.

use thiserror::Error;

/// Errors that can occur when reading a field from a record's raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field is absent or null.
    #[error("field {field} not found")]
    NotFound {
        /// The requested field (with `@` prefix).
        field: String,
    },

    /// The field holds empty or whitespace-only text.
    #[error("field {field} is blank")]
    Blank {
        /// The requested field (with `@` prefix).
        field: String,
    },

    /// The field holds an array or object instead of a scalar.
    #[error("field {field} is not a scalar value")]
    NotScalar {
        /// The requested field (with `@` prefix).
        field: String,
    },

    /// The field holds a value that cannot be read as a number.
    #[error("field {field} is not numeric: {value}")]
    NotNumeric {
        /// The requested field (with `@` prefix).
        field: String,
        /// The value found in the payload.
        value: String,
    },
}
