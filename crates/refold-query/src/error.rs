//! Error types for field name validation.

use thiserror::Error;

/// Errors produced when a string is not a valid field reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldNameError {
    /// The field name was empty or only whitespace.
    #[error("field name is empty")]
    Empty,

    /// The field name does not start with `@`.
    #[error("field name '{name}' must start with '@'")]
    MissingPrefix {
        /// The rejected input.
        name: String,
    },

    /// The field name contains a character outside `[A-Za-z0-9_.]`.
    #[error("invalid character {ch:?} at position {position} in field name '{name}'")]
    InvalidCharacter {
        /// The rejected input.
        name: String,
        /// The offending character.
        ch: char,
        /// Byte position of the offending character.
        position: usize,
    },
}
