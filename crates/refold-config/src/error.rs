//! Error types for refold configuration.

use std::{io, path::PathBuf};

use refold_query::FieldNameError;
use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// The folding field is not configured.
    #[error("folding field is required: set `field` in the [folding] section")]
    MissingFoldingField,

    /// A configured field reference is malformed.
    #[error("invalid {option} '{value}': {source}")]
    InvalidField {
        /// Name of the option holding the field.
        option: &'static str,
        /// The configured value.
        value: String,
        /// Why the value was rejected.
        source: FieldNameError,
    },

    /// A configured value is out of range.
    #[error("invalid {option}: {message}")]
    InvalidValue {
        /// Name of the option.
        option: &'static str,
        /// What is wrong with the value.
        message: String,
    },

    /// Failed to render settings as TOML.
    #[error("failed to serialize settings: {0}")]
    SerializeToml(#[from] ser::Error),
}
