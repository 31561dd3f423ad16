//! Configuration system for refold.
//!
//! refold uses TOML configuration files named `.refold.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.refold.toml` files found, then loading `~/.refold.toml` as the global config with lowest
//! precedence.
//!
//! ```toml
//! [folding]
//! field = "@foldingcollection"
//! parent_field = "@foldingparent"
//! child_field = "@foldingchild"
//! maximum_expanded_results = 100
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod options;
mod parse;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use options::{DEFAULT_RANGE, FoldingOptions};
pub use parse::{RawConfig, RawFoldingSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for refold.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.refold.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Folding settings, not yet validated.
    pub folding: FoldingSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Files the configuration was merged from, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.refold.toml` files.
    ///
    /// With no files found this is `Config::default()`.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads and merges the given files.
    ///
    /// `files` are in precedence order, highest first.
    ///
    /// An empty list yields `Config::default()`.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Resolves the folding settings into validated [`FoldingOptions`].
    pub fn folding_options(&self) -> Result<FoldingOptions, ConfigError> {
        FoldingOptions::from_settings(&self.folding)
    }

    /// Lists settings that are legal but probably not what was meant.
    ///
    /// This checks for:
    /// - Expansion options set while expansion is disabled
    /// - A range field combined with a zero-width range
    /// - A child field without a parent field, or the reverse
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the merged settings as a `.refold.toml`.
    ///
    /// The output uses the same layout as a `.refold.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            folding: self.folding.clone(),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Merged `[folding]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FoldingSettings {
    /// Field results are folded on (required to fold).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Field identifying a record to its attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_field: Option<String>,
    /// Field pointing an attachment at its parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_field: Option<String>,
    /// Child results per top result in the primary query, and expansion window width.
    pub range: u32,
    /// Numeric field the expansion window is centered on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_field: Option<String>,
    /// Expression OR-ed with the keywords of the expansion query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_expression: Option<String>,
    /// Maximum number of records requested by an expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_expanded_results: Option<usize>,
    /// Whether top results get a "more results" capability.
    pub enable_expand: bool,
}

impl Default for FoldingSettings {
    fn default() -> Self {
        Self {
            field: None,
            child_field: None,
            parent_field: None,
            range: DEFAULT_RANGE,
            range_field: None,
            expand_expression: None,
            maximum_expanded_results: None,
            enable_expand: true,
        }
    }
}

/// Top-level table layout for `settings_to_toml`.
#[derive(Serialize)]
struct SerializableSettings {
    /// Folding settings.
    folding: FoldingSettings,
}
