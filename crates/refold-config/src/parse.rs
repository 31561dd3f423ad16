//! Reading single `.refold.toml` files.
//!
//! Each file becomes a `RawConfig` in which every setting is optional, so that
//! unset values can fall through to outer files during merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// One `.refold.toml`, field for field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// Ends discovery at this file.
    pub root: Option<bool>,
    /// Folding settings section.
    pub folding: Option<RawFoldingSettings>,
}

/// Raw `[folding]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawFoldingSettings {
    /// Field results are folded on.
    pub field: Option<String>,
    /// Field identifying a record to its attachments.
    pub child_field: Option<String>,
    /// Field pointing an attachment at its parent.
    pub parent_field: Option<String>,
    /// Child results per top result in the primary query, and expansion window width.
    pub range: Option<u32>,
    /// Numeric field the expansion window is centered on.
    pub range_field: Option<String>,
    /// Expression OR-ed with the keywords of the expansion query.
    pub expand_expression: Option<String>,
    /// Maximum number of records requested by an expansion.
    pub maximum_expanded_results: Option<usize>,
    /// Whether top results get a "more results" capability.
    pub enable_expand: Option<bool>,
}

/// Reads and parses the file at `path`.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses TOML `contents`; `path` only labels errors.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns true if the file at `path` sets `root = true`.
///
/// Unreadable or malformed files count as non-root; loading reports them later.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.folding.is_none());
    }

    #[test]
    fn test_parse_full_folding_section() {
        let toml = r#"
root = true

[folding]
field = "@foldingcollection"
child_field = "@foldingchild"
parent_field = "@foldingparent"
range = 4
range_field = "@position"
expand_expression = "@source==Mail"
maximum_expanded_results = 42
enable_expand = false
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        let folding = config.folding.unwrap();
        assert_eq!(folding.field.as_deref(), Some("@foldingcollection"));
        assert_eq!(folding.child_field.as_deref(), Some("@foldingchild"));
        assert_eq!(folding.parent_field.as_deref(), Some("@foldingparent"));
        assert_eq!(folding.range, Some(4));
        assert_eq!(folding.range_field.as_deref(), Some("@position"));
        assert_eq!(folding.expand_expression.as_deref(), Some("@source==Mail"));
        assert_eq!(folding.maximum_expanded_results, Some(42));
        assert_eq!(folding.enable_expand, Some(false));
    }

    #[test]
    fn test_parse_partial_folding_section() {
        let toml = r#"
[folding]
field = "@thread"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let folding = config.folding.unwrap();
        assert_eq!(folding.field.as_deref(), Some("@thread"));
        assert!(folding.range.is_none());
        assert!(folding.enable_expand.is_none());
    }

    #[test]
    fn test_parse_unknown_key_fails() {
        let toml = r#"
[folding]
feild = "@thread"
"#;
        let err = parse_config_str(toml, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_wrong_type_fails() {
        let toml = r#"
[folding]
range = "wide"
"#;
        let result = parse_config_str(toml, Path::new("test.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_config_file(Path::new("/nonexistent/.refold.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_is_root_config() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root.toml");
        fs::write(&root, "root = true\n").unwrap();
        let plain = tmp.path().join("plain.toml");
        fs::write(&plain, "[folding]\nfield = \"@a\"\n").unwrap();
        let broken = tmp.path().join("broken.toml");
        fs::write(&broken, "root = [").unwrap();

        assert!(is_root_config(&root));
        assert!(!is_root_config(&plain));
        assert!(!is_root_config(&broken));
        assert!(!is_root_config(&tmp.path().join("missing.toml")));
    }
}
