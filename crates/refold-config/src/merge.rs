//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::path::PathBuf;

use crate::{
    Config, FoldingSettings,
    parse::{RawConfig, RawFoldingSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Every `[folding]` key is merged independently: the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Config {
        folding: merge_folding_settings(configs),
        config_root,
        sources: configs.iter().map(|c| c.path.clone()).collect(),
    }
}

/// Merges folding settings, taking first defined value for each field.
fn merge_folding_settings(configs: &[ParsedConfig]) -> FoldingSettings {
    let mut result = FoldingSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref folding) = parsed.config.folding {
            apply_raw_folding(&mut result, folding);
        }
    }

    result
}

/// Applies raw folding settings to result, overwriting any present values.
fn apply_raw_folding(result: &mut FoldingSettings, raw: &RawFoldingSettings) {
    if let Some(ref v) = raw.field {
        result.field = Some(v.clone());
    }
    if let Some(ref v) = raw.child_field {
        result.child_field = Some(v.clone());
    }
    if let Some(ref v) = raw.parent_field {
        result.parent_field = Some(v.clone());
    }
    if let Some(v) = raw.range {
        result.range = v;
    }
    if let Some(ref v) = raw.range_field {
        result.range_field = Some(v.clone());
    }
    if let Some(ref v) = raw.expand_expression {
        result.expand_expression = Some(v.clone());
    }
    if let Some(v) = raw.maximum_expanded_results {
        result.maximum_expanded_results = Some(v);
    }
    if let Some(v) = raw.enable_expand {
        result.enable_expand = v;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    fn parsed(path: &str, contents: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(contents, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]);
        assert_eq!(result.folding, FoldingSettings::default());
        assert!(result.config_root.is_none());
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_merge_single_config() {
        let result = merge_configs(&[parsed(
            "/work/project/.refold.toml",
            r#"
[folding]
field = "@thread"
range = 5
"#,
        )]);

        assert_eq!(result.folding.field.as_deref(), Some("@thread"));
        assert_eq!(result.folding.range, 5);
        assert!(result.folding.enable_expand);
        assert_eq!(
            result.config_root.as_deref(),
            Some(Path::new("/work/project"))
        );
        assert_eq!(
            result.sources,
            vec![PathBuf::from("/work/project/.refold.toml")]
        );
    }

    #[test]
    fn test_merge_first_defined_wins() {
        let local = parsed(
            "/work/project/.refold.toml",
            r#"
[folding]
field = "@conversation"
maximum_expanded_results = 10
"#,
        );
        let parent = parsed(
            "/work/.refold.toml",
            r#"
[folding]
field = "@thread"
parent_field = "@parent"
maximum_expanded_results = 50
enable_expand = false
"#,
        );

        let result = merge_configs(&[local, parent]);

        assert_eq!(result.folding.field.as_deref(), Some("@conversation"));
        assert_eq!(result.folding.parent_field.as_deref(), Some("@parent"));
        assert_eq!(result.folding.maximum_expanded_results, Some(10));
        assert!(!result.folding.enable_expand);
        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.config_root.as_deref(), Some(Path::new("/work/project")));
    }

    #[test]
    fn test_merge_config_without_folding_section() {
        let result = merge_configs(&[
            parsed("/a/.refold.toml", "root = true\n"),
            parsed("/.refold.toml", "[folding]\nrange = 8\n"),
        ]);
        assert!(result.folding.field.is_none());
        assert_eq!(result.folding.range, 8);
    }
}
