//! Integration tests for refold-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge -> validate.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use refold_config::{Config, ConfigError, ConfigWarning, is_global_config};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

/// Loads config from `cwd`, keeping the machine's global config out of the result.
fn load_local(cwd: &Path) -> Result<Config, ConfigError> {
    let files: Vec<PathBuf> = refold_config::discover_config_files(cwd)
        .into_iter()
        .filter(|p| !is_global_config(p))
        .collect();
    Config::load_from_files(&files)
}

#[test]
fn test_load_no_config_returns_default() {
    let env = TestEnv::new();
    let config = load_local(env.path()).unwrap();

    assert!(config.config_root.is_none());
    assert!(config.sources.is_empty());
    assert!(config.folding.field.is_none());
    assert_eq!(config.folding.range, 2);
    assert!(config.folding.enable_expand);
    assert_eq!(config.validate(), vec![ConfigWarning::NoFoldingField]);
}

#[test]
fn test_load_single_config() {
    let env = TestEnv::new();
    env.create_file(
        ".refold.toml",
        r#"
root = true

[folding]
field = "@foldingcollection"
child_field = "@foldingchild"
parent_field = "@foldingparent"
maximum_expanded_results = 42
"#,
    );

    let config = Config::load(env.path()).unwrap();
    let options = config.folding_options().unwrap();

    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert_eq!(options.field.as_str(), "@foldingcollection");
    assert_eq!(
        options.child_field.as_ref().map(|f| f.as_str()),
        Some("@foldingchild")
    );
    assert_eq!(options.maximum_expanded_results, Some(42));
    assert!(config.validate().is_empty());
}

#[test]
fn test_load_merges_nested_configs() {
    let env = TestEnv::new();
    env.create_file(
        ".refold.toml",
        r#"
root = true

[folding]
field = "@thread"
expand_expression = "@source==Mail"
range = 4
"#,
    );
    env.create_file(
        "project/.refold.toml",
        r#"
[folding]
field = "@conversation"
"#,
    );
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();
    let options = config.folding_options().unwrap();

    assert_eq!(options.field.as_str(), "@conversation");
    assert_eq!(options.expand_expression.as_deref(), Some("@source==Mail"));
    assert_eq!(options.range, 4);
    assert_eq!(config.sources.len(), 2);
    assert_eq!(
        config.config_root.as_deref(),
        Some(env.path().join("project").as_path())
    );
}

#[test]
fn test_root_config_stops_discovery() {
    let env = TestEnv::new();
    env.create_file(
        ".refold.toml",
        r#"
[folding]
parent_field = "@parent"
"#,
    );
    env.create_file(
        "project/.refold.toml",
        r#"
root = true

[folding]
field = "@thread"
"#,
    );

    let config = Config::load(&env.path().join("project")).unwrap();

    assert_eq!(config.sources.len(), 1);
    assert!(config.folding.parent_field.is_none());
}

#[test]
fn test_invalid_toml_reports_path() {
    let env = TestEnv::new();
    let path = env.create_file(".refold.toml", "[folding\nfield = 1\n");

    let err = Config::load_from_files(&[path.clone()]).unwrap_err();

    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_invalid_field_fails_on_resolve() {
    let env = TestEnv::new();
    let path = env.create_file(
        ".refold.toml",
        r#"
[folding]
field = "thread"
"#,
    );

    let config = Config::load_from_files(&[path]).unwrap();
    let err = config.folding_options().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidField { option: "field", .. }));
}

#[test]
fn test_disabled_expansion_warns_about_expand_options() {
    let env = TestEnv::new();
    let path = env.create_file(
        ".refold.toml",
        r#"
[folding]
field = "@thread"
enable_expand = false
maximum_expanded_results = 10
"#,
    );

    let config = Config::load_from_files(&[path]).unwrap();

    assert_eq!(
        config.validate(),
        vec![ConfigWarning::ExpandOptionIgnored {
            option: "maximum_expanded_results"
        }]
    );
    assert!(!config.folding_options().unwrap().enable_expand);
}

#[test]
fn test_settings_to_toml_reloads() {
    let env = TestEnv::new();
    let path = env.create_file(
        ".refold.toml",
        r#"
[folding]
field = "@thread"
range_field = "@position"
"#,
    );
    let config = Config::load_from_files(&[path]).unwrap();

    let rendered = config.settings_to_toml().unwrap();
    let copy = env.create_file("copy/.refold.toml", &rendered);
    let reloaded = Config::load_from_files(&[copy]).unwrap();

    assert_eq!(reloaded.folding, config.folding);
}
