//! Temporary config trees for refold-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree holding `.refold.toml` files.
pub struct ConfigTree {
    /// Owned temporary directory.
    root: TempDir,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the tree's root directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` below the root and returns its path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `.refold.toml` in `rel` with the given contents.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let config = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&config, contents).unwrap();
        config
    }

    /// Writes a `.refold.toml` in `rel` that folds on `field`.
    pub fn folding(&self, rel: &str, field: &str) -> PathBuf {
        self.write(rel, &format!("[folding]\nfield = \"{field}\"\n"))
    }
}
