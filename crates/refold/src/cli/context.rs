//! Working directory and configuration for config-aware commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use refold_config::{Config, FoldingOptions};

/// State loaded once before a command runs.
pub struct CommandContext {
    /// Directory the command was started in.
    pub cwd: PathBuf,
    /// Merged configuration; the default when no file was found.
    pub config: Config,
}

impl CommandContext {
    /// Resolves the working directory and loads configuration.
    ///
    /// With `config_path` set, only that file is loaded and discovery is skipped.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = match config_path {
            Some(path) => Config::load_from_files(&[path.to_path_buf()]),
            None => Config::load(&cwd),
        }
        .map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd, config })
    }

    /// Resolves the folding options or exits with the configuration error.
    pub fn folding_options(&self) -> Result<FoldingOptions, ExitCode> {
        self.config.folding_options().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Returns the working directory, printing an error when it is unavailable.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
