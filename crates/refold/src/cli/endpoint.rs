//! A search endpoint backed by a result-set file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use refold_expand::SearchEndpoint;
use refold_query::QueryDescriptor;
use refold_result::ResultSet;
use thiserror::Error;
use tracing::info;

/// Failure to answer a query from the response file.
#[derive(Debug, Error)]
pub enum ResponseFileError {
    /// The file could not be read.
    #[error("failed to read response file {path}: {source}")]
    Read {
        /// The response file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not a result set.
    #[error("failed to parse response file {path}: {source}")]
    Parse {
        /// The response file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Answers every query with the result set stored in one file.
///
/// The file is read when a query arrives, so a missing or malformed file
/// surfaces as an expansion failure.
pub struct JsonFileEndpoint {
    /// The response file.
    path: PathBuf,
}

impl JsonFileEndpoint {
    /// Creates an endpoint answering from `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl SearchEndpoint for JsonFileEndpoint {
    type Error = ResponseFileError;

    async fn search(&self, query: &QueryDescriptor) -> Result<ResultSet, Self::Error> {
        info!(
            path = %self.path.display(),
            aq = query.filter_expression.as_deref().unwrap_or_default(),
            "answering query from response file"
        );
        let contents = fs::read_to_string(&self.path).map_err(|source| ResponseFileError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ResponseFileError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
