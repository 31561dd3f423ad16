//! The query-execution seam.

use std::error::Error;

use async_trait::async_trait;
use refold_query::QueryDescriptor;
use refold_result::ResultSet;

/// Executes queries on behalf of the folding subsystem.
///
/// Implementations own the transport and its retry policy; folding only
/// hands over a [`QueryDescriptor`] and consumes the returned [`ResultSet`].
#[async_trait]
pub trait SearchEndpoint: Send + Sync {
    /// Failure reported by the transport, surfaced unchanged to callers of an expansion.
    type Error: Error + Send + Sync + 'static;

    /// Runs `query` and returns its result set.
    async fn search(&self, query: &QueryDescriptor) -> Result<ResultSet, Self::Error>;
}
