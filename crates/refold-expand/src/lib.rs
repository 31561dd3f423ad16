//! Expansion of folded search results.
//!
//! A folded top result often reports more related records than the primary
//! query returned. This crate attaches a "more results" capability to such
//! results. Invoking it sends a follow-up query for the rest of the group
//! through a [`SearchEndpoint`] and folds the response back into the same forest.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use refold_config::FoldingOptions;
//! # use refold_expand::{Folding, SearchEndpoint};
//! # use refold_query::QueryDescriptor;
//! # async fn run<E: SearchEndpoint>(endpoint: Arc<E>) -> Result<(), Box<dyn std::error::Error>> {
//! let folding = Folding::new(FoldingOptions::new("@foldingcollection")?, Arc::clone(&endpoint));
//!
//! let mut query = QueryDescriptor::with_keywords("quarterly report");
//! folding.apply_to_query(&mut query);
//! let response = endpoint.search(&query).await?;
//!
//! for mut folded in folding.process_results(&query, response) {
//!     if let Some(more) = folded.more_results() {
//!         more.fetch().await?;
//!     }
//!     println!("{} records", folded.result().folded_len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod endpoint;
mod folding;
mod query;

pub use endpoint::SearchEndpoint;
pub use folding::{ExpansionOutcome, FoldedResult, Folding, MoreResults};
pub use query::{build_expansion_query, decorate_primary_query};
