//! Folding of query responses and the "more results" capability.

use std::{collections::BTreeMap, mem, sync::Arc};

use refold_config::FoldingOptions;
use refold_query::QueryDescriptor;
use refold_result::{ResultRecord, ResultSet, build_forest, flatten_forest};
use tracing::{debug, warn};

use crate::{
    SearchEndpoint,
    query::{build_expansion_query, decorate_primary_query},
};

/// Folds query responses and hands out expansion capabilities.
pub struct Folding<E> {
    /// Validated folding options.
    options: FoldingOptions,
    /// Endpoint expansion queries are sent to.
    endpoint: Arc<E>,
}

impl<E: SearchEndpoint> Folding<E> {
    /// Creates a folding coordinator for `endpoint`.
    pub fn new(options: FoldingOptions, endpoint: Arc<E>) -> Self {
        Self { options, endpoint }
    }

    /// Returns the folding options.
    pub fn options(&self) -> &FoldingOptions {
        &self.options
    }

    /// Configures a primary query so the endpoint folds its results.
    pub fn apply_to_query(&self, query: &mut QueryDescriptor) {
        decorate_primary_query(query, &self.options);
    }

    /// Folds every top result of a primary query response.
    ///
    /// `base` is the primary query; expansion queries are derived from it.
    pub fn process_results(
        &self,
        base: &QueryDescriptor,
        results: ResultSet,
    ) -> Vec<FoldedResult<E>> {
        results
            .results
            .into_iter()
            .map(|top| self.fold(base, top))
            .collect()
    }

    /// Folds a single top result.
    pub fn fold(&self, base: &QueryDescriptor, top: ResultRecord) -> FoldedResult<E> {
        let result = build_forest(top);
        let expansion_query = self.expansion_query_for(base, &result);
        FoldedResult {
            result,
            expansion_query,
            endpoint: Arc::clone(&self.endpoint),
        }
    }

    /// Builds the expansion query for `top`, or `None` if it can never be expanded.
    fn expansion_query_for(
        &self,
        base: &QueryDescriptor,
        top: &ResultRecord,
    ) -> Option<QueryDescriptor> {
        if !self.options.enable_expand {
            return None;
        }
        match build_expansion_query(base, &self.options, top) {
            Ok(query) => Some(query),
            Err(err) => {
                debug!(
                    unique_id = %top.unique_id,
                    error = %err,
                    "result is not eligible for expansion"
                );
                None
            }
        }
    }
}

/// A folded top result.
pub struct FoldedResult<E> {
    /// The top result with its attachments and sibling results.
    result: ResultRecord,
    /// Query fetching the rest of the group, when expansion applies.
    expansion_query: Option<QueryDescriptor>,
    /// Endpoint the expansion query is sent to.
    endpoint: Arc<E>,
}

impl<E: SearchEndpoint> FoldedResult<E> {
    /// Returns the folded top result.
    pub fn result(&self) -> &ResultRecord {
        &self.result
    }

    /// Consumes the wrapper and returns the folded top result.
    pub fn into_result(self) -> ResultRecord {
        self.result
    }

    /// Returns the expansion query, if expansion is enabled and the result has a folding value.
    pub fn expansion_query(&self) -> Option<&QueryDescriptor> {
        self.expansion_query.as_ref()
    }

    /// Returns the "more results" capability.
    ///
    /// `None` when expansion does not apply, or when every related record
    /// reported by the endpoint is already folded here.
    pub fn more_results(&mut self) -> Option<MoreResults<'_, E>> {
        let query = self.expansion_query.as_ref()?;
        if !self.result.has_unfetched_children() {
            return None;
        }
        Some(MoreResults {
            target: &mut self.result,
            query,
            endpoint: self.endpoint.as_ref(),
        })
    }
}

/// A pending expansion of one folded top result.
///
/// Holds the top result mutably, so at most one expansion per result can be
/// in flight.
pub struct MoreResults<'a, E> {
    /// The top result the response is merged into.
    target: &'a mut ResultRecord,
    /// The expansion query.
    query: &'a QueryDescriptor,
    /// Endpoint the query is sent to.
    endpoint: &'a E,
}

impl<E: SearchEndpoint> MoreResults<'_, E> {
    /// Returns the query that will be sent.
    pub fn query(&self) -> &QueryDescriptor {
        self.query
    }

    /// Runs the expansion query and merges the response into the forest.
    ///
    /// On failure the endpoint's error is returned and the forest is left as it was.
    pub async fn fetch(self) -> Result<ExpansionOutcome, E::Error> {
        debug!(
            unique_id = %self.target.unique_id,
            aq = self.query.filter_expression.as_deref().unwrap_or_default(),
            "fetching more results"
        );
        let response = match self.endpoint.search(self.query).await {
            Ok(response) => response,
            Err(err) => {
                warn!(unique_id = %self.target.unique_id, error = %err, "expansion query failed");
                return Err(err);
            }
        };

        let added = merge_response(
            self.target,
            response.results,
            response.total_number_of_child_results,
        );
        Ok(ExpansionOutcome {
            added,
            terms_to_highlight: response.terms_to_highlight,
            phrases_to_highlight: response.phrases_to_highlight,
        })
    }
}

/// What an expansion added to a folded result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionOutcome {
    /// Number of records that were not in the forest before.
    pub added: usize,
    /// Terms to highlight, from the expansion response.
    pub terms_to_highlight: BTreeMap<String, Vec<String>>,
    /// Phrases to highlight, from the expansion response.
    pub phrases_to_highlight: BTreeMap<String, Vec<String>>,
}

/// Appends fetched records to `top`'s group and folds it again.
///
/// Returns how many records the forest grew by.
fn merge_response(
    top: &mut ResultRecord,
    records: Vec<ResultRecord>,
    total: Option<usize>,
) -> usize {
    let before = top.folded_len();
    let mut flat = flatten_forest(top);
    flat.extend(records);
    top.child_results = flat;
    if let Some(total) = total {
        top.total_number_of_child_results = total;
    }
    *top = build_forest(mem::take(top));
    top.folded_len().saturating_sub(before)
}
