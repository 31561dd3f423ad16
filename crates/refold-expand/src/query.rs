//! Query construction for primary and expansion queries.

use refold_config::FoldingOptions;
use refold_query::{QueryDescriptor, QueryExpr, RangeConstraint};
use refold_result::{FieldError, ResultRecord};
use tracing::debug;

/// Keyword expression that matches the record's own URI.
const DEFAULT_EXPAND_EXPRESSION: &str = "@uri";

/// Asks the endpoint to fold the primary query on the configured fields.
pub fn decorate_primary_query(query: &mut QueryDescriptor, options: &FoldingOptions) {
    query.filter_field = Some(options.field.clone());
    query.filter_field_range = Some(options.range);
    if let Some(field) = &options.child_field {
        query.child_field = Some(field.clone());
    }
    if let Some(field) = &options.parent_field {
        query.parent_field = Some(field.clone());
    }
    for field in options.fields() {
        query.require_field(field);
    }
}

/// Builds the query that fetches the rest of `top`'s group.
///
/// Fails when `top` has no usable value for the folding field. A missing or
/// non-numeric range field only drops the range constraint.
pub fn build_expansion_query(
    base: &QueryDescriptor,
    options: &FoldingOptions,
    top: &ResultRecord,
) -> Result<QueryDescriptor, FieldError> {
    let value = top.raw.filled_value(&options.field)?;

    let mut query = base.clone();
    query.first_result = 0;
    query.filter_field = None;
    query.filter_field_range = None;
    query.child_field = None;
    query.parent_field = None;
    query.number_of_results = options.maximum_expanded_results;
    query.filter_expression = Some(
        QueryExpr::field_equals(options.field.clone(), value.to_query_value()).to_query_string(),
    );
    query.keyword_expression = expansion_keywords(base, options);

    if let Some(range_field) = &options.range_field {
        match top.raw.numeric_value(range_field) {
            Ok(center) => query.range_constraints.push(RangeConstraint::centered(
                range_field.clone(),
                center,
                f64::from(options.range),
            )),
            Err(err) => debug!(
                unique_id = %top.unique_id,
                error = %err,
                "skipping range constraint"
            ),
        }
    }

    Ok(query)
}

/// OR-combines the base keywords with the expand expression.
fn expansion_keywords(base: &QueryDescriptor, options: &FoldingOptions) -> Option<String> {
    let custom = options.expand_expression.as_deref();
    match base.keywords() {
        Some(keywords) => {
            let expr = QueryExpr::or(vec![
                QueryExpr::group(QueryExpr::keywords(keywords)),
                QueryExpr::keywords(custom.unwrap_or(DEFAULT_EXPAND_EXPRESSION)),
            ]);
            Some(expr.to_query_string())
        }
        None => custom.map(String::from),
    }
}
