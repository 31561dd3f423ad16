//! Implementation of `refold expand`.

use std::{collections::BTreeMap, process::ExitCode, sync::Arc};

use refold_expand::Folding;
use refold_query::QueryDescriptor;
use refold_result::ResultRecord;
use serde::Serialize;
use tokio::runtime::Builder;

use super::shared::{ineligibility, read_result_set, take_result};
use crate::cli::{
    args::ExpandCommand,
    context::CommandContext,
    endpoint::JsonFileEndpoint,
    output::{print_json, render_forest},
};

/// JSON output for `refold expand`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExpansion<'a> {
    /// The merged top result.
    result: &'a ResultRecord,
    /// Records added by the expansion.
    added: usize,
    /// Terms to highlight, from the expansion response.
    terms_to_highlight: &'a BTreeMap<String, Vec<String>>,
    /// Phrases to highlight, from the expansion response.
    phrases_to_highlight: &'a BTreeMap<String, Vec<String>>,
}

/// Expands one top result from a response file and prints the merged forest.
pub fn run(ctx: &CommandContext, cmd: &ExpandCommand) -> ExitCode {
    let options = match ctx.folding_options() {
        Ok(options) => options,
        Err(code) => return code,
    };
    let set = match read_result_set(&cmd.target.file) {
        Ok(set) => set,
        Err(code) => return code,
    };

    let folding = Folding::new(options, Arc::new(JsonFileEndpoint::new(&cmd.response)));
    let mut base = QueryDescriptor::with_keywords(cmd.target.query.as_str());
    folding.apply_to_query(&mut base);
    let mut folded = match take_result(folding.process_results(&base, set), cmd.target.result) {
        Ok(folded) => folded,
        Err(code) => return code,
    };

    let Some(more) = folded.more_results() else {
        let reason = ineligibility(folding.options(), folded.result())
            .unwrap_or_else(|| "result cannot be expanded".to_string());
        eprintln!("error: {reason}");
        return ExitCode::FAILURE;
    };

    let runtime = match Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    let outcome = match runtime.block_on(more.fetch()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: expansion failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.output.json {
        return print_json(&JsonExpansion {
            result: folded.result(),
            added: outcome.added,
            terms_to_highlight: &outcome.terms_to_highlight,
            phrases_to_highlight: &outcome.phrases_to_highlight,
        });
    }

    print!("{}", render_forest(folded.result()));
    println!();
    println!("Added {} records", outcome.added);
    ExitCode::SUCCESS
}
