//! Implementation of `refold expand-query`.

use std::process::ExitCode;

use refold_expand::{build_expansion_query, decorate_primary_query};
use refold_query::QueryDescriptor;
use refold_result::build_forest;

use super::shared::{ineligibility, read_result_set, take_result};
use crate::cli::{args::ExpandQueryCommand, context::CommandContext, output::print_json};

/// Prints the expansion query for one top result.
pub fn run(ctx: &CommandContext, cmd: &ExpandQueryCommand) -> ExitCode {
    let options = match ctx.folding_options() {
        Ok(options) => options,
        Err(code) => return code,
    };
    let set = match read_result_set(&cmd.target.file) {
        Ok(set) => set,
        Err(code) => return code,
    };
    let top = match take_result(set.results, cmd.target.result) {
        Ok(top) => build_forest(top),
        Err(code) => return code,
    };

    if let Some(reason) = ineligibility(&options, &top) {
        eprintln!("error: {reason}");
        return ExitCode::FAILURE;
    }

    let mut base = QueryDescriptor::with_keywords(cmd.target.query.as_str());
    decorate_primary_query(&mut base, &options);
    match build_expansion_query(&base, &options, &top) {
        Ok(query) => print_json(&query),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
