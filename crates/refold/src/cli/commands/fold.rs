//! Implementation of `refold fold`.

use std::process::ExitCode;

use refold_result::{ResultRecord, build_forest, fold_flat};

use super::shared::read_result_set;
use crate::cli::{
    args::FoldCommand,
    output::{print_json, render_forest, render_roots},
};

/// Folds a result-set file and prints the forest.
pub fn run(cmd: &FoldCommand) -> ExitCode {
    let results = match read_result_set(&cmd.file) {
        Ok(set) => set.results,
        Err(code) => return code,
    };

    if cmd.flat {
        let roots = fold_flat(results);
        if cmd.output.json {
            return print_json(&roots);
        }
        print!("{}", render_roots(&roots));
        return ExitCode::SUCCESS;
    }

    let folded: Vec<ResultRecord> = results.into_iter().map(build_forest).collect();
    if cmd.output.json {
        return print_json(&folded);
    }
    for top in &folded {
        print!("{}", render_forest(top));
    }
    ExitCode::SUCCESS
}
