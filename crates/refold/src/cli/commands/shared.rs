//! Helpers shared by the folding commands.

use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use refold_config::FoldingOptions;
use refold_result::{ResultRecord, ResultSet};

/// Reads a result set from a file, or from stdin when `file` is `-`.
pub fn read_result_set(file: &str) -> Result<ResultSet, ExitCode> {
    let contents = if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(file)
    }
    .map_err(|e| {
        eprintln!("error: failed to read {file}: {e}");
        ExitCode::FAILURE
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        eprintln!("error: failed to parse result set {file}: {e}");
        ExitCode::FAILURE
    })
}

/// Takes the top result at `index` out of `results`.
pub fn take_result<T>(mut results: Vec<T>, index: usize) -> Result<T, ExitCode> {
    if index >= results.len() {
        eprintln!(
            "error: result {index} out of range ({} top results)",
            results.len()
        );
        return Err(ExitCode::FAILURE);
    }
    Ok(results.swap_remove(index))
}

/// Explains why a folded top result cannot be expanded, or returns `None` if it can.
pub fn ineligibility(options: &FoldingOptions, top: &ResultRecord) -> Option<String> {
    if !options.enable_expand {
        return Some("expansion is disabled (enable_expand = false)".to_string());
    }
    if let Err(e) = top.raw.filled_value(&options.field) {
        return Some(format!("result {} cannot be expanded: {e}", top.unique_id));
    }
    if !top.has_unfetched_children() {
        return Some(format!(
            "all {} related records of result {} are already folded",
            top.total_number_of_child_results, top.unique_id
        ));
    }
    None
}
