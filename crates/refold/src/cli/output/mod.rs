//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use refold_result::ResultRecord;
use serde::Serialize;

/// Marker for an attachment line.
const ATTACHMENT_MARKER: &str = "+ ";

/// Marker for a sibling result line.
const SIBLING_MARKER: &str = "- ";

/// Renders a folded top result as an indented tree.
///
/// ```text
/// 0  Quarterly report (3 of 5 related records)
///   + 1  report.pdf
///   - 4  Re: Quarterly report
///     + 5  notes.txt
/// ```
pub fn render_forest(top: &ResultRecord) -> String {
    let mut out = String::new();
    let mut line = record_line(top);
    let folded = top.folded_len();
    if top.total_number_of_child_results > folded {
        line.push_str(&format!(
            " ({folded} of {} related records)",
            top.total_number_of_child_results
        ));
    }
    push_line(&mut out, 0, "", &line);

    push_attachments(&mut out, 1, &top.attachments);
    for sibling in &top.child_results {
        push_line(&mut out, 1, SIBLING_MARKER, &record_line(sibling));
        push_attachments(&mut out, 2, &sibling.attachments);
    }
    out
}

/// Renders a list of roots without a top result.
pub fn render_roots(roots: &[ResultRecord]) -> String {
    let mut out = String::new();
    for root in roots {
        push_line(&mut out, 0, "", &record_line(root));
        push_attachments(&mut out, 1, &root.attachments);
    }
    out
}

/// Appends `records` and their nested attachments at `depth`.
fn push_attachments(out: &mut String, depth: usize, records: &[ResultRecord]) {
    for record in records {
        push_line(out, depth, ATTACHMENT_MARKER, &record_line(record));
        push_attachments(out, depth + 1, &record.attachments);
    }
}

/// Appends one indented line.
fn push_line(out: &mut String, depth: usize, marker: &str, text: &str) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(marker);
    out.push_str(text);
    out.push('\n');
}

/// Formats a record as `id  title`, or just the id when untitled.
fn record_line(record: &ResultRecord) -> String {
    if record.title.is_empty() {
        record.unique_id.clone()
    } else {
        format!("{}  {}", record.unique_id, record.title)
    }
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}
