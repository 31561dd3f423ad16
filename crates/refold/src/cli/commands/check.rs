//! Implementation of `refold check`.

use std::{path::Path, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use refold_config::{ConfigWarning, FoldingOptions, is_global_config};
use refold_query::FieldName;

use crate::cli::context::CommandContext;

/// Exit codes for `refold check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
    /// Configuration has errors and cannot be used.
    pub const ERROR: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and reports the resolved folding options.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.sources.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Create a .refold.toml with a [folding] section to configure folding.");
        return exit_codes::OK;
    }

    println!("Config files:");
    for path in &config.sources {
        let scope = if is_global_config(path) { " (global)" } else { "" };
        println!("  {}{scope}", display_path(path, &ctx.cwd));
    }
    println!();

    let options = match config.folding_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_codes::ERROR;
        }
    };

    println!("Folding options:");
    println!("{}", options_table(&options));
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();
    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Shows `path` relative to `cwd` when it lies below it.
fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Builds the resolved options table.
fn options_table(options: &FoldingOptions) -> Table {
    let field = |f: Option<&FieldName>| f.map_or_else(|| "-".to_string(), FieldName::to_string);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Option", "Value"]);
    let rows = [
        ("field", options.field.to_string()),
        ("child_field", field(options.child_field.as_ref())),
        ("parent_field", field(options.parent_field.as_ref())),
        ("range", options.range.to_string()),
        ("range_field", field(options.range_field.as_ref())),
        (
            "expand_expression",
            options
                .expand_expression
                .clone()
                .unwrap_or_else(|| "@uri".to_string()),
        ),
        (
            "maximum_expanded_results",
            options
                .maximum_expanded_results
                .map_or_else(|| "server default".to_string(), |n| n.to_string()),
        ),
        ("enable_expand", options.enable_expand.to_string()),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for warning in warnings {
        match warning {
            ConfigWarning::NoFoldingField => {
                hints.push("Set `field` in the [folding] section.");
            }
            ConfigWarning::ExpandOptionIgnored { .. } => {
                hints.push("Set enable_expand = true, or remove the expansion options.");
            }
            ConfigWarning::RangeFieldWithoutRange { .. } => {
                hints.push("Set range to the width of the window around the range field.");
            }
            ConfigWarning::UnpairedRelationField { .. } => {
                hints.push("Attachments need both child_field and parent_field.");
            }
        }
    }

    hints.sort();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("  - {hint}");
        }
    }
}
