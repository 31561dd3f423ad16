//! Command-line interface for refold.
//!
//! Folds search result sets into attachment and thread forests, and previews
//! or runs the follow-up queries that expand a folded result.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }
    commands::run(cli.command, cli.config.as_deref())
}
