//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod expand;
pub mod expand_query;
pub mod fold;
mod shared;

use std::{path::Path, process::ExitCode};

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
///
/// `fold` needs no configuration; every other command loads it first.
pub fn run(command: Commands, config_path: Option<&Path>) -> ExitCode {
    match command {
        Commands::Fold(cmd) => fold::run(&cmd),
        Commands::ExpandQuery(cmd) => with_context(config_path, |ctx| expand_query::run(ctx, &cmd)),
        Commands::Expand(cmd) => with_context(config_path, |ctx| expand::run(ctx, &cmd)),
        Commands::Check => with_context(config_path, check::run),
        Commands::Config => with_context(config_path, config::run),
    }
}

/// Loads the command context and runs `command` with it.
fn with_context(
    config_path: Option<&Path>,
    command: impl FnOnce(&CommandContext) -> ExitCode,
) -> ExitCode {
    match CommandContext::load(config_path) {
        Ok(ctx) => command(&ctx),
        Err(code) => code,
    }
}
