//! Clap argument definitions for the `refold` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "refold")]
#[command(about = "Fold search results into attachment and thread forests")]
pub struct Cli {
    /// Use this config file instead of discovering `.refold.toml` files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Shared flags selecting a top result and the primary query it came from.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Result-set JSON file (`-` for stdin)
    pub file: String,

    /// Keywords of the primary query
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,

    /// Index of the top result to expand
    #[arg(long = "result", default_value = "0", value_name = "N")]
    pub result: usize,
}

/// Arguments for `refold fold`.
#[derive(Args, Debug, Clone)]
pub struct FoldCommand {
    /// Result-set JSON file (`-` for stdin)
    pub file: String,

    /// Fold the top-level results against each other instead of per top result
    #[arg(long)]
    pub flat: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `refold expand-query`.
#[derive(Args, Debug, Clone)]
pub struct ExpandQueryCommand {
    #[command(flatten)]
    /// Selected top result.
    pub target: TargetArgs,
}

/// Arguments for `refold expand`.
#[derive(Args, Debug, Clone)]
pub struct ExpandCommand {
    #[command(flatten)]
    /// Selected top result.
    pub target: TargetArgs,

    /// Result-set JSON file answering the expansion query
    #[arg(long, value_name = "FILE")]
    pub response: PathBuf,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Supported `refold` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fold every top result of a result set and print the forest
    Fold(FoldCommand),

    /// Print the expansion query for a top result
    #[command(name = "expand-query")]
    ExpandQuery(ExpandQueryCommand),

    /// Expand a top result from a response file and print the merged forest
    #[command(after_help = "\
The response file stands in for the search endpoint: it answers the
expansion query and is merged into the selected top result.

EXAMPLES:
  refold expand results.json --response more.json
  refold expand results.json --response more.json -q 'quarterly report' --result 2")]
    Expand(ExpandCommand),

    /// Validate configuration and show resolved folding options
    Check,

    /// Show effective configuration settings
    Config,
}
