//! CLI support for the `refold` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod endpoint;
pub mod logging;
pub mod output;
