//! Log output for the `refold` binary.

use std::{error::Error, io};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `REFOLD_LOG=refold_result=debug`.
pub const LOG_ENV: &str = "REFOLD_LOG";

/// Installs a stderr subscriber.
///
/// The filter comes from `REFOLD_LOG` when set; otherwise `verbose` picks the
/// level: `warn`, then `info`, then `debug`. Fails if a global subscriber is
/// already installed.
pub fn init(verbose: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
}

/// Maps the `-v` count to a level directive.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
