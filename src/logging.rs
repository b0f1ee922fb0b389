//! Diagnostic logging to stderr.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `passgen=debug`.
pub const LOG_ENV: &str = "PASSGEN_LOG";

/// Install the global subscriber. `default_directive` applies when `PASSGEN_LOG` is unset.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
