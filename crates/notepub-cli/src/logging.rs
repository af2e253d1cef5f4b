//! Diagnostic output setup.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up and writes them to stderr, keeping stdout for data.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Returns `false` without
/// touching the installed subscriber when one is already set.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
