//!
//! Diagnostic logging of the benchmark history tools.
//!

use tracing_subscriber::EnvFilter;

/// The level used when `RUST_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "warn";

///
/// Returns the level implied by the command-line flags.
///
/// `quiet` takes precedence over `verbose`.
///
pub fn level(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "info",
        (false, false) => DEFAULT_LEVEL,
    }
}

///
/// Installs the global subscriber writing to `stderr`.
///
/// `RUST_LOG` overrides the level implied by the flags.
///
pub fn init(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(quiet, verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("Logger initialization: {error}"))
}
