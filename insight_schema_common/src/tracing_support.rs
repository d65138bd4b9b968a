//! Support for logging via `tracing`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set up `tracing` to log to stderr. Verbosity comes from `RUST_LOG`, and
/// defaults to `warn` so that normal output stays readable.
pub fn initialize_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
