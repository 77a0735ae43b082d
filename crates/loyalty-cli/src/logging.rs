use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Skipped records are `warn` events in the client and fatal failures are
// `error` events in the binary; both must show without RUST_LOG.
const DEFAULT_FILTER: &str = "warn";

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Routes diagnostics to stderr so stdout and the result file stay clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
