//! Logging setup.
//!
//! Structured logs go to stderr via `tracing`, so the report on stdout stays
//! clean enough to redirect to a file. Default level is `info`; override with
//! `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
