//! Tracing setup shared by the Cabinet binaries.
//!
//! Logs go to stderr so the MCP stdio transport (and interactive prompts on
//! stdout) stay clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// The filter honors `RUST_LOG`; when unset, `default_directive` applies
/// (e.g. `"info"`). Calling this twice is an error in `tracing-subscriber`,
/// so binaries call it exactly once at startup.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
