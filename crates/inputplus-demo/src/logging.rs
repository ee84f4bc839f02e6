//! Diagnostics for the demo binary.
//!
//! The library emits `tracing` events for each attempt; this installs the
//! subscriber that prints them. Output goes to stderr so it never mixes
//! with the answer printed on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=inputplus=debug inputplus --limit 3 int --min 1 --max 10
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
