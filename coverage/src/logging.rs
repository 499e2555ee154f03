//! Development-time tracing for debugging the audit.
//!
//! Tracing output is diagnostics only: it goes to stderr and is filtered by
//! `RUST_LOG`. The audit verdict (missed paths, summary line) is printed
//! separately and is unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=coverage=debug cargo run -- accessed_files.txt vectors/eth2.0-spec-tests
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
