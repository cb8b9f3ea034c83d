//! Diagnostic tracing, written to stderr.
//!
//! User-facing prompts and reports go through `prompt::Console`; this is
//! only for `RUST_LOG=record_collector=debug` style troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; `default_filter` applies when it is unset.
/// `main` passes `Config::default_log_filter`, which follows `-v`.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
