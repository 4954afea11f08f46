//! Diagnostic tracing for the command-line front end.
//!
//! Reads `RUST_LOG`; defaults to `warn` when unset. Output goes to stderr in the
//! compact format so it never mixes with results on stdout.
//!
//! ```bash
//! RUST_LOG=algovault=debug algovault run gcd "20, 28"
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Call once, at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
