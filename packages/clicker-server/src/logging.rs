//! Server tracing.
//!
//! Logs go to stderr through `tracing_subscriber`'s fmt layer. The filter comes from
//! `CLICKER_LOG` (same syntax as `RUST_LOG`), falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::{prelude::*, EnvFilter};

pub const LOG_ENV: &str = "CLICKER_LOG";

pub const DEFAULT_FILTER: &str = "info,clicker_server=debug,tower_http=debug";

/// Install the global subscriber. Call once, at the top of `main`.
pub fn initialize() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
