//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```
//!
//! or `cargo run -p clicker --features desktop`. Point it at a running `clicker-server` with
//! `CLICKER_SERVER_URL`.

use clicker::{App, ClientConfig};

fn main() {
    dioxus::logger::initialize_default();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid client configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(server = %config.base_url, deadline = ?config.deadline, "launching clicker");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
