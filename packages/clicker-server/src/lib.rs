//! The counter endpoint behind the clicker.
//!
//! ```rust, no_run
//! use clicker_server::{ServerConfig, open_log, router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let router = router(open_log(&config).await?, &config);
//!     let listener = tokio::net::TcpListener::bind(config.addr).await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
pub mod logging;
mod routes;
mod store;

pub use config::*;
pub use error::*;
pub use store::*;

use axum::{
    routing::{get, post},
    Router,
};
use clicker_types::{HEALTH_ROUTE, HELLO_ROUTE, STATS_ROUTE};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<dyn ClickLog>,
}

/// Build the endpoint's router over the given click log.
pub fn router(log: Arc<dyn ClickLog>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(routes::service_info))
        .route(HEALTH_ROUTE, get(routes::health))
        .route(HELLO_ROUTE, post(routes::hello))
        .route(STATS_ROUTE, get(routes::stats))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { log })
}

/// Open the click log the config asks for: a JSON lines file if `data_file` is set, memory otherwise.
pub async fn open_log(config: &ServerConfig) -> Result<Arc<dyn ClickLog>, StoreError> {
    let log: Arc<dyn ClickLog> = match &config.data_file {
        Some(path) => Arc::new(JsonLinesClickLog::open(path).await?),
        None => {
            tracing::warn!("no data file configured, clicks will be lost on restart");
            Arc::new(MemoryClickLog::new())
        }
    };
    Ok(log)
}

// Credentials can't be combined with wildcard methods/headers, so mirror the request instead.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
