use crate::{ApiError, AppState};
use axum::{extract::State, Json};
use clicker_types::{ClickStats, Health, HelloResponse, ServiceInfo, GREETING};

pub(crate) async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Clicker API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
    })
}

pub(crate) async fn health() -> Json<Health> {
    Json(Health::healthy())
}

/// Record one click and answer with the new total.
pub(crate) async fn hello(State(state): State<AppState>) -> Result<Json<HelloResponse>, ApiError> {
    let recorded = state.log.record().await?;
    tracing::debug!(id = recorded.entry.id, total = recorded.total, "click recorded");

    Ok(Json(HelloResponse {
        message: GREETING.to_string(),
        click_count: recorded.total,
    }))
}

pub(crate) async fn stats(State(state): State<AppState>) -> Result<Json<ClickStats>, ApiError> {
    Ok(Json(state.log.stats().await?))
}
