//! Types that cross the wire between the clicker UI and the counter endpoint.
//!
//! Both sides serialize these as JSON with snake_case field names. The server produces them,
//! the client only ever decodes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The route that records a click and returns the new total.
pub const HELLO_ROUTE: &str = "/api/hello";

/// The route that reports click statistics without recording anything.
pub const STATS_ROUTE: &str = "/api/stats";

/// The liveness route.
pub const HEALTH_ROUTE: &str = "/health";

/// The greeting the endpoint returns with every successful click.
pub const GREETING: &str = "Hello, clicker! 🎉";

/// Body of a successful `POST /api/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,

    /// The cumulative number of clicks recorded by the endpoint, including this one.
    pub click_count: u64,
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickStats {
    pub total_clicks: u64,
    pub latest_click: Option<DateTime<Utc>>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl Health {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Body of `GET /`, describing the running service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub description: String,
}

/// Body of any failed request to the endpoint.
///
/// Clients are not required to decode this - a failure is a failure no matter what the body says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
