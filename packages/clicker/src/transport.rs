//! The outbound side of a click.
//!
//! The controller only knows about [`CounterTransport`]. [`HttpTransport`] is the real thing, tests
//! and other hosts can swap in their own.

use crate::{ClientConfig, RequestFailed};
use async_trait::async_trait;
use clicker_types::{ClickStats, HelloResponse, HELLO_ROUTE, STATS_ROUTE};
use serde::de::DeserializeOwned;

/// Something that can ask the counter endpoint to record a click.
///
/// Futures are not required to be `Send` since the web renderer runs everything on one thread.
#[async_trait(?Send)]
pub trait CounterTransport {
    /// Record one click and return the endpoint's new total.
    async fn increment(&self) -> Result<HelloResponse, RequestFailed>;
}

/// A [`CounterTransport`] that talks JSON over HTTP with its own `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing client, for hosts that already configured one (proxies, cookies, ...).
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Fetch the endpoint's click statistics without recording a click.
    pub async fn stats(&self) -> Result<ClickStats, RequestFailed> {
        let url = self.config.endpoint(STATS_ROUTE)?;
        tracing::debug!(%url, "fetching click stats");
        decode(self.client.get(url).send().await?).await
    }
}

#[async_trait(?Send)]
impl CounterTransport for HttpTransport {
    async fn increment(&self) -> Result<HelloResponse, RequestFailed> {
        let url = self.config.endpoint(HELLO_ROUTE)?;
        tracing::debug!(%url, "sending click");
        decode(self.client.post(url).send().await?).await
    }
}

// The body of a failed response is never inspected, only its status.
async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, RequestFailed> {
    let status = res.status();
    if !status.is_success() {
        return Err(RequestFailed::Status(status.as_u16()));
    }

    Ok(res.json::<T>().await?)
}
