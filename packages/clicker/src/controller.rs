use crate::{
    ClickState, ClientConfig, CounterTransport, HttpTransport, RequestFailed, ResultOnError,
    StateCell, DEFAULT_DEADLINE,
};
use clicker_types::HelloResponse;
use futures_util::future::{select, Either};
use std::{rc::Rc, time::Duration};

/// Runs clicks: flips the state into loading, calls the transport, and settles the state with
/// whatever came back.
///
/// Cloning is cheap - clones share the same transport.
#[derive(Clone)]
pub struct ClickController {
    transport: Rc<dyn CounterTransport>,
    deadline: Duration,
    on_error: ResultOnError,
}

impl ClickController {
    /// Create a controller over any transport, with the default deadline and error policy.
    pub fn new(transport: impl CounterTransport + 'static) -> Self {
        Self {
            transport: Rc::new(transport),
            deadline: DEFAULT_DEADLINE,
            on_error: ResultOnError::default(),
        }
    }

    /// Create a controller that talks HTTP to the endpoint described by `config`.
    pub fn http(config: &ClientConfig) -> Self {
        Self::new(HttpTransport::new(config.clone()))
            .with_deadline(config.deadline)
            .with_result_on_error(config.on_error)
    }

    pub fn with_deadline(self, deadline: Duration) -> Self {
        Self { deadline, ..self }
    }

    pub fn with_result_on_error(self, on_error: ResultOnError) -> Self {
        Self { on_error, ..self }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Handle one click against `state`.
    ///
    /// Returns `None` if a click was already in flight, in which case nothing is sent and the
    /// state is left alone. Otherwise the returned outcome has already been applied to the state.
    /// Failures never escape as anything but a value.
    pub async fn handle_click(
        &self,
        state: &mut impl StateCell,
    ) -> Option<Result<HelloResponse, RequestFailed>> {
        if !state.update(ClickState::begin) {
            tracing::debug!("click ignored, a request is already in flight");
            return None;
        }

        let outcome = self.increment_before_deadline().await;

        match &outcome {
            Ok(res) => tracing::info!(click_count = res.click_count, "click recorded"),
            Err(err) => tracing::warn!(%err, "click failed"),
        }

        state.update(|s| s.settle(&outcome, self.on_error));
        Some(outcome)
    }

    async fn increment_before_deadline(&self) -> Result<HelloResponse, RequestFailed> {
        let call = self.transport.increment();
        let timer = Box::pin(sleep(self.deadline));

        match select(call, timer).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => Err(RequestFailed::Timeout(format!(
                "no response within {:?}",
                self.deadline
            ))),
        }
    }
}

impl std::fmt::Debug for ClickController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickController")
            .field("deadline", &self.deadline)
            .field("on_error", &self.on_error)
            .finish_non_exhaustive()
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await
}
