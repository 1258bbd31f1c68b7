//! The real client against the real endpoint, over a socket.

use async_trait::async_trait;
use clicker::{
    ClickController, ClickState, ClickView, ClientConfig, CounterTransport, HttpTransport,
    RequestFailed,
};
use clicker_server::*;
use clicker_types::{ClickStats, GREETING};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

async fn spawn_server(log: Arc<dyn ClickLog>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = router(log, &ServerConfig::default());
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    addr
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(format!("http://{addr}").parse().unwrap())
}

#[tokio::test]
async fn clicks_count_up() {
    let addr = spawn_server(Arc::new(MemoryClickLog::new())).await;
    let transport = HttpTransport::new(config_for(addr));

    let first = transport.increment().await.unwrap();
    let second = transport.increment().await.unwrap();

    assert_eq!(first.message, GREETING);
    assert_eq!(first.click_count, 1);
    assert_eq!(second.click_count, 2);

    let stats = transport.stats().await.unwrap();
    assert_eq!(stats.total_clicks, 2);
}

#[tokio::test]
async fn controller_settles_state_from_the_server() {
    let addr = spawn_server(Arc::new(MemoryClickLog::new())).await;
    let controller = ClickController::http(&config_for(addr));
    let mut state = ClickState::default();

    controller.handle_click(&mut state).await;
    controller.handle_click(&mut state).await;

    let view = ClickView::from_state(&state);
    assert_eq!(view.result_banner.as_deref(), Some(GREETING));
    assert_eq!(view.count_line.as_deref(), Some("Total clicks: 2"));
    assert_eq!(view.error_banner, None);
}

struct BrokenLog;

fn read_only() -> StoreError {
    StoreError::Io {
        path: "clicks.jsonl".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only filesystem"),
    }
}

#[async_trait]
impl ClickLog for BrokenLog {
    async fn record(&self) -> Result<RecordedClick, StoreError> {
        Err(read_only())
    }

    async fn stats(&self) -> Result<ClickStats, StoreError> {
        Err(read_only())
    }
}

#[tokio::test]
async fn server_errors_surface_as_status_failures() {
    let addr = spawn_server(Arc::new(BrokenLog)).await;
    let controller = ClickController::http(&config_for(addr));
    let mut state = ClickState {
        message: "Hello!".to_string(),
        click_count: 5,
        ..Default::default()
    };

    let outcome = controller.handle_click(&mut state).await;

    assert_eq!(outcome, Some(Err(RequestFailed::Status(500))));
    assert_eq!(
        state.error,
        "Failed to connect to server: server responded with status 500"
    );
    assert_eq!(state.message, "Hello!");
    assert_eq!(state.click_count, 5);
    assert!(!state.loading);
}

#[tokio::test]
async fn unreachable_server_is_a_connect_failure() {
    // Grab a free port, then close it so nothing is listening.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let controller = ClickController::http(&config_for(addr));
    let mut state = ClickState::default();

    let outcome = controller.handle_click(&mut state).await;

    assert!(matches!(outcome, Some(Err(RequestFailed::Connect(_)))));
    assert!(state.error.starts_with("Failed to connect to server: "));
    assert!(!state.loading);
    assert_eq!(state.click_count, 0);
}
