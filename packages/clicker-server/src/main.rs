use anyhow::Context;
use clicker_server::{logging, open_log, router, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::initialize();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let log = open_log(&config)
        .await
        .context("failed to open the click log")?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, "counter endpoint listening");

    axum::serve(listener, router(log, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("counter endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
