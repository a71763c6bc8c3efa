//! Open Weather Map API server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::ForecastService;
use infrastructure::{AppConfig, ForecastAdapter, init_logging};
use presentation_http::{routes, serve_with_drain_timeout, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Fails on an unknown ENVIRONMENT value
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(&config.telemetry).context("Failed to initialize logging")?;

    info!(
        "🌦️ Open Weather Map API v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.weather.base_url,
        timeout_secs = config.weather.timeout_secs,
        "Configuration loaded"
    );

    let adapter = ForecastAdapter::with_config(config.weather.clone())
        .context("Failed to initialize Open-Meteo client")?;
    let forecast_service = ForecastService::new(Arc::new(adapter));

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let docs_enabled = config.environment.docs_enabled();

    let state = AppState::new(forecast_service, config);
    let app = routes::create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);
    if docs_enabled {
        info!("📚 API docs: http://{}/docs", addr);
    }

    serve_with_drain_timeout(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
