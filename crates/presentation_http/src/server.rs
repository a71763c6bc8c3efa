//! Server loop with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    sync::Arc,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain open connections for at
/// most `drain_timeout`.
///
/// Connections still open when the timeout expires are dropped.
///
/// # Errors
///
/// Returns an error if the underlying server fails.
pub async fn serve_with_drain_timeout<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let signal = {
        let draining = Arc::clone(&draining);
        async move {
            shutdown.await;
            info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);
            draining.notify_one();
        }
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();
    let mut server = std::pin::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = draining.notified() => {},
    }

    if let Ok(result) = tokio::time::timeout(drain_timeout, server).await {
        result
    } else {
        warn!(
            timeout = ?drain_timeout,
            "Shutdown timeout elapsed, dropping open connections"
        );
        Ok(())
    }
}
