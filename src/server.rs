//! HTTP server lifecycle: serving a router until a shutdown signal arrives.

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Serves `router` on `listener` until Ctrl+C or `SIGTERM` is received.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns any I/O error raised by the underlying accept loop.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "taskdesk listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("taskdesk stopped");
    Ok(())
}

/// Resolves once the process is asked to stop.
///
/// A handler that cannot be installed never resolves, leaving the other
/// one in charge.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
