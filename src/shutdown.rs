use tracing::{error, info};

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(msg = "Failed to listen for Ctrl+C", error = %err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!(msg = "Failed to install SIGTERM handler", error = %err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(msg = "Received Ctrl+C, shutting down"),
        _ = terminate => info!(msg = "Received terminate signal, shutting down"),
    }
}
