use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Resolves on Ctrl+C or SIGTERM and cancels `token`, aborting in-flight store calls.
pub async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("❌ Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("❌ Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Received Ctrl+C"),
        _ = terminate => info!("🛑 Received SIGTERM"),
        _ = token.cancelled() => info!("🛑 Shutdown requested"),
    }

    token.cancel();
}
