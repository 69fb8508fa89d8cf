//! gha-scaleset metrics exporter.
//!
//! Serves the controller gauges on `/metrics` alongside liveness and
//! readiness probes. Config path comes from `GHA_SCALESET_CONFIG`
//! (default `gha-scaleset.yaml`).

use tracing_subscriber::{fmt, EnvFilter};

use gha_scaleset_core::error::{Result, ScaleSetError};
use gha_scaleset_metrics::{app_state::AppState, config, router};

const DEFAULT_CONFIG_PATH: &str = "gha-scaleset.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::var("GHA_SCALESET_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.exporter.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, subsystem = %state.metrics().subsystem(), "gha-scaleset-metrics starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ScaleSetError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| ScaleSetError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, draining");
}
