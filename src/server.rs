//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, code generator and services, then runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::repositories::EntryStore;
use crate::infrastructure::persistence::MemoryEntryStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state described by `config`.
pub fn build_state(config: &Config) -> AppState {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store: Arc<dyn EntryStore> = Arc::new(MemoryEntryStore::with_clock(clock.clone()));
    let generator: Arc<dyn CodeGenerator> =
        Arc::from(config.code_strategy.build(config.code_length));

    AppState::new(store, generator, clock, config.shorten_settings())
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The rate limiter cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!(strategy = %config.code_strategy, "In-memory store ready");

    let app = app_router(state, config.rate_limit_settings())?;

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
