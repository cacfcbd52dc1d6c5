//! Observer HTTP server lifecycle management.
//!
//! [`start_server`] binds the configured address and serves the router
//! until the process receives SIGINT, at which point in-flight snapshot
//! responses are allowed to finish before the listener closes.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::router::build_router;
use crate::state::AppState;

/// Run the Observer HTTP server until shutdown.
///
/// The bind address comes straight from the service configuration as a
/// host string and port; the engine and expected bearer token arrive
/// through `state`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the host/port pair does not form a
/// valid socket address or the listener cannot bind, and
/// [`ServerError::Serve`] on a fatal I/O error while serving.
pub async fn start_server(
    host: &str,
    port: u16,
    state: Arc<AppState>,
) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address {host}:{port}: {e}")))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Observer server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Observer server stopped");
    Ok(())
}

/// Resolve once the process receives SIGINT.
async fn shutdown_signal() {
    if let Err(source) = tokio::signal::ctrl_c().await {
        error!(%source, "failed to listen for the shutdown signal");
    }
}

/// Errors that can occur when starting or running the Observer server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
