//! Shared application state for the Observer API server.
//!
//! [`AppState`] holds the simulation engine and the bearer credential the
//! API is gated behind. The engine is constructed once in `main` and
//! injected here -- there is no process-wide global simulator.

use std::sync::Arc;

use fleetline_sim::SimulationEngine;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// engine serializes its own advance-then-read sequence internally, so
/// handlers can call it concurrently without further locking here.
#[derive(Clone)]
pub struct AppState {
    /// The simulation engine serving position snapshots.
    pub engine: Arc<SimulationEngine>,
    /// The static bearer token expected on `/api` requests.
    pub api_token: String,
}

impl AppState {
    /// Create application state around an owned engine instance.
    pub fn new(engine: Arc<SimulationEngine>, api_token: impl Into<String>) -> Self {
        Self {
            engine,
            api_token: api_token.into(),
        }
    }
}
