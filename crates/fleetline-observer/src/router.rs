//! Axum router construction for the Observer API.
//!
//! Assembles the status page and the bearer-gated `/api` routes into a
//! single [`Router`] with CORS and HTTP trace middleware.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Observer server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page (unauthenticated)
/// - `GET /api/vehicles/positions` -- advance one tick, return the snapshot
/// - `GET /api/routes` -- read-only route polylines
///
/// Every matched `/api` route passes through the bearer-token middleware
/// first; unmatched paths fall through to the 404 fallback without an
/// auth check. CORS is configured to allow any origin for development;
/// in production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // route_layer so the bearer check runs only on matched /api routes;
    // a request for an unknown path gets the plain 404 fallback.
    let api = Router::new()
        .route("/api/vehicles/positions", get(handlers::positions))
        .route("/api/routes", get(handlers::list_routes))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::require_bearer,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
