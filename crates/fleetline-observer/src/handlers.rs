//! REST API endpoint handlers for the Observer server.
//!
//! All handlers read through the shared [`AppState`]. The positions
//! endpoint is the one externally observable operation of the core: each
//! request advances the simulation one tick and returns the fresh
//! snapshot, so motion speed is proportional to the polling rate.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page (no auth) |
//! | `GET` | `/api/vehicles/positions` | Advance one tick, return all vehicle positions |
//! | `GET` | `/api/routes` | Read-only route polylines for the dashboard |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// Unauthenticated, like the original health route; it exposes counts
/// only, never positions.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let vehicle_count = state.engine.vehicle_count();
    let route_count = state.engine.route_count();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Fleetline Observer</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Fleetline Observer</h1>
    <p class="subtitle">Live vehicle tracker feed</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Vehicles</div>
            <div class="value">{vehicle_count}</div>
        </div>
        <div class="metric">
            <div class="label">Routes</div>
            <div class="value">{route_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints (bearer token required)</h2>
    <ul>
        <li><a href="/api/vehicles/positions">/api/vehicles/positions</a> -- Advance one tick, return all positions</li>
        <li><a href="/api/routes">/api/routes</a> -- Route polylines</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/vehicles/positions -- advance and return the snapshot
// ---------------------------------------------------------------------------

/// Advance every vehicle one tick and return the current positions.
///
/// This is the single query operation of the core. It always succeeds
/// against a constructed engine; there are no recoverable errors on this
/// path.
pub async fn positions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let vehicles = state.engine.snapshot();
    Json(serde_json::json!({ "vehicles": vehicles }))
}

// ---------------------------------------------------------------------------
// GET /api/routes -- read-only route metadata
// ---------------------------------------------------------------------------

/// Return the polyline and display name of every route, in definition
/// order, so the dashboard can draw the paths the vehicles travel.
pub async fn list_routes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let routes = state.engine.route_paths();
    Json(serde_json::json!({ "routes": routes }))
}
