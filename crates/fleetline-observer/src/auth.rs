//! Bearer-credential verification for the `/api` routes.
//!
//! The feed is gated behind a single static token configured at startup.
//! Token issuance, user accounts, and sessions are deliberately not part
//! of this service; a client either presents the configured token or it
//! gets a 401.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::ObserverError;
use crate::state::AppState;

/// Middleware that rejects requests without a valid `Authorization:
/// Bearer <token>` header before they reach any `/api` handler.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ObserverError> {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == state.api_token => Ok(next.run(request).await),
        Some(_) => {
            warn!(path = %request.uri().path(), "rejected request with invalid bearer token");
            Err(ObserverError::Unauthorized(String::from(
                "invalid bearer token",
            )))
        }
        None => Err(ObserverError::Unauthorized(String::from(
            "missing bearer token",
        ))),
    }
}
