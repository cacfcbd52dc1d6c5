//! Observer API server for the Fleetline vehicle tracker.
//!
//! This crate provides an Axum HTTP server that exposes the simulation
//! engine's single query operation over REST:
//!
//! - **`GET /api/vehicles/positions`** advances the simulation one tick
//!   and returns every vehicle's interpolated position
//! - **`GET /api/routes`** serves read-only route polylines for drawing
//! - **`GET /`** is a minimal HTML status page
//!
//! # Architecture
//!
//! The core engine has no awareness of HTTP, authentication, or
//! serialization; this crate is the transport layer around it. It verifies
//! a static bearer credential before any `/api` handler runs and
//! serializes the returned snapshot to JSON. Ticks stay request-driven:
//! there is no background ticker and no push stream, so simulated motion
//! is proportional to how often clients poll.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
