//! Position-simulation engine for the Fleetline vehicle tracker.
//!
//! This crate is the core of the system: a set of immutable route
//! polylines, mutable per-vehicle traversal states, and the algorithm
//! that advances and interpolates those states into geocoordinates.
//! Everything around it (HTTP transport, credential checks) lives in the
//! observer crate; the engine itself exposes exactly one query operation,
//! [`SimulationEngine::snapshot`], which takes no input.
//!
//! # Modules
//!
//! - [`catalog`] -- Read-only table of named routes with fallible lookup.
//! - [`engine`] -- Orchestration: advance every vehicle one tick, then
//!   interpolate and return the snapshot, atomically under a mutex.
//! - [`error`] -- Construction-time configuration errors.
//! - [`interpolate`] -- Pure progress-to-coordinate interpolation.
//! - [`route`] -- Validated polylines (two-point minimum).
//! - [`starting_fleet`] -- Built-in route table and initial vehicles.
//! - [`vehicle`] -- Traversal state and the clamp-and-flip advancement.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod route;
pub mod starting_fleet;
pub mod vehicle;

// Re-export primary types at crate root.
pub use catalog::RouteCatalog;
pub use engine::SimulationEngine;
pub use error::SimError;
pub use route::Route;
pub use starting_fleet::{builtin_catalog, builtin_fleet, create_starting_engine};
pub use vehicle::VehicleState;
