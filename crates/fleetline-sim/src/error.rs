//! Error types for the `fleetline-sim` crate.
//!
//! Every variant is a configuration defect detected while constructing the
//! catalog or the engine. The query path has no recoverable errors: once an
//! engine exists, snapshots always succeed.

use fleetline_types::{RouteId, VehicleId};

/// Errors that can occur while building the route catalog or the engine.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A route was defined with fewer than the two points needed to form
    /// a segment.
    #[error("route {route} has {points} point(s); a route needs at least 2")]
    RouteTooShort {
        /// The malformed route.
        route: RouteId,
        /// Number of points it was defined with.
        points: usize,
    },

    /// Two routes in the catalog share an identifier.
    #[error("duplicate route id: {0}")]
    DuplicateRoute(RouteId),

    /// A route id was looked up that does not exist in the catalog.
    #[error("route not found: {0}")]
    RouteNotFound(RouteId),

    /// A vehicle references a route id absent from the catalog.
    #[error("vehicle {vehicle} references unknown route {route}")]
    UnknownRouteReference {
        /// The misconfigured vehicle.
        vehicle: VehicleId,
        /// The dangling route reference.
        route: RouteId,
    },

    /// Two vehicles in the fleet share an identifier.
    #[error("duplicate vehicle id: {0}")]
    DuplicateVehicle(VehicleId),

    /// A vehicle's initial progress is not a finite value inside the
    /// progress domain of its route. Checked when the engine resolves the
    /// route reference; a value that slips through would never be pulled
    /// back into range by the boundary clamp (NaN compares false against
    /// both bounds).
    #[error("vehicle {vehicle} has initial progress {progress}, outside [0, {segment_count}]")]
    ProgressOutOfRange {
        /// The misconfigured vehicle.
        vehicle: VehicleId,
        /// The rejected progress value.
        progress: f64,
        /// The upper bound of the route's progress domain.
        segment_count: f64,
    },

    /// A vehicle was defined with a speed that is not strictly positive
    /// (or not finite). The sign of motion belongs to the direction, never
    /// to the speed.
    #[error("vehicle {vehicle} has non-positive speed {speed}")]
    NonPositiveSpeed {
        /// The misconfigured vehicle.
        vehicle: VehicleId,
        /// The rejected speed value.
        speed: f64,
    },
}
