//! Per-vehicle traversal state and the advancement step.
//!
//! A vehicle's motion is a two-state oscillation along its route: it moves
//! forward until progress reaches the segment count, flips to reverse,
//! moves back until progress reaches zero, flips to forward, and so on
//! indefinitely. There is no terminal state.
//!
//! The clamp and the direction flip happen atomically within a single
//! [`VehicleState::advance`] call, and the clamp is applied before any
//! interpolation reads the progress, so the progress value handed to the
//! interpolator is always a valid index into the polyline.

use chrono::{DateTime, Utc};
use fleetline_types::{Direction, GeoPoint, RouteId, VehicleId, VehicleStatus, VehicleView};

use crate::error::SimError;

/// Mutable traversal record for a single vehicle.
///
/// The identifier, route reference, and speed are fixed for the vehicle's
/// lifetime; progress, direction, and the derived position/timestamp are
/// mutated exclusively by the engine's advancement step.
#[derive(Debug, Clone)]
pub struct VehicleState {
    /// The vehicle identifier.
    id: VehicleId,
    /// The route this vehicle travels. Validated against the catalog at
    /// engine construction.
    route_id: RouteId,
    /// Continuous position along the route in segment units, always within
    /// `[0, segment_count]` after every advancement.
    progress: f64,
    /// Current direction of travel.
    direction: Direction,
    /// Strictly positive per-tick speed in segment units.
    speed: f64,
    /// Derived: last interpolated position.
    position: GeoPoint,
    /// Derived: operational status label.
    status: VehicleStatus,
    /// Derived: moment the position was last computed.
    last_update: DateTime<Utc>,
}

impl VehicleState {
    /// Construct a vehicle traversal record.
    ///
    /// The derived position starts at the origin and is computed from the
    /// route geometry when the engine is constructed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonPositiveSpeed`] if `speed` is not strictly
    /// positive and finite. The sign of motion belongs to the direction.
    pub fn new(
        id: impl Into<VehicleId>,
        route_id: impl Into<RouteId>,
        progress: f64,
        direction: Direction,
        speed: f64,
    ) -> Result<Self, SimError> {
        let id = id.into();
        if !(speed.is_finite() && speed > 0.0) {
            return Err(SimError::NonPositiveSpeed { vehicle: id, speed });
        }
        Ok(Self {
            id,
            route_id: route_id.into(),
            progress,
            direction,
            speed,
            position: GeoPoint::default(),
            status: VehicleStatus::InService,
            last_update: Utc::now(),
        })
    }

    /// The vehicle identifier.
    pub const fn id(&self) -> &VehicleId {
        &self.id
    }

    /// The route this vehicle is assigned to.
    pub const fn route_id(&self) -> &RouteId {
        &self.route_id
    }

    /// Current progress in segment units.
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Current direction of travel.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Constant per-tick speed.
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Last derived position.
    pub const fn position(&self) -> GeoPoint {
        self.position
    }

    /// Advance this vehicle by one tick against a route with the given
    /// segment count.
    ///
    /// Progress moves by `speed * signum(direction)`, then the boundary
    /// clamp and direction flip are applied in the same step:
    /// reaching or exceeding `segment_count` clamps to `segment_count` and
    /// flips to reverse; reaching or going below `0` clamps to `0` and
    /// flips to forward.
    pub fn advance(&mut self, segment_count: f64) {
        self.progress += self.speed * self.direction.signum();

        // A boundary is only ever crossed moving towards it (progress is
        // validated into the domain at construction), so flipping the
        // current direction always yields reverse at the top and forward
        // at the bottom.
        if self.progress >= segment_count {
            self.progress = segment_count;
            self.direction = self.direction.flipped();
        } else if self.progress <= 0.0 {
            self.progress = 0.0;
            self.direction = self.direction.flipped();
        }
    }

    /// Store the freshly interpolated position and its computation time.
    pub const fn set_position(&mut self, position: GeoPoint, at: DateTime<Utc>) {
        self.position = position;
        self.last_update = at;
    }

    /// Build the snapshot view of this vehicle.
    pub fn view(&self, route_display_name: &str) -> VehicleView {
        VehicleView {
            id: self.id.clone(),
            route_id: self.route_id.clone(),
            route_display_name: route_display_name.to_owned(),
            latitude: self.position.latitude,
            longitude: self.position.longitude,
            status: self.status,
            progress: self.progress,
            direction: self.direction,
            speed: self.speed,
            last_update: self.last_update,
        }
    }
}
