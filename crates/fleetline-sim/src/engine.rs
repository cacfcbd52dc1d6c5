//! The simulation engine: catalog + vehicles + the single query operation.
//!
//! [`SimulationEngine::snapshot`] is the only public entry point that
//! mutates vehicle state. Each call advances every vehicle exactly one
//! tick, interpolates its coordinate, stamps status and timestamp, and
//! returns the views in the order the vehicles were defined.
//!
//! # Concurrency
//!
//! The vehicle collection sits behind a [`Mutex`] so the advance-then-read
//! sequence executes as a single atomic unit per call: concurrent callers
//! serialize, and no caller ever observes a partially advanced fleet.
//! Nothing inside the critical section suspends or touches I/O; it is pure
//! in-memory computation, so the lock is held only briefly.
//!
//! # Tick semantics
//!
//! Ticks are request-driven: simulated motion is proportional to how often
//! the snapshot is queried, not to elapsed wall-clock time. This mirrors
//! the behavior the tracker feed was built around; a wall-clock pacing
//! redesign would change what callers observe and is deliberately not done
//! here.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use fleetline_types::{RoutePath, VehicleView};
use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::error::SimError;
use crate::vehicle::VehicleState;

/// Owns the route catalog and the fleet, and serves position snapshots.
#[derive(Debug)]
pub struct SimulationEngine {
    /// Immutable route table.
    catalog: RouteCatalog,
    /// Vehicle states in definition order, guarded for atomic
    /// advance-then-read.
    vehicles: Mutex<Vec<VehicleState>>,
}

impl SimulationEngine {
    /// Construct an engine from a catalog and an initial fleet.
    ///
    /// Every vehicle's route reference is resolved against the catalog and
    /// its initial derived position is computed here, so a misconfigured
    /// fleet refuses to start instead of failing mid-query.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRouteReference`] for a dangling route id,
    /// [`SimError::DuplicateVehicle`] for a repeated vehicle id, and
    /// [`SimError::ProgressOutOfRange`] for an initial progress that is not
    /// a finite value within `[0, segment_count]` of the vehicle's route.
    pub fn new(catalog: RouteCatalog, mut vehicles: Vec<VehicleState>) -> Result<Self, SimError> {
        for (index, vehicle) in vehicles.iter().enumerate() {
            if vehicles
                .iter()
                .take(index)
                .any(|other| other.id() == vehicle.id())
            {
                return Err(SimError::DuplicateVehicle(vehicle.id().clone()));
            }
        }

        let now = Utc::now();
        for vehicle in &mut vehicles {
            let route = catalog.lookup(vehicle.route_id()).map_err(|_lookup| {
                SimError::UnknownRouteReference {
                    vehicle: vehicle.id().clone(),
                    route: vehicle.route_id().clone(),
                }
            })?;

            // The domain bound depends on the route, so the progress check
            // lives here rather than in the vehicle constructor.
            let segment_count = route.segment_count();
            let progress = vehicle.progress();
            if !(progress.is_finite() && progress >= 0.0 && progress <= segment_count) {
                return Err(SimError::ProgressOutOfRange {
                    vehicle: vehicle.id().clone(),
                    progress,
                    segment_count,
                });
            }

            vehicle.set_position(route.position_at(progress), now);
        }

        Ok(Self {
            catalog,
            vehicles: Mutex::new(vehicles),
        })
    }

    /// Advance every vehicle one tick and return the current snapshot.
    ///
    /// The advancement (clamp-and-flip included) runs before interpolation
    /// for each vehicle, and the whole advance-then-read sequence holds the
    /// fleet lock, so two calls can never interleave on the same vehicle.
    /// The returned order is the vehicle definition order on every call.
    pub fn snapshot(&self) -> Vec<VehicleView> {
        // A poisoned lock only means another caller panicked mid-section;
        // the state itself is always left consistent by `advance`.
        let mut vehicles = self
            .vehicles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let now = Utc::now();
        let mut views = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles.iter_mut() {
            let Ok(route) = self.catalog.lookup(vehicle.route_id()) else {
                // Construction resolves every reference and the catalog is
                // immutable, so this branch cannot be taken.
                continue;
            };
            vehicle.advance(route.segment_count());
            vehicle.set_position(route.position_at(vehicle.progress()), now);
            views.push(vehicle.view(route.display_name()));
        }

        debug!(vehicle_count = views.len(), "snapshot served");
        views
    }

    /// Number of vehicles in the fleet.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of routes in the catalog.
    pub fn route_count(&self) -> usize {
        self.catalog.route_count()
    }

    /// Read-only route metadata, in definition order.
    pub fn route_paths(&self) -> Vec<RoutePath> {
        self.catalog.paths()
    }
}
