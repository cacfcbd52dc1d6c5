//! Built-in route table and initial fleet.
//!
//! Four fixed routes around the Coatzacoalcos city centre, three stops
//! each, all passing through Centro, plus the four vehicles that run them.
//! This is the entire data set the engine is initialized from; routes are
//! never loaded from external sources at runtime and vehicle state is not
//! persisted across restarts.

use fleetline_types::{Direction, GeoPoint};

use crate::catalog::RouteCatalog;
use crate::engine::SimulationEngine;
use crate::error::SimError;
use crate::route::Route;
use crate::vehicle::VehicleState;

/// Build the built-in route catalog.
///
/// # Errors
///
/// Returns [`SimError`] if the hard-coded definitions are invalid, which
/// the tests below rule out.
pub fn builtin_catalog() -> Result<RouteCatalog, SimError> {
    RouteCatalog::new(vec![
        Route::new(
            "hidalgo_chamizal",
            "Col. Hidalgo - Chamizal",
            vec![
                GeoPoint::new(18.0021, -94.5552), // Col. Hidalgo
                GeoPoint::new(18.0099, -94.5513), // Centro
                GeoPoint::new(18.0156, -94.5489), // Chamizal
            ],
        )?,
        Route::new(
            "diaz_ordaz",
            "Ruta Díaz Ordaz",
            vec![
                GeoPoint::new(18.0078, -94.5623), // Díaz Ordaz
                GeoPoint::new(18.0099, -94.5513), // Centro
                GeoPoint::new(18.0134, -94.5467), // Terminal
            ],
        )?,
        Route::new(
            "insurgentes_patria",
            "Ruta Insurgentes - Patria Libre",
            vec![
                GeoPoint::new(17.9945, -94.5534), // Insurgentes
                GeoPoint::new(18.0099, -94.5513), // Centro
                GeoPoint::new(18.0167, -94.5456), // Patria Libre
            ],
        )?,
        Route::new(
            "naranjito_colosio",
            "Ruta Naranjito Colosio",
            vec![
                GeoPoint::new(17.9989, -94.5678), // Naranjito
                GeoPoint::new(18.0099, -94.5513), // Centro
                GeoPoint::new(18.0189, -94.5489), // Colosio
            ],
        )?,
    ])
}

/// Build the initial vehicle set, one vehicle per built-in route.
///
/// # Errors
///
/// Returns [`SimError`] if a hard-coded vehicle definition is invalid.
pub fn builtin_fleet() -> Result<Vec<VehicleState>, SimError> {
    Ok(vec![
        VehicleState::new("1", "hidalgo_chamizal", 0.0, Direction::Forward, 0.1)?,
        VehicleState::new("2", "diaz_ordaz", 0.5, Direction::Forward, 0.08)?,
        VehicleState::new("3", "insurgentes_patria", 0.3, Direction::Reverse, 0.12)?,
        VehicleState::new("4", "naranjito_colosio", 0.7, Direction::Reverse, 0.09)?,
    ])
}

/// Construct a simulation engine over the built-in catalog and fleet.
///
/// # Errors
///
/// Returns [`SimError`] if the built-in definitions fail validation; the
/// process should refuse to start in that case.
pub fn create_starting_engine() -> Result<SimulationEngine, SimError> {
    SimulationEngine::new(builtin_catalog()?, builtin_fleet()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.route_count(), 4);
        for path in catalog.paths() {
            assert!(path.points.len() >= 2);
        }
    }

    #[test]
    fn builtin_fleet_references_resolve() {
        let catalog = builtin_catalog().unwrap();
        for vehicle in builtin_fleet().unwrap() {
            assert!(catalog.lookup(vehicle.route_id()).is_ok());
        }
    }

    #[test]
    fn starting_engine_constructs_and_serves() {
        let engine = create_starting_engine().unwrap();
        assert_eq!(engine.vehicle_count(), 4);
        assert_eq!(engine.route_count(), 4);

        let views = engine.snapshot();
        assert_eq!(views.len(), 4);
        let ids: Vec<&str> = views.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn all_positions_are_near_coatzacoalcos() {
        let engine = create_starting_engine().unwrap();
        for view in engine.snapshot() {
            assert!(view.latitude > 17.9 && view.latitude < 18.1);
            assert!(view.longitude > -94.6 && view.longitude < -94.5);
        }
    }
}
