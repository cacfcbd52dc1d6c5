//! Shared type definitions for the Fleetline vehicle tracker.
//!
//! This crate is the single source of truth for the types used across the
//! Fleetline workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the tracker dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for route and vehicle identifiers
//! - [`enums`] -- Direction of travel and vehicle status
//! - [`structs`] -- Geographic points, route metadata, and the snapshot view

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Direction, VehicleStatus};
pub use ids::{RouteId, VehicleId};
pub use structs::{GeoPoint, RoutePath, VehicleView};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::RouteId::export_all();
        let _ = crate::ids::VehicleId::export_all();
        let _ = crate::enums::Direction::export_all();
        let _ = crate::enums::VehicleStatus::export_all();
        let _ = crate::structs::GeoPoint::export_all();
        let _ = crate::structs::RoutePath::export_all();
        let _ = crate::structs::VehicleView::export_all();
    }
}
