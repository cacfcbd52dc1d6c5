//! Core entity structs shared across the Fleetline workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Direction, VehicleStatus};
use crate::ids::{RouteId, VehicleId};

/// A geographic coordinate (WGS84 latitude/longitude in decimal degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GeoPoint {
    /// Latitude in decimal degrees (positive north).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive east).
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from a latitude/longitude pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Read-only route metadata served to the dashboard so it can draw the
/// path a vehicle travels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoutePath {
    /// The route identifier.
    pub id: RouteId,
    /// Human-readable route name.
    pub display_name: String,
    /// Ordered polyline of at least two geographic points.
    pub points: Vec<GeoPoint>,
}

/// Snapshot view of a single vehicle, as returned by the simulation
/// engine's query operation and serialized by the observer API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VehicleView {
    /// The vehicle identifier.
    pub id: VehicleId,
    /// Identifier of the route the vehicle is assigned to.
    pub route_id: RouteId,
    /// Human-readable name of that route.
    pub route_display_name: String,
    /// Current interpolated latitude.
    pub latitude: f64,
    /// Current interpolated longitude.
    pub longitude: f64,
    /// Operational status label.
    pub status: VehicleStatus,
    /// Continuous position along the route, in segment units.
    pub progress: f64,
    /// Current direction of travel.
    pub direction: Direction,
    /// Constant per-tick speed, in segment units.
    pub speed: f64,
    /// Moment the position was computed.
    pub last_update: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_view_serializes_expected_fields() {
        let view = VehicleView {
            id: VehicleId::from("1"),
            route_id: RouteId::from("hidalgo_chamizal"),
            route_display_name: String::from("Col. Hidalgo - Chamizal"),
            latitude: 18.0021,
            longitude: -94.5552,
            status: VehicleStatus::InService,
            progress: 0.5,
            direction: Direction::Forward,
            speed: 0.1,
            last_update: Utc::now(),
        };

        let value = serde_json::to_value(&view).ok();
        assert!(value.is_some());
        let value = value.unwrap_or_default();
        assert_eq!(value.get("id").and_then(|v| v.as_str()), Some("1"));
        assert_eq!(
            value.get("route_id").and_then(|v| v.as_str()),
            Some("hidalgo_chamizal")
        );
        assert_eq!(
            value.get("direction").and_then(|v| v.as_str()),
            Some("forward")
        );
        assert_eq!(
            value.get("status").and_then(|v| v.as_str()),
            Some("in_service")
        );
        assert!(value.get("last_update").is_some());
    }

    #[test]
    fn geo_point_roundtrip() {
        let point = GeoPoint::new(18.0099, -94.5513);
        let json = serde_json::to_string(&point).ok();
        let restored: Option<GeoPoint> =
            json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(restored, Some(point));
    }
}
