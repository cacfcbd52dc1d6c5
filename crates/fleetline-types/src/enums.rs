//! Enumeration types for vehicle traversal state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of travel along a route polyline.
///
/// The sign of motion is carried entirely by the direction; speed is always
/// positive. A vehicle oscillates between the two variants, flipping exactly
/// when its progress reaches an end of the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Travelling from the first route point towards the last.
    Forward,
    /// Travelling from the last route point back towards the first.
    Reverse,
}

impl Direction {
    /// Signed unit multiplier applied to speed during advancement:
    /// `+1.0` for forward, `-1.0` for reverse.
    pub const fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    /// The opposite direction.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Operational status of a vehicle.
///
/// Every simulated vehicle is permanently in service; the variant exists so
/// the wire format has a typed status field rather than a free-form string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// The vehicle is running its route.
    #[default]
    InService,
}

impl core::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InService => write!(f, "in service"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signum_carries_sign_of_motion() {
        assert!(Direction::Forward.signum() > 0.0);
        assert!(Direction::Reverse.signum() < 0.0);
    }

    #[test]
    fn flipped_is_involutive() {
        assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
        assert_eq!(Direction::Reverse.flipped(), Direction::Forward);
        assert_eq!(Direction::Forward.flipped().flipped(), Direction::Forward);
    }

    #[test]
    fn direction_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Direction::Forward).ok().as_deref(),
            Some("\"forward\"")
        );
        assert_eq!(
            serde_json::to_string(&Direction::Reverse).ok().as_deref(),
            Some("\"reverse\"")
        );
    }

    #[test]
    fn status_display_label() {
        assert_eq!(VehicleStatus::InService.to_string(), "in service");
        assert_eq!(
            serde_json::to_string(&VehicleStatus::InService).ok().as_deref(),
            Some("\"in_service\"")
        );
    }
}
