//! Validated route definitions.
//!
//! A [`Route`] is an immutable named polyline of at least two geographic
//! points. The two-point minimum is enforced by the constructor so that
//! every route in a running engine has at least one segment to interpolate
//! over; a shorter definition is a configuration defect and refuses to
//! construct.

use fleetline_types::{GeoPoint, RouteId, RoutePath};

use crate::error::SimError;
use crate::interpolate;

/// A named, ordered polyline of geographic points a vehicle travels.
///
/// Immutable once constructed. Fields are private so the two-point
/// invariant cannot be broken after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// The route identifier.
    id: RouteId,
    /// Human-readable route name.
    display_name: String,
    /// Ordered points; guaranteed to hold at least two entries.
    points: Vec<GeoPoint>,
}

impl Route {
    /// Construct a validated route.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RouteTooShort`] if `points` holds fewer than
    /// two entries.
    pub fn new(
        id: impl Into<RouteId>,
        display_name: impl Into<String>,
        points: Vec<GeoPoint>,
    ) -> Result<Self, SimError> {
        let id = id.into();
        if points.len() < 2 {
            return Err(SimError::RouteTooShort {
                route: id,
                points: points.len(),
            });
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            points,
        })
    }

    /// The route identifier.
    pub const fn id(&self) -> &RouteId {
        &self.id
    }

    /// The human-readable route name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The ordered polyline points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of segments: one fewer than the number of points.
    ///
    /// This is the upper bound of the progress domain `[0, segment_count]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn segment_count(&self) -> f64 {
        self.points.len().saturating_sub(1) as f64
    }

    /// Geographic position at the given progress along this route.
    ///
    /// Progress is clamped into `[0, segment_count]` before indexing, so
    /// this never references a nonexistent point.
    pub fn position_at(&self, progress: f64) -> GeoPoint {
        // The two-point minimum is enforced in `new`, so interpolation
        // always has a segment to work with.
        interpolate::position_along(&self.points, progress).unwrap_or_default()
    }

    /// Read-only metadata view of this route for the observer API.
    pub fn path(&self) -> RoutePath {
        RoutePath {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            points: self.points.clone(),
        }
    }
}
