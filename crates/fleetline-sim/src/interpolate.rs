//! Linear interpolation along a route polyline.
//!
//! Progress is expressed in segment units: the integer part selects a
//! segment, the fractional part is the position within it. A progress of
//! `0.0` is exactly the first point; a progress equal to the segment count
//! (`point_count - 1`) is exactly the last point.
//!
//! The function here is pure: it depends only on its inputs and never
//! mutates anything.

use fleetline_types::GeoPoint;

/// Interpolate a geographic position along `points` at the given progress.
///
/// Progress outside `[0, segment_count]` is clamped into range before the
/// segment index is computed, so the index can never reference a
/// nonexistent point. When the clamped progress lands exactly on the final
/// point, that point is returned directly -- there is no next point to
/// interpolate towards.
///
/// Returns `None` if `points` has fewer than two entries (no segment to
/// interpolate over); callers uphold the two-point minimum at construction.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn position_along(points: &[GeoPoint], progress: f64) -> Option<GeoPoint> {
    let last_index = points.len().checked_sub(1)?;
    if last_index == 0 {
        return None;
    }

    let segment_count = last_index as f64;
    let clamped = progress.clamp(0.0, segment_count);

    // Clamped to [0, segment_count], so the cast is within index range.
    let segment = clamped.floor() as usize;
    if segment >= last_index {
        return points.last().copied();
    }

    let p0 = points.get(segment)?;
    let p1 = points.get(segment.checked_add(1)?)?;
    let fraction = clamped - segment as f64;

    Some(GeoPoint::new(
        p0.latitude + (p1.latitude - p0.latitude) * fraction,
        p0.longitude + (p1.longitude - p0.longitude) * fraction,
    ))
}
