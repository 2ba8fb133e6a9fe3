//! Convex query region around a multi-waypoint request.
//!
//! Every consecutive waypoint pair contributes the four corners of its
//! oriented box; the region is the convex hull of all those corners.  The hull
//! is found with an angular sweep: anchor at the lowest-latitude corner, sort
//! the rest by polar angle around it, then walk them in order and drop every
//! point that does not turn left.
//!
//! All hull arithmetic happens in plain (longitude, latitude) degree axes; a
//! convex polygon stays convex under the per-axis scaling to metres, so no
//! projection is needed.

use std::cmp::Ordering;

use tracing::debug;

use rp_core::{GeoError, GeoPoint, GeoResult};

use crate::bbox::oriented_two_point_bounding_box;

/// Region covering a route through `waypoints` in order.
///
/// - 2 waypoints: exactly [`oriented_two_point_bounding_box`].
/// - ≥3 waypoints: convex hull of the oriented-box corners of every
///   consecutive pair, counter-clockwise from the lowest-latitude corner.
///
/// Consecutive duplicate waypoints contribute nothing.
///
/// # Errors
///
/// [`GeoError::TooFewPoints`] for fewer than two waypoints,
/// [`GeoError::NonFinite`] for a NaN or infinite waypoint, and
/// [`GeoError::CoincidentPoints`] if every waypoint is the same.
pub fn convex_hull(waypoints: &[GeoPoint]) -> GeoResult<Vec<GeoPoint>> {
    if waypoints.len() < 2 {
        return Err(GeoError::TooFewPoints { needed: 2, got: waypoints.len() });
    }
    for p in waypoints {
        p.finite()?;
    }
    if let [a, b] = waypoints {
        return Ok(oriented_two_point_bounding_box(*a, *b)?.to_vec());
    }

    let mut corners = Vec::with_capacity(4 * (waypoints.len() - 1));
    for pair in waypoints.windows(2) {
        if pair[0] == pair[1] {
            continue;
        }
        corners.extend(oriented_two_point_bounding_box(pair[0], pair[1])?);
    }
    if corners.is_empty() {
        return Err(GeoError::CoincidentPoints(waypoints[0], waypoints[1]));
    }

    let hull = hull_of(corners);
    debug!(waypoints = waypoints.len(), vertices = hull.len(), "computed query hull");
    Ok(hull)
}

/// Convex hull of an arbitrary point set, counter-clockwise starting at the
/// lowest-latitude point (westmost on ties).  Collinear boundary points are
/// dropped.
pub fn hull_of(mut points: Vec<GeoPoint>) -> Vec<GeoPoint> {
    points.sort_by(|p, q| p.lat.total_cmp(&q.lat).then(p.lon.total_cmp(&q.lon)));
    points.dedup();
    if points.len() < 3 {
        return points;
    }

    let anchor = points.remove(0);
    points.sort_by(|p, q| {
        polar_angle(anchor, *p)
            .total_cmp(&polar_angle(anchor, *q))
            .then_with(|| sq_dist(anchor, *p).total_cmp(&sq_dist(anchor, *q)))
    });

    let mut hull: Vec<GeoPoint> = Vec::with_capacity(points.len() + 1);
    hull.push(anchor);
    for p in points {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

/// `true` if `p` lies inside or on the boundary of the convex polygon
/// `polygon`, given in either winding order.
pub fn polygon_contains(polygon: &[GeoPoint], p: GeoPoint) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    const EPS: f64 = 1e-12;
    let mut sign = Ordering::Equal;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let c = cross(a, b, p);
        if c.abs() <= EPS {
            continue;
        }
        let s = if c > 0.0 { Ordering::Greater } else { Ordering::Less };
        if sign == Ordering::Equal {
            sign = s;
        } else if sign != s {
            return false;
        }
    }
    true
}

// ── Planar helpers (x = lon, y = lat) ─────────────────────────────────────────

/// Z component of `(b - a) × (c - a)`; positive for a left turn.
#[inline]
fn cross(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> f64 {
    (b.lon - a.lon) * (c.lat - a.lat) - (b.lat - a.lat) * (c.lon - a.lon)
}

#[inline]
fn polar_angle(origin: GeoPoint, p: GeoPoint) -> f64 {
    (p.lat - origin.lat).atan2(p.lon - origin.lon)
}

#[inline]
fn sq_dist(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = b.lon - a.lon;
    let dy = b.lat - a.lat;
    dx * dx + dy * dy
}
