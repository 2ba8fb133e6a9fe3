//! Rectangular query regions.
//!
//! Both boxes are laid out in the local metric plane around their reference
//! point ([`CoordinateUnits`]) and converted back to degrees, so their sides
//! have the requested lengths in metres rather than in degrees.

use rp_core::{CoordinateUnits, GeoError, GeoPoint, GeoResult};

/// Axis-aligned box centred on `center`, `length` metres east-west and
/// `width` metres north-south.
///
/// Returns `[south_west, north_east]`.
pub fn rectangle_bounding_box(center: GeoPoint, length: f64, width: f64) -> GeoResult<[GeoPoint; 2]> {
    for extent in [length, width] {
        if !(extent.is_finite() && extent >= 0.0) {
            return Err(GeoError::InvalidExtent(extent));
        }
    }
    let units = CoordinateUnits::at(center)?;
    let (half_lat, half_lon) = units.metres_to_deg(width / 2.0, length / 2.0);
    Ok([
        center.offset_deg(-half_lat, -half_lon),
        center.offset_deg(half_lat, half_lon),
    ])
}

/// Rectangle oriented along `a → b`, sized for street detours between them.
///
/// With `d = distance(a, b)` the long axis runs from `d` behind `a` to `d`
/// beyond `b`, and the short sides reach `d` to either side of that axis, so
/// the box is `3d × 2d`.
///
/// Corners come back counter-clockwise (in longitude/latitude axes) in a fixed
/// order: behind `a` on the left, behind `a` on the right, beyond `b` on the
/// right, beyond `b` on the left, where "left" is relative to travel from `a`
/// to `b`.
///
/// # Errors
///
/// [`GeoError::NonFinite`] if either point is NaN or infinite,
/// [`GeoError::CoincidentPoints`] if `a == b`, and any error of
/// [`CoordinateUnits::at`] for `a`.
pub fn oriented_two_point_bounding_box(a: GeoPoint, b: GeoPoint) -> GeoResult<[GeoPoint; 4]> {
    let (a, b) = (a.finite()?, b.finite()?);
    let units = CoordinateUnits::at(a)?;
    let (east, north) = units.project(a, b);
    let len = east.hypot(north);
    if a == b || len == 0.0 {
        return Err(GeoError::CoincidentPoints(a, b));
    }

    let d = a.distance_m(b);
    // Unit vector along a → b, and its left-hand normal, in (east, north).
    let (ux, uy) = (east / len, north / len);
    let (lx, ly) = (-uy, ux);

    let corner = |origin: GeoPoint, along: f64, across: f64| {
        let east_m = ux * along + lx * across;
        let north_m = uy * along + ly * across;
        let (d_lat, d_lon) = units.metres_to_deg(north_m, east_m);
        origin.offset_deg(d_lat, d_lon)
    };

    Ok([
        corner(a, -d, d),
        corner(a, -d, -d),
        corner(b, d, -d),
        corner(b, d, d),
    ])
}
