//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude rounded to nine decimal places
//! (~0.1 mm).  Street nodes a few metres apart must stay distinguishable and
//! the oriented query boxes are built from small degree offsets, so single
//! precision is not enough here.
//!
//! Two distance measures live side by side:
//!
//! - [`GeoPoint::distance_m`] is the true great-circle (haversine) distance
//!   and is what routes report.
//! - [`GeoPoint::heuristic_distance`] is a squared, axis-scaled planar value
//!   that only *ranks* nearby candidates.  It is not additive and must never
//!   be reported as a distance.

use std::fmt;
use std::str::FromStr;

use crate::{GeoError, GeoResult};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Coordinates are rounded to this many decimal places on construction.
const COORD_SCALE: f64 = 1e9;

/// Smallest metres-per-degree value accepted as a usable local unit.
const MIN_UNIT_M: f64 = 1e-3;

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
///
/// Equality compares the rounded values, so two points parsed from slightly
/// different decimal strings of the same location compare equal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    #[cfg_attr(feature = "serde", serde(rename = "latitude"))]
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(rename = "longitude"))]
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat: round_coord(lat), lon: round_coord(lon) }
    }

    /// Like [`new`](Self::new) but rejects NaN and infinite input.
    pub fn try_new(lat: f64, lon: f64) -> GeoResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::NonFinite { lat, lon });
        }
        Ok(Self::new(lat, lon))
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// `self`, or [`GeoError::NonFinite`] if either coordinate is NaN or
    /// infinite.
    pub fn finite(self) -> GeoResult<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeoError::NonFinite { lat: self.lat, lon: self.lon })
        }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric in its arguments and exactly zero for equal points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Squared planar approximation of the distance to `other`, scaled by the
    /// local metres-per-degree `units`.
    ///
    /// Monotonic with the true distance for nearby points, far cheaper to
    /// evaluate, and *not* a metric: summing it along a path is meaningless.
    #[inline]
    pub fn heuristic_distance(self, other: GeoPoint, units: CoordinateUnits) -> f64 {
        let y = (self.lat - other.lat).abs() * units.lat_m;
        let x = (self.lon - other.lon).abs() * units.lon_m;
        x * x + y * y
    }

    /// Midpoint in degree space.  Only meaningful over short distances.
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            self.lat + (other.lat - self.lat) / 2.0,
            self.lon + (other.lon - self.lon) / 2.0,
        )
    }

    /// Offset by a number of degrees along each axis.
    #[inline]
    pub fn offset_deg(self, d_lat: f64, d_lon: f64) -> GeoPoint {
        GeoPoint::new(self.lat + d_lat, self.lon + d_lon)
    }
}

#[inline]
fn round_coord(v: f64) -> f64 {
    (v * COORD_SCALE).round() / COORD_SCALE
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"` as sent by the mobile client.
impl FromStr for GeoPoint {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| GeoError::Parse(format!("expected \"lat,lon\", got {s:?}")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| GeoError::Parse(format!("invalid coordinate {v:?}: {e}")))
        };
        GeoPoint::try_new(parse(lat)?, parse(lon)?)
    }
}

// ── Located ───────────────────────────────────────────────────────────────────

/// Anything that sits at a geographic coordinate.
///
/// Graph nodes hold a `GeoPoint` rather than being one; this trait lets
/// geometry helpers accept either.
pub trait Located {
    fn location(&self) -> GeoPoint;

    fn distance_to<L: Located + ?Sized>(&self, other: &L) -> f64 {
        self.location().distance_m(other.location())
    }
}

impl Located for GeoPoint {
    #[inline]
    fn location(&self) -> GeoPoint {
        *self
    }
}

// ── CoordinateUnits ───────────────────────────────────────────────────────────

/// Metres spanned by one degree of latitude and of longitude around a point.
///
/// Computed once per request so the search can rank candidates with plain
/// multiplications instead of trigonometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateUnits {
    /// Metres per degree of latitude.
    pub lat_m: f64,
    /// Metres per degree of longitude.
    pub lon_m: f64,
}

impl CoordinateUnits {
    /// Units at `point`: the haversine distance to the point one degree north
    /// and to the point one degree east.
    ///
    /// # Errors
    ///
    /// [`GeoError::NonFinite`] for NaN/infinite input and
    /// [`GeoError::DegenerateUnits`] when an axis collapses (longitude at a
    /// pole), which would otherwise surface later as a division by zero.
    pub fn at(point: GeoPoint) -> GeoResult<Self> {
        let point = point.finite()?;
        let lat_m = point.distance_m(point.offset_deg(1.0, 0.0));
        let lon_m = point.distance_m(point.offset_deg(0.0, 1.0));
        if !(lat_m.is_finite() && lon_m.is_finite() && lat_m > MIN_UNIT_M && lon_m > MIN_UNIT_M) {
            return Err(GeoError::DegenerateUnits { at: point, lat_m, lon_m });
        }
        Ok(Self { lat_m, lon_m })
    }

    /// Convert a metric offset (north, east) into degrees (Δlat, Δlon).
    #[inline]
    pub fn metres_to_deg(self, north_m: f64, east_m: f64) -> (f64, f64) {
        (north_m / self.lat_m, east_m / self.lon_m)
    }

    /// Project a degree offset from an origin into local metres (east, north).
    ///
    /// The longitude offset takes the short way round, so points either side
    /// of the antimeridian project next to each other.
    #[inline]
    pub fn project(self, origin: GeoPoint, p: GeoPoint) -> (f64, f64) {
        let d_lon = (p.lon - origin.lon + 180.0).rem_euclid(360.0) - 180.0;
        (d_lon * self.lon_m, (p.lat - origin.lat) * self.lat_m)
    }
}
