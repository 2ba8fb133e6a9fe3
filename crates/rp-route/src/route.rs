//! The planner's output value.

use rp_core::GeoPoint;

/// An ordered list of points and the total great-circle distance along them.
///
/// `distance` is always the sum of haversine distances between consecutive
/// points (or, for stitched routes, the exact sum of the leg distances); it is
/// never a search cost.  Consecutive duplicate points are collapsed.
///
/// With the `serde` feature the route serializes as
/// `{"route": [{"latitude": …, "longitude": …}, …], "dist": …}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    #[cfg_attr(feature = "serde", serde(rename = "route"))]
    pub points:   Vec<GeoPoint>,
    /// Metres.
    #[cfg_attr(feature = "serde", serde(rename = "dist"))]
    pub distance: f64,
}

impl Route {
    /// A route that starts and ends at `point`.
    pub fn trivial(point: GeoPoint) -> Self {
        Self { points: vec![point], distance: 0.0 }
    }

    /// Build from a realized path, measuring it with haversine.
    pub fn from_points(mut points: Vec<GeoPoint>) -> Self {
        points.dedup();
        let distance = path_length_m(&points);
        Self { points, distance }
    }

    /// Append a leg that starts where `self` ends, dropping the junction
    /// point and adding the leg's distance as-is.
    pub(crate) fn extend_leg(&mut self, leg: Route) {
        for p in leg.points {
            if self.points.last() != Some(&p) {
                self.points.push(p);
            }
        }
        self.distance += leg.distance;
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// `true` if the route never leaves its start point.
    pub fn is_trivial(&self) -> bool {
        self.points.len() <= 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sum of great-circle distances between consecutive points, in metres.
pub fn path_length_m(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}
