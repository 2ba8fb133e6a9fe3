//! Pre-flight span check.
//!
//! Region size, map-data volume, and search time all grow with the distance
//! a request covers, so over-long requests are refused before anything is
//! fetched or built.  Callers run [`check_span`] on the raw request
//! coordinates first; [`route_between`](crate::route_between) runs it again.

use tracing::debug;

use rp_core::{GeoPoint, RoutingConfig};

use crate::route::path_length_m;
use crate::{RouteError, RouteResult};

/// Straight-line span of a request: the endpoint distance for two points,
/// the sum of consecutive leg distances for more.
pub fn request_span_m(points: &[GeoPoint]) -> f64 {
    path_length_m(points)
}

/// Reject the request if its span exceeds `config.max_span_m`.
///
/// Returns the measured span on success.
///
/// # Errors
///
/// [`RouteError::RouteTooLong`]; the planner must not run.  A NaN or infinite
/// coordinate is [`rp_core::GeoError::NonFinite`], wrapped in [`RouteError::Geo`].
pub fn check_span(config: &RoutingConfig, points: &[GeoPoint]) -> RouteResult<f64> {
    for p in points {
        p.finite()?;
    }
    let span_m = request_span_m(points);
    if span_m > config.max_span_m {
        debug!(span_m, max_m = config.max_span_m, "rejecting over-long request");
        return Err(RouteError::RouteTooLong { span_m, max_m: config.max_span_m });
    }
    Ok(span_m)
}
