//! Request-level routing configuration.

use crate::{Activity, GeoError, GeoResult};

/// Default cap on the straight-line span of a request: 50 km.
pub const DEFAULT_MAX_SPAN_M: f64 = 50_000.0;

/// Top-level routing configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the request helpers in `rp-route`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// Largest accepted straight-line span in metres.  Two-point requests are
    /// measured endpoint to endpoint; multi-waypoint requests by the sum of
    /// their legs.  Bounds both the query region and the graph size.
    pub max_span_m: f64,

    /// Preference profile handed to the tag-cost hook at graph build time.
    pub activity: Activity,
}

impl RoutingConfig {
    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> GeoResult<()> {
        if !(self.max_span_m.is_finite() && self.max_span_m > 0.0) {
            return Err(GeoError::Config(format!(
                "max_span_m must be a positive finite number, got {}",
                self.max_span_m
            )));
        }
        Ok(())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self { max_span_m: DEFAULT_MAX_SPAN_M, activity: Activity::default() }
    }
}
