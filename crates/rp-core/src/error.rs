//! Geometry and configuration error type.
//!
//! Sub-crates define their own error enums and wrap `GeoError` as one variant
//! via `#[from]`, so geometry failures propagate with `?`.

use thiserror::Error;

use crate::GeoPoint;

/// Errors produced by `rp-core` geometry and configuration.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("coordinate ({lat}, {lon}) is not finite")]
    NonFinite { lat: f64, lon: f64 },

    #[error("degenerate coordinate units at {at}: {lat_m} m/deg lat, {lon_m} m/deg lon")]
    DegenerateUnits { at: GeoPoint, lat_m: f64, lon_m: f64 },

    #[error("points {0} and {1} coincide")]
    CoincidentPoints(GeoPoint, GeoPoint),

    #[error("extent must be a non-negative finite length in metres, got {0}")]
    InvalidExtent(f64),

    #[error("need at least {needed} points, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for geometry operations.
pub type GeoResult<T> = Result<T, GeoError>;
