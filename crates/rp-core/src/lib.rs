//! `rp-core` — foundational types for the `rp` route planner.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`ids`]        | `NodeId`, `WayId`                                         |
//! | [`geo`]        | `GeoPoint`, `Located`, `CoordinateUnits`, haversine       |
//! | [`activity`]   | `Activity` preference profile                             |
//! | [`config`]     | `RoutingConfig`                                           |
//! | [`error`]      | `GeoError`, `GeoResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod activity;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::Activity;
pub use config::RoutingConfig;
pub use error::{GeoError, GeoResult};
pub use geo::{CoordinateUnits, EARTH_RADIUS_M, GeoPoint, Located};
pub use ids::{NodeId, WayId};
