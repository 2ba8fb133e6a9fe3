//! `rp-region` — geometry for scoping map-data fetches.
//!
//! Before a route can be planned, the street data around it has to be
//! fetched.  This crate works out how much: a generous box around a
//! two-point request, or the convex hull of such boxes for a multi-waypoint
//! one, and renders it as an Overpass query.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                        |
//! |-----------|-----------------------------------------------------------------|
//! | [`bbox`]  | `rectangle_bounding_box`, `oriented_two_point_bounding_box`    |
//! | [`hull`]  | `convex_hull`, `hull_of`, `polygon_contains`                   |
//! | [`query`] | `poly_filter`, `overpass_query`                                |
//!
//! Errors are [`rp_core::GeoError`].

pub mod bbox;
pub mod hull;
pub mod query;


pub use bbox::{oriented_two_point_bounding_box, rectangle_bounding_box};
pub use hull::{convex_hull, hull_of, polygon_contains};
pub use query::{OVERPASS_INTERPRETER_URL, overpass_query, poly_filter};
