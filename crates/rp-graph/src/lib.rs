//! `rp-graph` — street graph model, map-data decoding, and node snapping.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`element`] | `RawNode`, `RawWay`, `RawElements`, Overpass JSON decoding   |
//! | [`graph`]   | `Node`, `Way`, `Graph` (arena + adjacency + R-tree)          |
//! | [`builder`] | `GraphBuilder`                                               |
//! | [`cost`]    | `TagCost` extension point, `UniformCost`                     |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `rp-core` types.        |

pub mod builder;
pub mod cost;
pub mod element;
pub mod error;
pub mod graph;


pub use builder::GraphBuilder;
pub use cost::{TagCost, Tags, UniformCost};
pub use element::{RawElement, RawElements, RawNode, RawWay, decode_overpass};
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, Node, Way};
