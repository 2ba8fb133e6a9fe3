//! Graph-subsystem error type.

use thiserror::Error;

use rp_core::{GeoError, NodeId, WayId};

/// Errors produced by `rp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A way with fewer than two member nodes.  The builder skips these and
    /// records them in [`Graph::skipped_ways`](crate::Graph::skipped_ways);
    /// the error only escapes from [`Way::new`](crate::Way::new).
    #[error("way {way} has {len} member node(s); at least 2 are required")]
    DegenerateWay { way: WayId, len: usize },

    #[error("tag cost for node {node} is {value}; multipliers must be positive and finite")]
    InvalidMultiplier { node: NodeId, value: f64 },

    #[error("map data decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type GraphResult<T> = Result<T, GraphError>;
