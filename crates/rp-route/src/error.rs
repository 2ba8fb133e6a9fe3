//! Planning error type.
//!
//! Every variant is a deterministic property of the request and the graph it
//! was planned on; retrying against the same graph gives the same answer.
//! Only fetching a larger region and rebuilding the graph changes it.

use thiserror::Error;

use rp_core::{GeoError, GeoPoint, NodeId};

/// Errors produced by `rp-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0} is not in the graph")]
    InvalidNode(NodeId),

    #[error("node {0} has no neighbours")]
    Disconnected(NodeId),

    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    #[error("route spans {span_m:.0} m; the limit is {max_m:.0} m")]
    RouteTooLong { span_m: f64, max_m: f64 },

    #[error("need at least one waypoint, got {0}")]
    TooFewWaypoints(usize),

    #[error("no routable node near {0}")]
    NoNearbyNode(GeoPoint),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type RouteResult<T> = Result<T, RouteError>;
