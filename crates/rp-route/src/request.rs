//! Coordinate-level request handling.
//!
//! Clients ask for routes between free-form coordinates, not node ids.  This
//! module glues the pre-flight guard, node snapping, and the planner together:
//!
//! ```text
//! check_span → snap each point to the nearest routable node → plan_multi
//! ```

use rp_core::{GeoPoint, NodeId, RoutingConfig};
use rp_graph::Graph;

use crate::guard::check_span;
use crate::planner::Planner;
use crate::route::Route;
use crate::{RouteError, RouteResult};

/// Snap every point to the nearest node that has at least one neighbour.
///
/// # Errors
///
/// [`RouteError::NoNearbyNode`] if the graph has no routable node at all.
pub fn snap_waypoints(graph: &Graph, points: &[GeoPoint]) -> RouteResult<Vec<NodeId>> {
    points
        .iter()
        .map(|&p| graph.nearest_routable_node(p).ok_or(RouteError::NoNearbyNode(p)))
        .collect()
}

/// Plan a route through `points` in order on `graph`.
///
/// `graph` should have been built from map data covering the region returned
/// by `rp_region::convex_hull(points)`.
pub fn route_between<P: Planner + ?Sized>(
    planner: &P,
    graph: &Graph,
    points: &[GeoPoint],
    config: &RoutingConfig,
) -> RouteResult<Route> {
    config.validate()?;
    if points.is_empty() {
        return Err(RouteError::TooFewWaypoints(0));
    }
    check_span(config, points)?;
    let waypoints = snap_waypoints(graph, points)?;
    planner.plan_multi(graph, &waypoints)
}
