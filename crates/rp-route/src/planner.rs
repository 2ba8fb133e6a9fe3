//! Planning trait and default A*-style implementation.
//!
//! # Pluggability
//!
//! Callers plan through the [`Planner`] trait, so applications can swap in
//! other search strategies (bidirectional search, contraction hierarchies)
//! without touching request handling.  [`AStarPlanner`] is the default.
//!
//! # Costs
//!
//! The search ranks nodes by
//!
//! ```text
//! rank(n) = cost(n) + h(n, goal)
//! cost(n) = cost(prev) + n.tag_multiplier · h(prev, n)
//! ```
//!
//! where `h` is [`GeoPoint::heuristic_distance`](rp_core::GeoPoint::heuristic_distance),
//! a *squared* planar distance scaled by the coordinate units at the start
//! node.  Squared lengths do not add up along a path, so `cost` is only a
//! ranking value and the heuristic is not admissible: the planner finds a good
//! route quickly, not a provably shortest one.  The reported
//! [`Route::distance`] is measured afterwards along the realized path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use rp_core::{CoordinateUnits, NodeId};
use rp_graph::Graph;

use crate::route::Route;
use crate::{RouteError, RouteResult};

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable route search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one planner can serve concurrent
/// requests, each with its own freshly built [`Graph`].
pub trait Planner: Send + Sync {
    /// Route from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidNode`] if either id is absent from `graph`.
    /// - [`RouteError::Disconnected`] if either node has no neighbours, even
    ///   when `from == to`.
    /// - [`RouteError::Unreachable`] if no path joins them.
    ///
    /// `from == to` on a connected node yields a single-point, zero-distance
    /// route.
    fn plan(&self, graph: &Graph, from: NodeId, to: NodeId) -> RouteResult<Route>;

    /// Route through `waypoints` in order by planning each consecutive leg
    /// and concatenating the results.
    ///
    /// Each leg is optimized on its own; the first failing leg aborts the
    /// whole request.  One waypoint gives the trivial route at that node,
    /// provided it has a neighbour.
    fn plan_multi(&self, graph: &Graph, waypoints: &[NodeId]) -> RouteResult<Route> {
        let (&first, rest) = waypoints
            .split_first()
            .ok_or(RouteError::TooFewWaypoints(waypoints.len()))?;
        let start = graph.node(first).ok_or(RouteError::InvalidNode(first))?;
        if graph.degree(first) == 0 {
            return Err(RouteError::Disconnected(first));
        }

        let mut route = Route::trivial(start.point);
        let mut from = first;
        for &to in rest {
            let leg = self.plan(graph, from, to)?;
            route.extend_leg(leg);
            from = to;
        }
        Ok(route)
    }
}

/// A*-style search with the squared planar ranking heuristic.
///
/// Selection uses a binary heap with lazy deletion, O(E log V).
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPlanner;

impl Planner for AStarPlanner {
    fn plan(&self, graph: &Graph, from: NodeId, to: NodeId) -> RouteResult<Route> {
        astar(graph, from, to)
    }
}

/// [`AStarPlanner::plan`] as a free function.
pub fn plan(graph: &Graph, from: NodeId, to: NodeId) -> RouteResult<Route> {
    AStarPlanner.plan(graph, from, to)
}

/// [`AStarPlanner::plan_multi`] as a free function.
pub fn plan_multi(graph: &Graph, waypoints: &[NodeId]) -> RouteResult<Route> {
    AStarPlanner.plan_multi(graph, waypoints)
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Heap entry.  Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// rank first; equal ranks pop the smaller `NodeId` first for deterministic
/// tie-breaking.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    rank: f64,
    cost: f64,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .total_cmp(&self.rank)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

fn astar(graph: &Graph, from: NodeId, to: NodeId) -> RouteResult<Route> {
    let start = graph.node(from).ok_or(RouteError::InvalidNode(from))?;
    let goal = graph.node(to).ok_or(RouteError::InvalidNode(to))?;

    for id in [from, to] {
        if graph.degree(id) == 0 {
            return Err(RouteError::Disconnected(id));
        }
    }
    if from == to {
        return Ok(Route::trivial(start.point));
    }

    let units = CoordinateUnits::at(start.point)?;

    // best[v] = lowest search cost found so far; absent means ∞.
    let mut best: FxHashMap<NodeId, f64> = FxHashMap::default();
    // prev[v] = node we reached v from on its best path.
    let mut prev: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut heap: BinaryHeap<Frontier> = BinaryHeap::new();

    best.insert(from, 0.0);
    heap.push(Frontier {
        rank: start.point.heuristic_distance(goal.point, units),
        cost: 0.0,
        node: from,
    });

    while let Some(Frontier { cost, node, .. }) = heap.pop() {
        // Skip stale heap entries.
        if visited.contains(&node) || best.get(&node).is_some_and(|&b| cost > b) {
            continue;
        }

        if node == to {
            let path = reconstruct(&prev, from, to);
            debug!(%from, %to, expanded = visited.len(), hops = path.len() - 1, "route found");
            let points = path
                .iter()
                .filter_map(|id| graph.node(*id).map(|n| n.point))
                .collect();
            return Ok(Route::from_points(points));
        }

        let Some(current) = graph.node(node) else { continue };

        for neighbour in graph.neighbours(node) {
            if visited.contains(&neighbour) {
                continue;
            }
            let Some(next) = graph.node(neighbour) else { continue };

            let candidate =
                cost + next.tag_multiplier * current.point.heuristic_distance(next.point, units);

            if candidate < best.get(&neighbour).copied().unwrap_or(f64::INFINITY) {
                best.insert(neighbour, candidate);
                prev.insert(neighbour, node);
                heap.push(Frontier {
                    rank: candidate + next.point.heuristic_distance(goal.point, units),
                    cost: candidate,
                    node: neighbour,
                });
            }
        }

        visited.insert(node);
    }

    debug!(%from, %to, expanded = visited.len(), "goal not reachable");
    Err(RouteError::Unreachable { from, to })
}

/// Walk predecessors back from `to` and return the path `from ..= to`.
fn reconstruct(prev: &FxHashMap<NodeId, NodeId>, from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
