//! Street graph representation.
//!
//! # Data layout
//!
//! The graph is an **arena** of [`Node`]s keyed by [`NodeId`] plus a separate
//! adjacency index (`NodeId → sorted set of NodeId`).  Nodes never point at
//! each other, so cyclic streets (roundabouts, closed loops) need no
//! back-pointers and the whole structure is plain owned data: `Send + Sync`
//! and safe to read from several threads once built.
//!
//! Adjacency is undirected and symmetric: `b ∈ neighbours(a)` iff
//! `a ∈ neighbours(b)`.  Neighbour sets are `BTreeSet`s so iteration order
//! (and therefore search tie-breaking) is deterministic.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a coordinate to the nearest node.  Used to
//! snap free-form request coordinates onto the graph.

use std::collections::BTreeSet;

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use rp_core::{GeoPoint, Located, NodeId, WayId};

use crate::cost::Tags;
use crate::{GraphError, GraphResult};

// ── Node / Way ────────────────────────────────────────────────────────────────

/// A point of the street graph, possibly shared by several ways.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id:             NodeId,
    pub point:          GeoPoint,
    /// Own tags merged with the tags of every way passing through the node.
    pub tags:           Tags,
    /// Scales the cost of stepping onto this node.  Always positive.
    pub tag_multiplier: f64,
}

impl Node {
    pub fn new(id: NodeId, point: GeoPoint, tags: Tags) -> Self {
        Self { id, point, tags, tag_multiplier: 1.0 }
    }
}

impl Located for Node {
    #[inline]
    fn location(&self) -> GeoPoint {
        self.point
    }
}

/// An ordered polyline of nodes sharing road-level tags.
#[derive(Clone, Debug, PartialEq)]
pub struct Way {
    pub id:       WayId,
    pub node_ids: Vec<NodeId>,
    pub tags:     Tags,
}

impl Way {
    /// # Errors
    ///
    /// [`GraphError::DegenerateWay`] if `node_ids` has fewer than two entries.
    pub fn new(id: WayId, node_ids: Vec<NodeId>, tags: Tags) -> GraphResult<Self> {
        if node_ids.len() < 2 {
            return Err(GraphError::DegenerateWay { way: id, len: node_ids.len() });
        }
        Ok(Self { id, node_ids, tags })
    }

    /// `true` if the way ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.node_ids.first() == self.node_ids.last()
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: `[lat, lon · lon_scale]` with the node id.
///
/// Longitude is pre-scaled by the cosine of the graph's mean latitude so
/// squared Euclidean distance in index space ranks like ground distance
/// within a single city-sized fetch.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Street graph for one planning request.
///
/// Do not construct directly; use [`GraphBuilder`](crate::GraphBuilder).
pub struct Graph {
    pub(crate) nodes:        FxHashMap<NodeId, Node>,
    pub(crate) ways:         Vec<Way>,
    pub(crate) adjacency:    FxHashMap<NodeId, BTreeSet<NodeId>>,
    pub(crate) skipped_ways: Vec<WayId>,
    lon_scale:               f64,
    spatial_idx:             RTree<NodeEntry>,
}

impl Graph {
    pub(crate) fn new(
        nodes: FxHashMap<NodeId, Node>,
        ways: Vec<Way>,
        adjacency: FxHashMap<NodeId, BTreeSet<NodeId>>,
        skipped_ways: Vec<WayId>,
    ) -> Self {
        let lon_scale = if nodes.is_empty() {
            1.0
        } else {
            let mean_lat = nodes.values().map(|n| n.point.lat).sum::<f64>() / nodes.len() as f64;
            mean_lat.to_radians().cos().abs().max(1e-6)
        };

        // Bulk-load for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = nodes
            .values()
            .map(|n| NodeEntry { point: [n.point.lat, n.point.lon * lon_scale], id: n.id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Self { nodes, ways, adjacency, skipped_ways, lon_scale, spatial_idx }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Ways that made it into the graph, in input order.
    pub fn ways(&self) -> &[Way] {
        &self.ways
    }

    /// Ids of degenerate ways dropped during the build.
    pub fn skipped_ways(&self) -> &[WayId] {
        &self.skipped_ways
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `id` in ascending id order.  Empty for unknown or
    /// isolated nodes.
    #[inline]
    pub fn neighbours(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }

    #[inline]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, BTreeSet::len)
    }

    #[inline]
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.get(&a).is_some_and(|s| s.contains(&b))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the id of the node nearest to `pos`.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&self.index_point(pos))
            .map(|e| e.id)
    }

    /// Like [`nearest_node`](Self::nearest_node) but skips nodes without any
    /// neighbour, which the planner would reject anyway (POIs, barriers, bits
    /// of ways cut off at the region edge).
    pub fn nearest_routable_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&self.index_point(pos))
            .map(|e| e.id)
            .find(|&id| self.degree(id) > 0)
    }

    #[inline]
    fn index_point(&self, pos: GeoPoint) -> [f64; 2] {
        [pos.lat, pos.lon * self.lon_scale]
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .field("ways", &self.ways.len())
            .field("skipped_ways", &self.skipped_ways.len())
            .finish()
    }
}
