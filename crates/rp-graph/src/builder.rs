//! Graph construction from raw map-data records.
//!
//! # Build phases
//!
//! ```text
//! ① nodes      — every RawNode becomes a Node (a repeated id: last one wins)
//! ② ways       — every RawWay with ≥ 2 members becomes a Way; shorter ones
//!                are logged, recorded in Graph::skipped_ways, and skipped
//! ③ tags       — each way's tags are copied onto its present member nodes,
//!                ways in input order, later writes winning
//! ④ adjacency  — consecutive members of a way become neighbours in both
//!                directions; pairs touching an absent node are dropped
//! ⑤ multiplier — TagCost::multiplier(tags, activity) per node
//! ```
//!
//! Phase ④ walks `windows(2)` over each way, which is the same as giving the
//! node at index `i` its predecessor when `i - 1 >= 0` and its successor when
//! `i + 1 < len`: the first and last members of every way are wired in both
//! directions.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use rp_core::{Activity, GeoPoint, NodeId, WayId};

use crate::cost::{TagCost, UniformCost};
use crate::element::{RawElements, RawNode, RawWay};
use crate::graph::{Graph, Node, Way};
use crate::{GraphError, GraphResult};

/// Collect raw records, then call [`build`](Self::build) or
/// [`build_with`](Self::build_with).
///
/// Nodes and ways may be added in any order.
///
/// # Example
///
/// ```
/// use rp_core::NodeId;
/// use rp_graph::{GraphBuilder, RawNode, RawWay};
///
/// let mut b = GraphBuilder::new();
/// b.add_node(RawNode { id: 1, lat: -33.910, lon: 151.106, tags: Default::default() });
/// b.add_node(RawNode { id: 2, lat: -33.905, lon: 151.108, tags: Default::default() });
/// b.add_way(RawWay { id: 10, node_ids: vec![1, 2], tags: Default::default() });
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.are_adjacent(NodeId(1), NodeId(2)));
/// assert!(graph.are_adjacent(NodeId(2), NodeId(1)));
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    nodes:    Vec<RawNode>,
    ways:     Vec<RawWay>,
    activity: Activity,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of records.
    pub fn with_capacity(nodes: usize, ways: usize) -> Self {
        Self {
            nodes:    Vec::with_capacity(nodes),
            ways:     Vec::with_capacity(ways),
            activity: Activity::default(),
        }
    }

    /// Start from an already decoded element set.
    pub fn from_elements(elements: RawElements) -> Self {
        Self { nodes: elements.nodes, ways: elements.ways, activity: Activity::default() }
    }

    /// Set the preference profile handed to the tag-cost hook.
    pub fn activity(mut self, activity: Activity) -> Self {
        self.activity = activity;
        self
    }

    pub fn add_node(&mut self, node: RawNode) {
        self.nodes.push(node);
    }

    pub fn add_way(&mut self, way: RawWay) {
        self.ways.push(way);
    }

    pub fn extend(&mut self, elements: RawElements) {
        self.nodes.extend(elements.nodes);
        self.ways.extend(elements.ways);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn way_count(&self) -> usize { self.ways.len() }

    /// Build with [`UniformCost`] (every multiplier is `1`).
    pub fn build(self) -> GraphResult<Graph> {
        self.build_with(&UniformCost)
    }

    /// Consume the builder and produce a [`Graph`], deriving node multipliers
    /// from `cost`.
    ///
    /// # Errors
    ///
    /// [`GraphError::Geo`] for a node with a non-finite coordinate and
    /// [`GraphError::InvalidMultiplier`] if `cost` returns a value that is not
    /// positive and finite.  Degenerate ways and missing member nodes are not
    /// errors.
    pub fn build_with<C: TagCost + ?Sized>(self, cost: &C) -> GraphResult<Graph> {
        let activity = self.activity;

        // ── ① nodes ───────────────────────────────────────────────────────
        let mut nodes: FxHashMap<NodeId, Node> =
            FxHashMap::with_capacity_and_hasher(self.nodes.len(), Default::default());
        for raw in self.nodes {
            let point = GeoPoint::try_new(raw.lat, raw.lon)?;
            let id = NodeId(raw.id);
            if nodes.insert(id, Node::new(id, point, raw.tags)).is_some() {
                debug!(node = %id, "duplicate node record; keeping the later one");
            }
        }

        // ── ② ways ────────────────────────────────────────────────────────
        let mut ways: Vec<Way> = Vec::with_capacity(self.ways.len());
        let mut skipped_ways: Vec<WayId> = Vec::new();
        for raw in self.ways {
            let node_ids = raw.node_ids.into_iter().map(NodeId).collect();
            match Way::new(WayId(raw.id), node_ids, raw.tags) {
                Ok(way) => ways.push(way),
                Err(GraphError::DegenerateWay { way, len }) => {
                    warn!(%way, len, "skipping degenerate way");
                    skipped_ways.push(way);
                }
                Err(e) => return Err(e),
            }
        }

        // ── ③ tag propagation ─────────────────────────────────────────────
        for way in &ways {
            if way.tags.is_empty() {
                continue;
            }
            for id in &way.node_ids {
                if let Some(node) = nodes.get_mut(id) {
                    node.tags.extend(way.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
            }
        }

        // ── ④ adjacency ───────────────────────────────────────────────────
        let mut adjacency: FxHashMap<NodeId, BTreeSet<NodeId>> =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        let mut sparse_pairs = 0usize;
        for way in &ways {
            for pair in way.node_ids.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a == b {
                    continue;
                }
                if !(nodes.contains_key(&a) && nodes.contains_key(&b)) {
                    sparse_pairs += 1;
                    continue;
                }
                adjacency.entry(a).or_default().insert(b);
                adjacency.entry(b).or_default().insert(a);
            }
        }

        // ── ⑤ tag multipliers ─────────────────────────────────────────────
        for node in nodes.values_mut() {
            let value = cost.multiplier(&node.tags, activity);
            if !(value.is_finite() && value > 0.0) {
                return Err(GraphError::InvalidMultiplier { node: node.id, value });
            }
            node.tag_multiplier = value;
        }

        debug!(
            nodes = nodes.len(),
            ways = ways.len(),
            skipped_ways = skipped_ways.len(),
            sparse_pairs,
            %activity,
            "built street graph"
        );

        Ok(Graph::new(nodes, ways, adjacency, skipped_ways))
    }
}
