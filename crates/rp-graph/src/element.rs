//! Raw map-data records and the Overpass JSON decoder.
//!
//! # Input shape
//!
//! The map data source answers a region query with one flat array of
//! elements, nodes and ways interleaved in any order:
//!
//! ```json
//! { "elements": [
//!     { "type": "node", "id": 1, "lat": -33.91, "lon": 151.106 },
//!     { "type": "way",  "id": 9, "nodes": [1, 2, 3], "tags": { "highway": "residential" } },
//!     { "type": "node", "id": 2, "lat": -33.905, "lon": 151.108, "tags": { "crossing": "zebra" } }
//! ] }
//! ```
//!
//! Ways near the edge of the queried region routinely reference node ids the
//! response does not contain; the decoder keeps them as-is and the graph
//! builder treats them as sparse.  Element types other than `node` and `way`
//! (relations, areas) carry nothing the router needs and are dropped.

use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::cost::Tags;
use crate::GraphResult;

// ── Records ───────────────────────────────────────────────────────────────────

/// A node as delivered by the map data source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawNode {
    pub id:   i64,
    pub lat:  f64,
    pub lon:  f64,
    #[serde(default)]
    pub tags: Tags,
}

/// A way as delivered by the map data source.  `node_ids` may be shorter
/// than two (degenerate) or reference nodes that were not delivered.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawWay {
    pub id:       i64,
    #[serde(rename = "nodes", default)]
    pub node_ids: Vec<i64>,
    #[serde(default)]
    pub tags:     Tags,
}

/// One entry of the `elements` array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node(RawNode),
    Way(RawWay),
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<RawElement>,
}

// ── RawElements ───────────────────────────────────────────────────────────────

/// Nodes and ways split out of an element stream, each in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawElements {
    pub nodes: Vec<RawNode>,
    pub ways:  Vec<RawWay>,
}

impl RawElements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort one element into its bucket.  Returns `false` if it was dropped.
    pub fn push(&mut self, element: RawElement) -> bool {
        match element {
            RawElement::Node(n) => self.nodes.push(n),
            RawElement::Way(w) => self.ways.push(w),
            RawElement::Other => return false,
        }
        true
    }

    /// Decode an Overpass `[out:json]` response held in memory.
    pub fn from_overpass_str(json: &str) -> GraphResult<Self> {
        let response: OverpassResponse = serde_json::from_str(json)?;
        Ok(Self::from_elements(response.elements))
    }

    /// Like [`from_overpass_str`](Self::from_overpass_str) but accepts any
    /// `Read` source (a file, an HTTP body, a `Cursor` in tests).
    pub fn from_overpass_reader<R: Read>(reader: R) -> GraphResult<Self> {
        let response: OverpassResponse = serde_json::from_reader(reader)?;
        Ok(Self::from_elements(response.elements))
    }

    fn from_elements(elements: Vec<RawElement>) -> Self {
        let mut out = Self::new();
        let mut dropped = 0usize;
        for element in elements {
            if !out.push(element) {
                dropped += 1;
            }
        }
        debug!(
            nodes = out.nodes.len(),
            ways = out.ways.len(),
            dropped,
            "decoded map data elements"
        );
        out
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.ways.is_empty()
    }
}

impl FromIterator<RawElement> for RawElements {
    fn from_iter<I: IntoIterator<Item = RawElement>>(iter: I) -> Self {
        let mut out = Self::new();
        for element in iter {
            out.push(element);
        }
        out
    }
}

/// Shorthand for [`RawElements::from_overpass_str`].
pub fn decode_overpass(json: &str) -> GraphResult<RawElements> {
    RawElements::from_overpass_str(json)
}
