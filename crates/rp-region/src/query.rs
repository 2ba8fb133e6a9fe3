//! Overpass QL text for a query region.
//!
//! Only the query text is produced here; sending it is the caller's job.  The
//! query selects every `highway=*` way inside the polygon and then recurses
//! down (`>`) to the member nodes, which is exactly the element set
//! `rp_graph::decode_overpass` expects.

use std::fmt::Write;

use rp_core::GeoPoint;

/// Public Overpass interpreter endpoint; append the URL-encoded query.
pub const OVERPASS_INTERPRETER_URL: &str = "https://overpass-api.de/api/interpreter";

/// Render a polygon as an Overpass `poly:` filter body: `"lat lon lat lon …"`.
pub fn poly_filter(polygon: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(polygon.len() * 24);
    for (i, p) in polygon.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{} {}", p.lat, p.lon);
    }
    out
}

/// Overpass QL selecting highway ways inside `polygon` plus their nodes.
pub fn overpass_query(polygon: &[GeoPoint]) -> String {
    format!(
        "[out:json];(way[highway](poly:\"{}\");>;);out;",
        poly_filter(polygon)
    )
}
