//! Unit tests for rp-route.
//!
//! All tests use hand-crafted graphs so they run without any map download.

#[cfg(test)]
mod helpers {
    use rp_core::{GeoPoint, NodeId};
    use rp_graph::{Graph, GraphBuilder, RawNode, RawWay, Tags};

    pub const N1: (f64, f64) = (-33.9100, 151.1060);
    pub const N2: (f64, f64) = (-33.9050, 151.1080);
    pub const N3: (f64, f64) = (-33.9000, 151.1160);

    pub fn point((lat, lon): (f64, f64)) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    pub fn node(id: i64, (lat, lon): (f64, f64)) -> RawNode {
        RawNode { id, lat, lon, tags: Tags::new() }
    }

    pub fn way(id: i64, node_ids: &[i64], tags: &[(&str, &str)]) -> RawWay {
        RawWay {
            id,
            node_ids: node_ids.to_vec(),
            tags: tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    /// One way N1–N2–N3 plus a separate two-node street (ids 20, 21) and an
    /// isolated node 30.
    pub fn street() -> Graph {
        let mut b = GraphBuilder::new();
        b.add_node(node(1, N1));
        b.add_node(node(2, N2));
        b.add_node(node(3, N3));
        b.add_node(node(20, (-33.8000, 151.2000)));
        b.add_node(node(21, (-33.8010, 151.2010)));
        b.add_node(node(30, (-33.9075, 151.1070)));
        b.add_way(way(100, &[1, 2, 3], &[("highway", "residential")]));
        b.add_way(way(101, &[20, 21], &[]));
        b.build().unwrap()
    }

    /// Diamond A(10) → {B(11) short, C(12) long} → D(13).
    ///
    /// ```text
    ///            C (0.003, 0.002)
    ///          /               \
    /// A (0, 0)                  D (0, 0.004)
    ///          \               /
    ///           B (0.0005, 0.002)
    /// ```
    ///
    /// Way 200 (A-B-D) is `highway=primary`, way 201 (A-C-D) is
    /// `highway=footway`; A and D end up with the footway tag.
    pub fn diamond_builder() -> GraphBuilder {
        let mut b = GraphBuilder::new();
        b.add_node(node(10, (0.0, 0.0)));
        b.add_node(node(11, (0.0005, 0.002)));
        b.add_node(node(12, (0.003, 0.002)));
        b.add_node(node(13, (0.0, 0.004)));
        b.add_way(way(200, &[10, 11, 13], &[("highway", "primary")]));
        b.add_way(way(201, &[10, 12, 13], &[("highway", "footway")]));
        b
    }

    pub const A: NodeId = NodeId(10);
    pub const B: NodeId = NodeId(11);
    pub const C: NodeId = NodeId(12);
    pub const D: NodeId = NodeId(13);
}

// ── Single-pair search ────────────────────────────────────────────────────────

#[cfg(test)]
mod plan {
    use rp_core::NodeId;
    use rp_graph::{GraphBuilder, Tags};

    use super::helpers::{self, A, B, C, D, N1, N2, N3, point};
    use crate::{AStarPlanner, Planner, RouteError, plan};

    #[test]
    fn two_node_graph() {
        let mut b = GraphBuilder::new();
        b.add_node(helpers::node(1, N1));
        b.add_node(helpers::node(2, N2));
        b.add_way(helpers::way(9, &[1, 2], &[]));
        let g = b.build().unwrap();

        let r = plan(&g, NodeId(1), NodeId(2)).unwrap();
        assert_eq!(r.points, vec![point(N1), point(N2)]);
        assert!((r.distance - point(N1).distance_m(point(N2))).abs() < 1e-9);
    }

    #[test]
    fn only_path_along_a_way() {
        let g = helpers::street();
        let r = plan(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(r.points, vec![point(N1), point(N2), point(N3)]);
        assert_eq!(
            r.distance,
            point(N1).distance_m(point(N2)) + point(N2).distance_m(point(N3))
        );
    }

    #[test]
    fn reverse_direction() {
        let g = helpers::street();
        let r = plan(&g, NodeId(3), NodeId(1)).unwrap();
        assert_eq!(r.points, vec![point(N3), point(N2), point(N1)]);
    }

    #[test]
    fn same_node_is_trivial() {
        let g = helpers::street();
        let r = plan(&g, NodeId(2), NodeId(2)).unwrap();
        assert!(r.is_trivial());
        assert_eq!(r.points, vec![point(N2)]);
        assert_eq!(r.distance, 0.0);
    }

    #[test]
    fn unknown_node_is_invalid() {
        let g = helpers::street();
        assert!(matches!(plan(&g, NodeId(999), NodeId(1)), Err(RouteError::InvalidNode(NodeId(999)))));
        assert!(matches!(plan(&g, NodeId(1), NodeId(999)), Err(RouteError::InvalidNode(NodeId(999)))));
    }

    #[test]
    fn isolated_node_is_disconnected() {
        let g = helpers::street();
        assert!(matches!(plan(&g, NodeId(30), NodeId(1)), Err(RouteError::Disconnected(NodeId(30)))));
        assert!(matches!(plan(&g, NodeId(1), NodeId(30)), Err(RouteError::Disconnected(NodeId(30)))));
    }

    #[test]
    fn isolated_node_to_itself_is_disconnected() {
        let g = helpers::street();
        assert!(matches!(plan(&g, NodeId(30), NodeId(30)), Err(RouteError::Disconnected(NodeId(30)))));

        // A graph holding nothing but one loose node.
        let mut b = GraphBuilder::new();
        b.add_node(helpers::node(30, N1));
        let lone = b.build().unwrap();
        assert!(matches!(plan(&lone, NodeId(30), NodeId(30)), Err(RouteError::Disconnected(NodeId(30)))));
    }

    #[test]
    fn disjoint_ways_are_unreachable() {
        let g = helpers::street();
        let err = plan(&g, NodeId(1), NodeId(20)).unwrap_err();
        assert!(matches!(err, RouteError::Unreachable { from: NodeId(1), to: NodeId(20) }));
    }

    #[test]
    fn prefers_the_shorter_branch() {
        let g = helpers::diamond_builder().build().unwrap();
        let r = AStarPlanner.plan(&g, A, D).unwrap();
        let expected: Vec<_> = [A, B, D].iter().map(|id| g.node(*id).unwrap().point).collect();
        assert_eq!(r.points, expected);
    }

    #[test]
    fn tag_multiplier_steers_the_search() {
        let avoid_primary = |tags: &Tags, _: rp_core::Activity| {
            if tags.get("highway").map(String::as_str) == Some("primary") { 1_000.0 } else { 1.0 }
        };
        let g = helpers::diamond_builder().build_with(&avoid_primary).unwrap();
        assert_eq!(g.node(B).unwrap().tag_multiplier, 1_000.0);

        let r = plan(&g, A, D).unwrap();
        let expected: Vec<_> = [A, C, D].iter().map(|id| g.node(*id).unwrap().point).collect();
        assert_eq!(r.points, expected);
        // Still reported in metres along the realized path, not in search cost.
        assert_eq!(r.distance, crate::path_length_m(&expected));
    }

    #[test]
    fn distance_is_never_negative() {
        let g = helpers::diamond_builder().build().unwrap();
        for from in [A, B, C, D] {
            for to in [A, B, C, D] {
                let r = plan(&g, from, to).unwrap();
                assert!(r.distance >= 0.0);
                assert!(r.points.windows(2).all(|w| w[0] != w[1]));
            }
        }
    }
}

// ── Multi-waypoint stitching ──────────────────────────────────────────────────

#[cfg(test)]
mod multi {
    use rp_core::NodeId;

    use super::helpers::{self, A, B, C, D, N1, N2, N3, point};
    use crate::{RouteError, plan, plan_multi};

    #[test]
    fn distance_is_exact_sum_of_legs() {
        let g = helpers::diamond_builder().build().unwrap();
        let m = plan_multi(&g, &[A, C, D]).unwrap();
        let ac = plan(&g, A, C).unwrap();
        let cd = plan(&g, C, D).unwrap();
        assert_eq!(m.distance, ac.distance + cd.distance);
    }

    #[test]
    fn junction_points_are_not_duplicated() {
        let g = helpers::street();
        let m = plan_multi(&g, &[NodeId(1), NodeId(2), NodeId(3)]).unwrap();
        assert_eq!(m.points, vec![point(N1), point(N2), point(N3)]);
    }

    #[test]
    fn there_and_back() {
        let g = helpers::street();
        let m = plan_multi(&g, &[NodeId(1), NodeId(3), NodeId(1)]).unwrap();
        assert_eq!(m.points.len(), 5);
        assert_eq!(m.start(), m.end());
        let one_way = plan(&g, NodeId(1), NodeId(3)).unwrap().distance;
        assert_eq!(m.distance, one_way + plan(&g, NodeId(3), NodeId(1)).unwrap().distance);
    }

    #[test]
    fn repeated_waypoint_adds_nothing() {
        let g = helpers::diamond_builder().build().unwrap();
        let m = plan_multi(&g, &[A, B, B, D]).unwrap();
        let direct = plan_multi(&g, &[A, B, D]).unwrap();
        assert_eq!(m.points, direct.points);
        assert_eq!(m.distance, direct.distance);
    }

    #[test]
    fn first_failing_leg_aborts() {
        let g = helpers::street();
        let err = plan_multi(&g, &[NodeId(1), NodeId(2), NodeId(20), NodeId(3)]).unwrap_err();
        assert!(matches!(err, RouteError::Unreachable { from: NodeId(2), to: NodeId(20) }));
    }

    #[test]
    fn single_and_empty_waypoint_lists() {
        let g = helpers::street();
        let r = plan_multi(&g, &[NodeId(2)]).unwrap();
        assert_eq!(r.points, vec![point(N2)]);
        assert_eq!(r.distance, 0.0);

        assert!(matches!(plan_multi(&g, &[]), Err(RouteError::TooFewWaypoints(0))));
        assert!(matches!(plan_multi(&g, &[NodeId(5)]), Err(RouteError::InvalidNode(NodeId(5)))));
        assert!(matches!(plan_multi(&g, &[NodeId(30)]), Err(RouteError::Disconnected(NodeId(30)))));
    }
}

// ── Route value ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::helpers::{N1, N2, point};
    use crate::Route;

    #[test]
    fn from_points_collapses_duplicates() {
        let r = Route::from_points(vec![point(N1), point(N1), point(N2), point(N2)]);
        assert_eq!(r.points, vec![point(N1), point(N2)]);
        assert_eq!(r.distance, point(N1).distance_m(point(N2)));
    }

    #[test]
    fn trivial_route() {
        let r = Route::trivial(point(N1));
        assert_eq!(r.len(), 1);
        assert!(r.is_trivial());
        assert!(!r.is_empty());
        assert_eq!(r.start(), Some(point(N1)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_route_and_dist() {
        let r = Route::from_points(vec![point(N1), point(N2)]);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["route"][0]["latitude"], -33.91);
        assert_eq!(json["route"][1]["longitude"], 151.108);
        assert_eq!(json["dist"], r.distance);
    }
}

// ── Pre-flight guard & coordinate requests ────────────────────────────────────

#[cfg(test)]
mod request {
    use rp_core::{GeoError, GeoPoint, RoutingConfig};

    use super::helpers::{self, N1, N2, N3, point};
    use crate::{AStarPlanner, RouteError, check_span, request_span_m, route_between, snap_waypoints};

    #[test]
    fn span_within_cap() {
        let cfg = RoutingConfig::default();
        let span = check_span(&cfg, &[point(N1), point(N3)]).unwrap();
        assert_eq!(span, point(N1).distance_m(point(N3)));
    }

    #[test]
    fn span_over_cap_is_rejected() {
        let cfg = RoutingConfig::default();
        // Sydney to Newcastle, ~115 km.
        let far = GeoPoint::new(-32.9283, 151.7817);
        let err = check_span(&cfg, &[point(N1), far]).unwrap_err();
        assert!(matches!(err, RouteError::RouteTooLong { max_m, .. } if max_m == 50_000.0));
    }

    #[test]
    fn multi_leg_span_is_cumulative() {
        // Out and back: endpoints coincide, the legs do not.
        let pts = [point(N1), point(N3), point(N1)];
        assert_eq!(request_span_m(&pts), 2.0 * point(N1).distance_m(point(N3)));

        let cfg = RoutingConfig { max_span_m: 1_500.0, ..RoutingConfig::default() };
        assert!(check_span(&cfg, &[point(N1), point(N3)]).is_ok());
        assert!(matches!(check_span(&cfg, &pts), Err(RouteError::RouteTooLong { .. })));
    }

    #[test]
    fn non_finite_coordinates_are_rejected_before_the_cap() {
        let cfg = RoutingConfig::default();
        let nan = GeoPoint::new(f64::NAN, 151.0);
        let err = check_span(&cfg, &[nan, point(N1)]).unwrap_err();
        assert!(matches!(err, RouteError::Geo(GeoError::NonFinite { .. })));

        let inf = GeoPoint::new(-33.9, f64::INFINITY);
        let err = check_span(&cfg, &[point(N1), point(N2), inf]).unwrap_err();
        assert!(matches!(err, RouteError::Geo(GeoError::NonFinite { .. })));
    }

    #[test]
    fn snapping_skips_isolated_nodes() {
        let g = helpers::street();
        // Node 30 sits exactly here but has no neighbours.
        let ids = snap_waypoints(&g, &[GeoPoint::new(-33.9075, 151.1070)]).unwrap();
        assert_ne!(ids[0], rp_core::NodeId(30));
    }

    #[test]
    fn route_between_free_coordinates() {
        let g = helpers::street();
        let near_n1 = GeoPoint::new(-33.9101, 151.1059);
        let near_n3 = GeoPoint::new(-33.9001, 151.1161);
        let r = route_between(&AStarPlanner, &g, &[near_n1, near_n3], &RoutingConfig::default())
            .unwrap();
        assert_eq!(r.points, vec![point(N1), point(N2), point(N3)]);
    }

    #[test]
    fn route_between_validates_inputs() {
        let g = helpers::street();
        let cfg = RoutingConfig::default();
        assert!(matches!(
            route_between(&AStarPlanner, &g, &[], &cfg),
            Err(RouteError::TooFewWaypoints(0))
        ));

        let bad = RoutingConfig { max_span_m: -1.0, ..RoutingConfig::default() };
        assert!(matches!(
            route_between(&AStarPlanner, &g, &[point(N1)], &bad),
            Err(RouteError::Geo(GeoError::Config(_)))
        ));

        let empty = rp_graph::GraphBuilder::new().build().unwrap();
        assert!(matches!(
            route_between(&AStarPlanner, &empty, &[point(N2)], &cfg),
            Err(RouteError::NoNearbyNode(_))
        ));
    }
}
