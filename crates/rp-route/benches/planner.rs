use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rp_core::NodeId;
use rp_graph::{Graph, GraphBuilder, RawNode, RawWay, Tags};
use rp_route::{plan, plan_multi};

const SIDE: i64 = 60;
const SPACING_DEG: f64 = 0.0005; // ~55 m

/// Square street grid: one way per row and per column.
fn grid() -> Graph {
    let mut b = GraphBuilder::with_capacity((SIDE * SIDE) as usize, (2 * SIDE) as usize);
    let id = |r: i64, c: i64| r * SIDE + c;
    for r in 0..SIDE {
        for c in 0..SIDE {
            b.add_node(RawNode {
                id:   id(r, c),
                lat:  -33.90 + r as f64 * SPACING_DEG,
                lon:  151.10 + c as f64 * SPACING_DEG,
                tags: Tags::new(),
            });
        }
    }
    for i in 0..SIDE {
        b.add_way(RawWay { id: i, node_ids: (0..SIDE).map(|c| id(i, c)).collect(), tags: Tags::new() });
        b.add_way(RawWay { id: SIDE + i, node_ids: (0..SIDE).map(|r| id(r, i)).collect(), tags: Tags::new() });
    }
    b.build().expect("grid builds")
}

fn bench_planner(c: &mut Criterion) {
    let graph = grid();
    let corner = NodeId(0);
    let opposite = NodeId(SIDE * SIDE - 1);
    let side = NodeId(SIDE - 1);

    c.bench_function("astar_grid_corner_to_corner", |b| {
        b.iter(|| plan(black_box(&graph), black_box(corner), black_box(opposite)).expect("route"))
    });

    c.bench_function("astar_grid_three_waypoints", |b| {
        b.iter(|| plan_multi(black_box(&graph), black_box(&[corner, side, opposite])).expect("route"))
    });

    c.bench_function("build_grid_graph", |b| b.iter(grid));
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
