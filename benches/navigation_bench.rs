//! Pathfinding and direction-resolution benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use wayfarer::avatar::resolve_direction;
use wayfarer::graph::{NavigationGraph, Node, NodeId, PayloadRef};
use wayfarer::util::easing::EasingFunction;

fn grid_id(x: usize, z: usize) -> NodeId {
    NodeId::new(format!("n{x}_{z}"))
}

/// `side × side` 4-connected grid.
fn grid(side: usize) -> NavigationGraph {
    let mut nodes = Vec::with_capacity(side * side);
    for z in 0..side {
        for x in 0..side {
            let mut neighbors = Vec::new();
            if x > 0 {
                neighbors.push(grid_id(x - 1, z));
            }
            if x + 1 < side {
                neighbors.push(grid_id(x + 1, z));
            }
            if z > 0 {
                neighbors.push(grid_id(x, z - 1));
            }
            if z + 1 < side {
                neighbors.push(grid_id(x, z + 1));
            }
            nodes.push(Node::new(
                grid_id(x, z),
                Vec3::new(x as f32, 0.0, z as f32),
                PayloadRef::new(format!("p{x}_{z}")),
                neighbors,
            ));
        }
    }
    NavigationGraph::new(nodes).expect("grid is valid")
}

fn pathfind_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathfind_corner_to_corner");
    for side in [4, 16, 64] {
        let graph = grid(side);
        let from = grid_id(0, 0);
        let to = grid_id(side - 1, side - 1);
        group.bench_function(format!("{side}x{side}"), |b| {
            b.iter(|| black_box(graph.pathfind(black_box(&from), black_box(&to))))
        });
    }
    group.finish();
}

fn direction_benchmark(c: &mut Criterion) {
    let graph = grid(8);
    let centre = grid_id(4, 4);
    c.bench_function("resolve_direction", |b| {
        b.iter(|| {
            black_box(
                resolve_direction(&graph, &centre, black_box(Vec2::new(0.7, -0.7)), 0.3)
                    .map(|choice| choice.score),
            )
        })
    });
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

criterion_group!(
    benches,
    pathfind_benchmark,
    direction_benchmark,
    easing_benchmark
);
criterion_main!(benches);
