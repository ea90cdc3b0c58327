use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ridepath_core::prelude::*;
use ridepath_core::builtin_graph;

const GRID_SIDE: usize = 60;

/// Square grid with traffic cycling through all levels
fn grid_graph(side: usize) -> RoadGraph {
    let name = |row: usize, col: usize| format!("{row}:{col}");
    let mut builder = GraphBuilder::new();
    for row in 0..side {
        for col in 0..side {
            builder = builder.location(name(row, col));
        }
    }
    for row in 0..side {
        for col in 0..side {
            let traffic = TrafficLevel::ALL[(row + col) % TrafficLevel::COUNT];
            if col + 1 < side {
                builder = builder.connection(name(row, col), name(row, col + 1), 1.0, traffic, "");
            }
            if row + 1 < side {
                builder = builder.connection(name(row, col), name(row + 1, col), 1.0, traffic, "");
            }
        }
    }
    builder.build().expect("grid graph is valid")
}

fn bench_builtin(c: &mut Criterion) {
    let graph = builtin_graph().expect("built-in dataset is valid");
    c.bench_function("find_path builtin Delhi-Chennai", |b| {
        b.iter(|| find_path(black_box(&graph), "Delhi", "Chennai"))
    });
}

fn bench_grid(c: &mut Criterion) {
    let graph = grid_graph(GRID_SIDE);
    let target = format!("{0}:{0}", GRID_SIDE - 1);
    c.bench_function("find_path grid corner-to-corner", |b| {
        b.iter(|| find_path(black_box(&graph), "0:0", &target))
    });
}

criterion_group!(benches, bench_builtin, bench_grid);
criterion_main!(benches);
