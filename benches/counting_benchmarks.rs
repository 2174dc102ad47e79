//! Benchmarks for `count_paths` over growing open rectangular grids.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamgrid::prelude::*;

fn open_grid(width: usize, height: usize) -> Grid {
    let area = width * height;
    let mut codes = vec![0u64; area];
    codes[0] = 2;
    codes[area - 1] = 3;
    Grid::from_codes(width, height, &codes).unwrap()
}

/// Benchmark counting on square grids of growing side length.
fn bench_square_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("SquareGrid");

    for side in [2, 3, 4, 5].iter() {
        let grid = open_grid(*side, *side);
        group.bench_with_input(BenchmarkId::new("side", side), side, |b, _| {
            b.iter(|| count_paths(black_box(&grid)))
        });
    }

    group.finish();
}

/// Benchmark counting on a fixed-height strip of growing width, the
/// dimension that drives the DP's per-row state space.
fn bench_growing_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("GrowingWidth");

    for width in [3, 4, 5, 6].iter() {
        let grid = open_grid(*width, 3);
        group.bench_with_input(BenchmarkId::new("width", width), width, |b, _| {
            b.iter(|| count_paths(black_box(&grid)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square_grids, bench_growing_width);
criterion_main!(benches);
