// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use scenepick_index::{Aabb2D, Backend, FlatVec, GridF64, IndexGeneric};

fn gen_grid_rects(n: usize, cell: f64, scale: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::from_xywh(x0, y0, cell * scale, cell * scale));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `count` random points inside `[0, extent)²`.
fn gen_points(count: usize, extent: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
    (0..count)
        .map(|_| (rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_insert(c: &mut Criterion, group_name: &str, scale: f64) {
    fn bench<F, B>(b: &mut criterion::Bencher<'_>, rects: &[Aabb2D<f64>], make_index: F)
    where
        F: Fn() -> IndexGeneric<f64, u32, B> + Clone + 'static,
        B: Backend<f64> + 'static,
    {
        b.iter_batched(
            make_index,
            |mut idx| {
                for (i, r) in rects.iter().copied().enumerate() {
                    let _ = idx.insert(i as u32, r);
                }
                idx
            },
            BatchSize::SmallInput,
        );
    }

    let mut group = c.benchmark_group(group_name);
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0, scale);
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_function(BenchmarkId::new("FlatVec", n), |b| {
            bench(b, &rects, IndexGeneric::<f64, u32, FlatVec<f64>>::new);
        });
        group.bench_function(BenchmarkId::new("Grid(64.)", n), |b| {
            bench(b, &rects, || {
                IndexGeneric::<f64, u32, GridF64>::with_backend(GridF64::new(64.0))
            });
        });
    }
    group.finish();
}

fn bench_visit_point(c: &mut Criterion, group_name: &str, scale: f64) {
    fn bench<B: Backend<f64>>(
        b: &mut criterion::Bencher<'_>,
        rects: &[Aabb2D<f64>],
        points: &[(f64, f64)],
        mut idx: IndexGeneric<f64, u32, B>,
    ) {
        for (i, r) in rects.iter().copied().enumerate() {
            let _ = idx.insert(i as u32, r);
        }
        b.iter(|| {
            let mut total = 0usize;
            for &(x, y) in points {
                idx.visit_point(x, y, |_, _| total += 1);
            }
            black_box(total)
        });
    }

    let mut group = c.benchmark_group(group_name);
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0, scale);
        let points = gen_points(1_000, n as f64 * 10.0);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(BenchmarkId::new("FlatVec", n), |b| {
            bench(b, &rects, &points, IndexGeneric::<f64, u32, FlatVec<f64>>::new());
        });
        group.bench_function(BenchmarkId::new("Grid(64.)", n), |b| {
            bench(b, &rects, &points, IndexGeneric::with_backend(GridF64::new(64.0)));
        });
    }
    group.finish();
}

fn bench_insert_grid(c: &mut Criterion) {
    bench_insert(c, "scenepick_index_insert_grid_f64", 1.0);
}

fn bench_insert_overlap(c: &mut Criterion) {
    bench_insert(c, "scenepick_index_insert_overlap_f64", 3.0);
}

fn bench_visit_point_grid(c: &mut Criterion) {
    bench_visit_point(c, "scenepick_index_visit_point_grid_f64", 1.0);
}

fn bench_visit_point_overlap(c: &mut Criterion) {
    bench_visit_point(c, "scenepick_index_visit_point_overlap_f64", 3.0);
}

fn bench_update_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenepick_index_update_heavy_f64");
    let rects = gen_grid_rects(64, 10.0, 1.0);
    group.bench_function("Grid(64.)", |b| {
        b.iter_batched(
            || {
                let mut idx = IndexGeneric::<f64, u32, GridF64>::with_backend(GridF64::new(64.0));
                for (i, r) in rects.iter().copied().enumerate() {
                    let _ = idx.insert(i as u32, r);
                }
                idx
            },
            |mut idx| {
                for (i, r) in rects.iter().enumerate() {
                    let moved = Aabb2D::from_xywh(r.min_x + 5.0, r.min_y + 5.0, 10.0, 10.0);
                    let _ = idx.update(i as u32, moved);
                }
                black_box(idx.query_point(320.0, 320.0).len())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_grid,
    bench_insert_overlap,
    bench_visit_point_grid,
    bench_visit_point_overlap,
    bench_update_heavy,
);
criterion_main!(benches);
