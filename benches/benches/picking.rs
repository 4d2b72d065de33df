// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for end-to-end picking over a synthetic drawing.
//!
//! The scene is a deterministic canvas of mixed shapes (filled rects, stroked
//! ellipses, lines, polygons) laid out on a jittered grid, roughly what a
//! diagram editor shows on screen.

use core::time::Duration;
use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Size, Vec2};
use scenepick::{
    Backend, EllipseShape, ExactGeometry, FlatVec, GridF64, HitStyle, LineShape, PickQuery,
    PickScene, Picker, PolygonShape, RectShape, ShapeDescriptor,
};

const COLS: u32 = 40;
const ROWS: u32 = 25;
const PITCH: f64 = 30.0;

fn shape(i: u32) -> ShapeDescriptor {
    let col = f64::from(i % COLS);
    let row = f64::from(i / COLS);
    let jitter = f64::from((i * 7_919) % 11) - 5.0;
    let at = Vec2::new(col * PITCH + jitter, row * PITCH - jitter);
    let d = match i % 4 {
        0 => ShapeDescriptor::new(
            RectShape::new(Point::ZERO, Size::new(40.0, 24.0)).with_corner_radius(4.0),
            HitStyle::fill_and_stroke(1.0),
        ),
        1 => ShapeDescriptor::new(
            EllipseShape::new(Point::new(18.0, 12.0), 18.0, 12.0),
            HitStyle::stroke(2.0),
        ),
        2 => ShapeDescriptor::new(
            LineShape::new(Point::ZERO, Point::new(45.0, 20.0)),
            HitStyle::stroke(1.0).with_extra_hit_tolerance(6.0),
        ),
        _ => ShapeDescriptor::new(
            PolygonShape::new(vec![
                Point::new(0.0, 20.0),
                Point::new(15.0, 0.0),
                Point::new(30.0, 20.0),
            ]),
            HitStyle::fill(),
        ),
    };
    d.with_transform(Affine::translate(at))
}

fn build_scene<B: Backend<f64>>(backend: B) -> PickScene<u32, B> {
    let mut scene = PickScene::with_backend(backend);
    for i in 0..COLS * ROWS {
        scene
            .attach(i, shape(i))
            .unwrap_or_else(|e| panic!("attach {i}: {e}"));
    }
    scene
}

fn points() -> Vec<Point> {
    let mut out = Vec::new();
    for iy in 0..=30 {
        for ix in 0..=48 {
            out.push(Point::new(f64::from(ix) * 25.0 + 3.0, f64::from(iy) * 25.0 + 7.0));
        }
    }
    out
}

fn bench_pick<B: Backend<f64>>(g: &mut BenchmarkGroup<'_, WallTime>, name: &str, backend: B) {
    let scene = build_scene(backend);
    let pts = points();
    let picker = Picker::new(ExactGeometry::new(&scene));

    g.bench_function(BenchmarkId::new("pick", name), |b| {
        b.iter(|| {
            for &p in &pts {
                black_box(picker.pick(PickQuery::new(black_box(p))));
            }
        });
    });
    g.bench_function(BenchmarkId::new("pick_all", name), |b| {
        b.iter(|| {
            for &p in &pts {
                black_box(picker.pick_all(PickQuery::new(black_box(p))));
            }
        });
    });
}

fn bench_move_one<B: Backend<f64>>(g: &mut BenchmarkGroup<'_, WallTime>, name: &str, backend: B) {
    let mut scene = build_scene(backend);
    let key = COLS * ROWS / 2;
    let d0 = shape(key);
    let d1 = d0.clone().with_transform(Affine::translate((0.5, 0.0)) * d0.transform);
    let mut toggle = false;

    g.bench_function(BenchmarkId::new("update_descriptor", name), |b| {
        b.iter(|| {
            toggle = !toggle;
            let d = if toggle { d1.clone() } else { d0.clone() };
            black_box(scene.update_descriptor(key, d))
        });
    });
}

fn picking(c: &mut Criterion) {
    let mut g = c.benchmark_group("scenepick");
    g.warm_up_time(Duration::from_secs(1));
    g.measurement_time(Duration::from_secs(3));

    bench_pick(&mut g, "flatvec", FlatVec::<f64>::default());
    bench_pick(&mut g, "grid_f64_64", GridF64::new(64.0));
    bench_move_one(&mut g, "flatvec", FlatVec::<f64>::default());
    bench_move_one(&mut g, "grid_f64_64", GridF64::new(64.0));

    g.finish();
}

criterion_group!(benches, picking);
criterion_main!(benches);
