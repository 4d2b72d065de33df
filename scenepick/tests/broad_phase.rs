// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The broad phase never drops a shape the narrow phase would hit.

use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};
use scenepick::{
    CircleShape, EllipseShape, HitStyle, LineShape, PathShape, PickScene, PolygonShape,
    PolylineShape, RectShape, ShapeDescriptor,
};

fn shapes() -> Vec<ShapeDescriptor> {
    let mut curve = BezPath::new();
    curve.move_to((0.0, 0.0));
    curve.quad_to((40.0, 60.0), (80.0, 0.0));
    curve.curve_to((60.0, -20.0), (20.0, -20.0), (0.0, 0.0));

    vec![
        ShapeDescriptor::new(
            EllipseShape::new(Point::new(30.0, 20.0), 30.0, 20.0),
            HitStyle::stroke(4.0).with_extra_hit_tolerance(6.0),
        )
        .with_origin(Vec2::new(30.0, 20.0))
        .with_transform(Affine::translate((200.0, 50.0)) * Affine::rotate(0.4)),
        ShapeDescriptor::new(
            CircleShape::new(Point::new(10.0, 10.0), 15.0),
            HitStyle::fill_and_stroke(3.0),
        )
        .with_transform(Affine::translate((-40.0, 80.0)) * Affine::skew(0.5, 0.0)),
        ShapeDescriptor::new(
            LineShape::new(Point::new(0.0, 0.0), Point::new(60.0, 25.0)),
            HitStyle::stroke(2.0).with_extra_hit_tolerance(10.0),
        ),
        ShapeDescriptor::new(
            RectShape::new(Point::new(0.0, 0.0), Size::new(50.0, 30.0)).with_corner_radius(8.0),
            HitStyle::fill_and_stroke(5.0),
        )
        .with_origin(Vec2::new(25.0, 15.0))
        .with_transform(Affine::translate((100.0, 150.0)) * Affine::rotate(-0.7)),
        ShapeDescriptor::new(
            PolygonShape::new(vec![
                Point::new(0.0, 0.0),
                Point::new(40.0, 5.0),
                Point::new(20.0, 35.0),
            ]),
            HitStyle::stroke(3.0).with_extra_hit_tolerance(2.0),
        )
        .with_origin(Vec2::new(-10.0, 5.0)),
        ShapeDescriptor::new(
            PolylineShape::new(vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 30.0),
                Point::new(45.0, 5.0),
            ]),
            HitStyle::stroke(4.0),
        )
        .with_transform(Affine::translate((300.0, 0.0)) * Affine::skew(0.0, 0.3)),
        ShapeDescriptor::new(PathShape::new(curve), HitStyle::fill_and_stroke(2.0))
            .with_transform(
                Affine::translate((50.0, 250.0)) * Affine::rotate(1.1) * Affine::scale(1.5),
            ),
        ShapeDescriptor::new(
            RectShape::new(Point::new(0.0, 0.0), Size::new(40.0, 40.0)),
            HitStyle::fill(),
        )
        .with_clip(CircleShape::new(Point::new(40.0, 40.0), 25.0))
        .with_transform(Affine::translate((250.0, 200.0)) * Affine::rotate(0.25)),
    ]
}

fn contains_inclusive(r: Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

#[test]
fn every_exact_hit_is_a_broad_phase_candidate() {
    let mut scene = PickScene::new();
    let descriptors = shapes();
    for (key, d) in descriptors.iter().enumerate() {
        scene.attach(key, d.clone()).unwrap();
    }

    const STEPS: u32 = 48;
    for (key, d) in descriptors.iter().enumerate() {
        let bounds = d.world_bounds();
        let area = bounds.inflate(8.0, 8.0);
        let mut hits = 0;
        for i in 0..=STEPS {
            for j in 0..=STEPS {
                let p = Point::new(
                    area.x0 + area.width() * f64::from(i) / f64::from(STEPS),
                    area.y0 + area.height() * f64::from(j) / f64::from(STEPS),
                );
                if !d.hit_test(p) {
                    continue;
                }
                hits += 1;
                assert!(
                    contains_inclusive(bounds, p),
                    "shape {key}: hit at {p:?} outside bounds {bounds:?}"
                );
                assert!(
                    scene.candidates_at(p).contains(&key),
                    "shape {key}: hit at {p:?} missing from the index"
                );
            }
        }
        assert!(hits > 0, "shape {key} was never hit by the sampling grid");
    }
}

#[test]
fn clipped_shape_bounds_shrink_to_the_clip() {
    let clipped = ShapeDescriptor::new(
        RectShape::new(Point::ZERO, Size::new(100.0, 100.0)),
        HitStyle::fill_and_stroke(4.0),
    )
    .with_clip(RectShape::new(Point::new(20.0, 20.0), Size::new(10.0, 10.0)));
    assert_eq!(clipped.world_bounds(), Rect::new(20.0, 20.0, 30.0, 30.0));
}
