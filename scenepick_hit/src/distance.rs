// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small distance and validity helpers shared by the predicates.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, ParamCurveNearest, Point, Rect};

/// Distance from `pt` to the segment `a`-`b`.
///
/// The projection is clamped to the segment, so beyond either end the
/// distance is measured to the endpoint. A zero-length segment is a point.
pub(crate) fn segment_distance(pt: Point, a: Point, b: Point) -> f64 {
    Line::new(a, b).nearest(pt, 0.0).distance_sq.sqrt()
}

/// Minimum distance from `pt` to a chain of segments, optionally closed.
pub(crate) fn chain_distance(pt: Point, points: &[Point], closed: bool) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => (pt - *only).hypot(),
        _ => {
            let open = points
                .windows(2)
                .map(|w| segment_distance(pt, w[0], w[1]))
                .fold(f64::INFINITY, f64::min);
            if closed {
                let (first, last) = (points[0], points[points.len() - 1]);
                open.min(segment_distance(pt, last, first))
            } else {
                open
            }
        }
    }
}

/// Winding contribution of the edge `a`-`b` around `pt`.
///
/// Upward edges crossing the horizontal ray to the right of `pt` count +1,
/// downward edges count -1. Edges are half-open in y so a vertex shared by two
/// edges is counted once.
pub(crate) fn edge_winding(a: Point, b: Point, pt: Point) -> i32 {
    // > 0 when pt is left of a->b.
    let side = (b.x - a.x) * (pt.y - a.y) - (pt.x - a.x) * (b.y - a.y);
    if a.y <= pt.y {
        i32::from(b.y > pt.y && side > 0.0)
    } else {
        -i32::from(b.y <= pt.y && side < 0.0)
    }
}

/// Bounding box of a point list. Empty lists give [`Rect::ZERO`].
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let Some((first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };
    rest.iter()
        .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
}

#[inline]
pub(crate) fn finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// A size parameter is usable when finite and non-negative.
#[inline]
pub(crate) fn valid_length(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
