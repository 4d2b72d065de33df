// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed polygons.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::PaintedHitTest;
use crate::distance::{chain_distance, edge_winding, finite_point, points_bounds};
use crate::style::{Coverage, FillRule, HitStyle};

/// A closed polygon. The edge from the last vertex back to the first is implied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonShape {
    /// Vertices in local coordinates.
    pub points: Vec<Point>,
    /// Rule deciding which regions are inside.
    pub fill_rule: FillRule,
}

impl PolygonShape {
    /// Create a non-zero polygon.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
            fill_rule: FillRule::NonZero,
        }
    }

    /// Return a copy with the given fill rule.
    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    fn is_inside(&self, pt: Point) -> bool {
        self.points.len() >= 3 && self.fill_rule.is_inside(winding(&self.points, pt))
    }
}

/// Winding number of the closed polygon around `pt`.
fn winding(points: &[Point], pt: Point) -> i32 {
    let n = points.len();
    (0..n)
        .map(|i| edge_winding(points[i], points[(i + 1) % n], pt))
        .sum()
}

impl PaintedHitTest for PolygonShape {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        if !self.points.iter().copied().all(finite_point) || !finite_point(pt) {
            return false;
        }
        let Some(h) = style.half_width() else {
            return false;
        };
        let on_stroke = || chain_distance(pt, &self.points, true) <= h;
        match style.coverage() {
            Coverage::Solid => self.is_inside(pt) || on_stroke(),
            Coverage::Fill => self.is_inside(pt),
            Coverage::Stroke => on_stroke(),
            Coverage::Nothing => false,
        }
    }

    fn local_bounds(&self) -> Rect {
        points_bounds(&self.points)
    }
}
