// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-only shapes: line segments and open polylines.
//!
//! These shapes have no interior. They are hit within half of
//! [`HitStyle::effective_width`] of their centerline, and their paint flags
//! are not consulted: a line that is drawn at all is drawn by its stroke.
//! Caps and joins are not modeled; the hit region of a segment is the capsule
//! swept by a disc along it.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::PaintedHitTest;
use crate::distance::{chain_distance, finite_point, points_bounds, segment_distance};
use crate::style::HitStyle;

/// A straight line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineShape {
    /// Start point in local coordinates.
    pub p0: Point,
    /// End point in local coordinates.
    pub p1: Point,
}

impl LineShape {
    /// Create a segment.
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
}

impl PaintedHitTest for LineShape {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        let Some(h) = style.half_width() else {
            return false;
        };
        segment_distance(pt, self.p0, self.p1) <= h
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }
}

/// An open chain of line segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineShape {
    /// Vertices in local coordinates.
    pub points: Vec<Point>,
}

impl PolylineShape {
    /// Create a polyline.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }
}

impl PaintedHitTest for PolylineShape {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        if !self.points.iter().copied().all(finite_point) || !finite_point(pt) {
            return false;
        }
        let Some(h) = style.half_width() else {
            return false;
        };
        chain_distance(pt, &self.points, false) <= h
    }

    fn local_bounds(&self) -> Rect {
        points_bounds(&self.points)
    }
}
