// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned ellipses and circles.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::distance::{finite_point, valid_length};
use crate::style::{Coverage, HitStyle};
use crate::PaintedHitTest;

/// Axis-aligned ellipse given by its center and radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseShape {
    /// Center in local coordinates.
    pub center: Point,
    /// Radii along x and y.
    pub radii: Vec2,
}

impl EllipseShape {
    /// Create an ellipse.
    pub const fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            center,
            radii: Vec2::new(rx, ry),
        }
    }
}

/// `dx²/rx² + dy²/ry²`: at most 1 inside the ellipse with radii `rx`, `ry`.
#[inline]
fn normalized_distance(d: Vec2, rx: f64, ry: f64) -> f64 {
    d.x * d.x / (rx * rx) + d.y * d.y / (ry * ry)
}

impl PaintedHitTest for EllipseShape {
    /// Fill and stroke together (or a clip target) are tested as one padded
    /// solid ellipse, not as a fill plus a separate ring.
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        let (rx, ry) = (self.radii.x, self.radii.y);
        if !(valid_length(rx) && valid_length(ry) && finite_point(self.center)) {
            return false;
        }
        let Some(h) = style.half_width() else {
            return false;
        };
        let d = pt - self.center;
        let within_outer = || normalized_distance(d, rx + h, ry + h) <= 1.0;
        match style.coverage() {
            Coverage::Solid => within_outer(),
            Coverage::Fill => normalized_distance(d, rx, ry) <= 1.0,
            Coverage::Stroke => {
                let (irx, iry) = (rx - h, ry - h);
                // A collapsed inner ellipse has no inside to exclude.
                let outside_inner =
                    irx <= 0.0 || iry <= 0.0 || normalized_distance(d, irx, iry) >= 1.0;
                outside_inner && within_outer()
            }
            Coverage::Nothing => false,
        }
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(2.0 * self.radii.x, 2.0 * self.radii.y))
    }
}

/// Circle given by its center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    /// Center in local coordinates.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl CircleShape {
    /// Create a circle.
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl PaintedHitTest for CircleShape {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        let r = self.radius;
        if !(valid_length(r) && finite_point(self.center)) {
            return false;
        }
        let Some(h) = style.half_width() else {
            return false;
        };
        let d = (pt - self.center).hypot();
        match style.coverage() {
            Coverage::Solid => d <= r + h,
            Coverage::Fill => d <= r,
            Coverage::Stroke => (d - r).abs() <= h,
            Coverage::Nothing => false,
        }
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(2.0 * self.radius, 2.0 * self.radius))
    }
}
