// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles with optional rounded corners.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::PaintedHitTest;
use crate::distance::{finite_point, valid_length};
use crate::style::{Coverage, HitStyle};

/// Rectangle anchored at its top-left corner, with a uniform corner radius.
///
/// Negative sizes are invalid and never hit; the corner radius is clamped to
/// half of the shorter side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    /// Top-left corner in local coordinates.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
    /// Corner radius; `0.0` for sharp corners.
    pub corner_radius: f64,
}

impl RectShape {
    /// Create a sharp-cornered rectangle.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            corner_radius: 0.0,
        }
    }

    /// Return a copy with the given corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Signed distance from `pt` to the outline: negative inside, positive outside.
    ///
    /// Returns `None` for invalid geometry.
    fn signed_distance(&self, pt: Point) -> Option<f64> {
        let Size { width, height } = self.size;
        if !(valid_length(width)
            && valid_length(height)
            && self.corner_radius.is_finite()
            && finite_point(self.origin)
            && finite_point(pt))
        {
            return None;
        }
        let half = Vec2::new(width / 2.0, height / 2.0);
        let r = self.corner_radius.clamp(0.0, half.x.min(half.y));
        let center = self.origin + half;
        let q = Vec2::new(
            (pt.x - center.x).abs() - (half.x - r),
            (pt.y - center.y).abs() - (half.y - r),
        );
        let outside = Vec2::new(q.x.max(0.0), q.y.max(0.0)).hypot();
        let inside = q.x.max(q.y).min(0.0);
        Some(outside + inside - r)
    }
}

impl PaintedHitTest for RectShape {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        let Some(h) = style.half_width() else {
            return false;
        };
        let Some(sd) = self.signed_distance(pt) else {
            return false;
        };
        match style.coverage() {
            Coverage::Solid => sd <= h,
            Coverage::Fill => sd <= 0.0,
            Coverage::Stroke => sd.abs() <= h,
            Coverage::Nothing => false,
        }
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> RectShape {
        RectShape::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0))
    }

    #[test]
    fn fill_is_closed_box() {
        let r = square();
        let style = HitStyle::fill();
        assert!(r.hit_test(Point::new(50.0, 25.0), &style));
        assert!(r.hit_test(Point::new(0.0, 0.0), &style));
        assert!(r.hit_test(Point::new(100.0, 50.0), &style));
        assert!(!r.hit_test(Point::new(100.5, 25.0), &style));
    }

    #[test]
    fn stroke_is_a_band_around_the_outline() {
        let r = square();
        let style = HitStyle::stroke(4.0);
        assert!(r.hit_test(Point::new(50.0, 1.5), &style));
        assert!(r.hit_test(Point::new(50.0, -1.5), &style));
        assert!(r.hit_test(Point::new(101.0, 25.0), &style));
        assert!(!r.hit_test(Point::new(50.0, 25.0), &style));
        assert!(!r.hit_test(Point::new(50.0, -3.0), &style));
        // Sharp outer corner: the band is rounded outside the corner.
        assert!(r.hit_test(Point::new(-1.0, -1.0), &style));
        assert!(!r.hit_test(Point::new(-1.9, -1.9), &style));
    }

    #[test]
    fn fill_and_stroke_is_union() {
        let r = square();
        let style = HitStyle::fill_and_stroke(4.0);
        assert!(r.hit_test(Point::new(50.0, 25.0), &style));
        assert!(r.hit_test(Point::new(50.0, -2.0), &style));
        assert!(!r.hit_test(Point::new(50.0, -2.5), &style));
    }

    #[test]
    fn rounded_corners_cut_the_fill() {
        let r = square().with_corner_radius(10.0);
        let style = HitStyle::fill();
        assert!(!r.hit_test(Point::new(1.0, 1.0), &style));
        assert!(r.hit_test(Point::new(10.0, 1.0), &style));
        assert!(r.hit_test(Point::new(3.0, 3.0), &style));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        // Radius clamps to 25: the shape is a stadium.
        let r = square().with_corner_radius(1000.0);
        let style = HitStyle::fill();
        assert!(r.hit_test(Point::new(50.0, 25.0), &style));
        assert!(r.hit_test(Point::new(25.0, 0.0), &style));
        assert!(!r.hit_test(Point::new(2.0, 2.0), &style));
    }

    #[test]
    fn thick_stroke_reaches_the_center() {
        let r = RectShape::new(Point::ZERO, Size::new(10.0, 10.0));
        assert!(r.hit_test(Point::new(5.0, 5.0), &HitStyle::stroke(10.0)));
        assert!(!r.hit_test(Point::new(5.0, 5.0), &HitStyle::stroke(9.0)));
    }

    #[test]
    fn invalid_rects_never_hit() {
        let style = HitStyle::fill();
        let negative = RectShape::new(Point::ZERO, Size::new(-10.0, 10.0));
        assert!(!negative.hit_test(Point::new(-5.0, 5.0), &style));
        let nan = square().with_corner_radius(f64::NAN);
        assert!(!nan.hit_test(Point::new(50.0, 25.0), &style));
        assert!(!square().hit_test(Point::new(f64::NAN, 25.0), &style));
    }
}
