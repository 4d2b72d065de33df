// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbitrary Bézier paths.

use alloc::borrow::Cow;

use kurbo::{BezPath, ParamCurveNearest, PathEl, Point, Rect, Shape};

use crate::PaintedHitTest;
use crate::distance::finite_point;
use crate::style::{Coverage, FillRule, HitStyle};

/// Accuracy passed to curve nearest-point searches for the stroke test.
const NEAREST_ACCURACY: f64 = 1e-6;

/// A Bézier path. Every subpath is implicitly closed for the fill test, the
/// way renderers fill open subpaths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathShape {
    /// Path in local coordinates.
    pub path: BezPath,
    /// Rule deciding which regions are inside.
    pub fill_rule: FillRule,
}

impl PathShape {
    /// Create a non-zero path.
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            fill_rule: FillRule::NonZero,
        }
    }

    /// Return a copy with the given fill rule.
    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    fn is_finite(&self) -> bool {
        self.path.elements().iter().all(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => finite_point(p),
            PathEl::QuadTo(p1, p2) => finite_point(p1) && finite_point(p2),
            PathEl::CurveTo(p1, p2, p3) => {
                finite_point(p1) && finite_point(p2) && finite_point(p3)
            }
            PathEl::ClosePath => true,
        })
    }

    /// The path with every open subpath closed, as it is filled.
    fn fill_path(&self) -> Cow<'_, BezPath> {
        let els = self.path.elements();
        let ends_open = els.last().is_some_and(|el| *el != PathEl::ClosePath);
        let reopens = els
            .windows(2)
            .any(|w| matches!(w[1], PathEl::MoveTo(_)) && w[0] != PathEl::ClosePath);
        if !ends_open && !reopens {
            return Cow::Borrowed(&self.path);
        }
        let mut closed = BezPath::new();
        let mut open = false;
        for &el in els {
            if open && matches!(el, PathEl::MoveTo(_)) {
                closed.close_path();
            }
            open = el != PathEl::ClosePath;
            closed.push(el);
        }
        if open {
            closed.close_path();
        }
        Cow::Owned(closed)
    }

    /// Exact winding number of the implicitly closed path around `pt`.
    fn winding(&self, pt: Point) -> i32 {
        self.fill_path().winding(pt)
    }

    fn within_stroke(&self, pt: Point, half_width: f64) -> bool {
        let limit = half_width * half_width;
        self.path
            .segments()
            .any(|seg| seg.nearest(pt, NEAREST_ACCURACY).distance_sq <= limit)
    }
}

impl PaintedHitTest for PathShape {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        if !finite_point(pt) || !self.is_finite() {
            return false;
        }
        let Some(h) = style.half_width() else {
            return false;
        };
        let inside = || self.fill_rule.is_inside(self.winding(pt));
        match style.coverage() {
            Coverage::Solid => inside() || self.within_stroke(pt, h),
            Coverage::Fill => inside(),
            Coverage::Stroke => self.within_stroke(pt, h),
            Coverage::Nothing => false,
        }
    }

    fn local_bounds(&self) -> Rect {
        self.path.bounding_box()
    }
}
