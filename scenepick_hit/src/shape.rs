// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of pickable shape kinds.

use kurbo::{Point, Rect};

use crate::PaintedHitTest;
use crate::ellipse::{CircleShape, EllipseShape};
use crate::line::{LineShape, PolylineShape};
use crate::path::PathShape;
use crate::polygon::PolygonShape;
use crate::rect::RectShape;
use crate::style::HitStyle;

/// Geometry of a pickable shape, tagged by kind.
///
/// Adding a shape kind means adding a variant here and a [`PaintedHitTest`]
/// implementation for its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    /// Axis-aligned ellipse.
    Ellipse(EllipseShape),
    /// Circle.
    Circle(CircleShape),
    /// Line segment.
    Line(LineShape),
    /// Rectangle, optionally rounded.
    Rect(RectShape),
    /// Closed polygon.
    Polygon(PolygonShape),
    /// Open polyline.
    Polyline(PolylineShape),
    /// Bézier path.
    Path(PathShape),
}

impl ShapeGeometry {
    /// Short name of the kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Ellipse(_) => "ellipse",
            Self::Circle(_) => "circle",
            Self::Line(_) => "line",
            Self::Rect(_) => "rect",
            Self::Polygon(_) => "polygon",
            Self::Polyline(_) => "polyline",
            Self::Path(_) => "path",
        }
    }

    fn as_hit_test(&self) -> &dyn PaintedHitTest {
        match self {
            Self::Ellipse(s) => s,
            Self::Circle(s) => s,
            Self::Line(s) => s,
            Self::Rect(s) => s,
            Self::Polygon(s) => s,
            Self::Polyline(s) => s,
            Self::Path(s) => s,
        }
    }
}

impl PaintedHitTest for ShapeGeometry {
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool {
        self.as_hit_test().hit_test(pt, style)
    }

    fn local_bounds(&self) -> Rect {
        self.as_hit_test().local_bounds()
    }
}

impl From<EllipseShape> for ShapeGeometry {
    fn from(s: EllipseShape) -> Self {
        Self::Ellipse(s)
    }
}

impl From<CircleShape> for ShapeGeometry {
    fn from(s: CircleShape) -> Self {
        Self::Circle(s)
    }
}

impl From<LineShape> for ShapeGeometry {
    fn from(s: LineShape) -> Self {
        Self::Line(s)
    }
}

impl From<RectShape> for ShapeGeometry {
    fn from(s: RectShape) -> Self {
        Self::Rect(s)
    }
}

impl From<PolygonShape> for ShapeGeometry {
    fn from(s: PolygonShape) -> Self {
        Self::Polygon(s)
    }
}

impl From<PolylineShape> for ShapeGeometry {
    fn from(s: PolylineShape) -> Self {
        Self::Polyline(s)
    }
}

impl From<PathShape> for ShapeGeometry {
    fn from(s: PathShape) -> Self {
        Self::Path(s)
    }
}
