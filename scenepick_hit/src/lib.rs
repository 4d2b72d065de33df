// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenepick Hit: paint-aware point-in-shape predicates.
//!
//! Each shape kind answers one question: does a point in the shape's local
//! coordinates lie on the part of the shape that is actually painted? The
//! answer depends on the shape's [`HitStyle`]:
//!
//! - fill only: the interior;
//! - stroke only: a band of half-width `(line_width + extra_hit_tolerance) / 2`
//!   around the outline;
//! - fill and stroke, or [`PaintFlags::CLIP_PATH_TARGET`]: interior plus band;
//! - neither: nothing.
//!
//! Ellipses treat "fill and stroke" as a single padded ellipse, and lines and
//! polylines are always tested against their stroke.
//!
//! ```rust
//! use kurbo::Point;
//! use scenepick_hit::{EllipseShape, HitStyle, ShapeGeometry, is_point_in_shape};
//!
//! let shape = ShapeGeometry::from(EllipseShape::new(Point::ZERO, 60.0, 60.0));
//!
//! assert!(is_point_in_shape(&shape, Point::new(0.0, 0.0), &HitStyle::fill()));
//! assert!(!is_point_in_shape(&shape, Point::new(61.0, 0.0), &HitStyle::fill()));
//!
//! // A stroked ring is hollow.
//! let ring = HitStyle::stroke(4.0);
//! assert!(is_point_in_shape(&shape, Point::new(60.0, 0.0), &ring));
//! assert!(!is_point_in_shape(&shape, Point::new(0.0, 0.0), &ring));
//! ```
//!
//! ## Failure semantics
//!
//! Predicates are total. Non-finite or negative sizes, non-finite points and
//! invalid widths all answer "no hit"; nothing panics.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Rect};

mod distance;
mod ellipse;
mod line;
mod path;
mod polygon;
mod rect;
mod shape;
mod style;

pub use ellipse::{CircleShape, EllipseShape};
pub use line::{LineShape, PolylineShape};
pub use path::PathShape;
pub use polygon::PolygonShape;
pub use rect::RectShape;
pub use shape::ShapeGeometry;
pub use style::{FillRule, HitStyle, PaintFlags};

/// Point-in-shape test that honors paint and stroke width.
pub trait PaintedHitTest {
    /// Returns `true` if `pt` (in local coordinates) hits the painted shape.
    fn hit_test(&self, pt: Point, style: &HitStyle) -> bool;

    /// Local bounds of the geometry, without any stroke.
    ///
    /// Callers inflate this by [`HitStyle::half_width`] to cover the stroke band.
    fn local_bounds(&self) -> Rect;
}

/// Test a point against a shape of any kind.
pub fn is_point_in_shape(shape: &ShapeGeometry, pt: Point, style: &HitStyle) -> bool {
    shape.hit_test(pt, style)
}
