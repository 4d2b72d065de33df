// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint state that decides which parts of a shape are hittable.

bitflags::bitflags! {
    /// Which paints are present on a shape.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PaintFlags: u8 {
        /// The interior is filled.
        const FILL = 0b0000_0001;
        /// The outline is stroked.
        const STROKE = 0b0000_0010;
        /// The shape is used as a clip path for other shapes.
        ///
        /// Clip geometry is always tested as a solid region, whatever its paints.
        const CLIP_PATH_TARGET = 0b0000_0100;
    }
}

/// Fill rule for shapes whose interior is defined by a winding number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Inside when the winding number is non-zero.
    #[default]
    NonZero,
    /// Inside when the winding number is odd.
    EvenOdd,
}

impl FillRule {
    pub(crate) fn is_inside(self, winding: i32) -> bool {
        match self {
            Self::NonZero => winding != 0,
            Self::EvenOdd => winding % 2 != 0,
        }
    }
}

/// Resolved paint and width settings for one hit test.
///
/// `line_width` is the rendered stroke width. `extra_hit_tolerance` widens the
/// stroke for hit testing only; it never affects rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitStyle {
    /// Paints present on the shape.
    pub paint: PaintFlags,
    /// Stroke width in local units.
    pub line_width: f64,
    /// Additional width added to `line_width` for hit testing.
    pub extra_hit_tolerance: f64,
}

impl Default for HitStyle {
    fn default() -> Self {
        Self {
            paint: PaintFlags::FILL,
            line_width: 0.0,
            extra_hit_tolerance: 0.0,
        }
    }
}

impl HitStyle {
    /// Fill only, no stroke.
    pub const fn fill() -> Self {
        Self {
            paint: PaintFlags::FILL,
            line_width: 0.0,
            extra_hit_tolerance: 0.0,
        }
    }

    /// Stroke only, with the given width.
    pub const fn stroke(line_width: f64) -> Self {
        Self {
            paint: PaintFlags::STROKE,
            line_width,
            extra_hit_tolerance: 0.0,
        }
    }

    /// Fill and stroke, with the given stroke width.
    pub const fn fill_and_stroke(line_width: f64) -> Self {
        Self {
            paint: PaintFlags::FILL.union(PaintFlags::STROKE),
            line_width,
            extra_hit_tolerance: 0.0,
        }
    }

    /// Return a copy with the given extra hit tolerance.
    #[must_use]
    pub const fn with_extra_hit_tolerance(mut self, extra: f64) -> Self {
        self.extra_hit_tolerance = extra;
        self
    }

    /// Return a copy with the given paint flags.
    #[must_use]
    pub const fn with_paint(mut self, paint: PaintFlags) -> Self {
        self.paint = paint;
        self
    }

    /// Stroke width used for hit testing: `line_width + extra_hit_tolerance`.
    pub fn effective_width(&self) -> f64 {
        self.line_width + self.extra_hit_tolerance
    }

    /// Half of [`Self::effective_width`].
    ///
    /// Returns `None` when either width is negative or not finite; such a
    /// style never hits anything.
    pub fn half_width(&self) -> Option<f64> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        if valid(self.line_width) && valid(self.extra_hit_tolerance) {
            Some(self.effective_width() / 2.0)
        } else {
            None
        }
    }

    pub(crate) fn coverage(&self) -> Coverage {
        let paint = self.paint;
        if paint.contains(PaintFlags::CLIP_PATH_TARGET)
            || paint.contains(PaintFlags::FILL | PaintFlags::STROKE)
        {
            Coverage::Solid
        } else if paint.contains(PaintFlags::FILL) {
            Coverage::Fill
        } else if paint.contains(PaintFlags::STROKE) {
            Coverage::Stroke
        } else {
            Coverage::Nothing
        }
    }
}

/// The region a closed shape exposes to hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Coverage {
    /// Interior plus the stroke band around the outline.
    Solid,
    /// Interior only.
    Fill,
    /// Stroke band only.
    Stroke,
    /// Not hittable.
    Nothing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_from_paint() {
        assert_eq!(HitStyle::fill().coverage(), Coverage::Fill);
        assert_eq!(HitStyle::stroke(1.0).coverage(), Coverage::Stroke);
        assert_eq!(HitStyle::fill_and_stroke(1.0).coverage(), Coverage::Solid);
        let clip = HitStyle::stroke(1.0).with_paint(PaintFlags::CLIP_PATH_TARGET);
        assert_eq!(clip.coverage(), Coverage::Solid);
        let none = HitStyle::fill().with_paint(PaintFlags::empty());
        assert_eq!(none.coverage(), Coverage::Nothing);
    }

    #[test]
    fn half_width_includes_tolerance() {
        let style = HitStyle::stroke(4.0).with_extra_hit_tolerance(2.0);
        assert_eq!(style.half_width(), Some(3.0));
        assert_eq!(HitStyle::stroke(-1.0).half_width(), None);
        assert_eq!(HitStyle::stroke(f64::NAN).half_width(), None);
        assert_eq!(
            HitStyle::stroke(1.0)
                .with_extra_hit_tolerance(f64::INFINITY)
                .half_width(),
            None
        );
    }

    #[test]
    fn even_odd_and_non_zero() {
        assert!(FillRule::NonZero.is_inside(2));
        assert!(!FillRule::EvenOdd.is_inside(2));
        assert!(FillRule::EvenOdd.is_inside(-1));
        assert!(!FillRule::NonZero.is_inside(0));
    }
}
