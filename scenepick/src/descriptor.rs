// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape descriptors: geometry, paint style, and placement of a pickable shape.

use kurbo::{Affine, Point, Rect, Vec2};
use scenepick_hit::{HitStyle, PaintFlags, PaintedHitTest, ShapeGeometry};
use scenepick_index::Aabb2D;

/// Style used to test clip geometry: the clip region is the whole shape,
/// interior and outline alike.
const CLIP_STYLE: HitStyle = HitStyle::fill().with_paint(PaintFlags::CLIP_PATH_TARGET);

/// Everything needed to decide whether a scene point hits a shape.
///
/// The geometry is expressed in local coordinates. A scene point `p` maps to
/// the local point `transform.inverse() * p + origin`, so `origin` is the
/// offset between the shape's drawing origin and its geometry (for example,
/// the top-left of an ellipse's bounding box when the geometry is centered on
/// its radii).
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    /// Geometry in local coordinates.
    pub geometry: ShapeGeometry,
    /// Paint flags and widths.
    pub style: HitStyle,
    /// Offset added to the inverse-transformed scene point.
    pub origin: Vec2,
    /// Local-to-scene transform.
    pub transform: Affine,
    /// Optional clip, in the same local coordinates as `geometry`.
    ///
    /// Points outside the clip never hit, whatever the geometry says.
    pub clip: Option<ShapeGeometry>,
}

impl ShapeDescriptor {
    /// Create an untransformed descriptor.
    pub fn new(geometry: impl Into<ShapeGeometry>, style: HitStyle) -> Self {
        Self {
            geometry: geometry.into(),
            style,
            origin: Vec2::ZERO,
            transform: Affine::IDENTITY,
            clip: None,
        }
    }

    /// Return a copy with the given local origin offset.
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Return a copy with the given local-to-scene transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Return a copy clipped to `clip`.
    #[must_use]
    pub fn with_clip(mut self, clip: impl Into<ShapeGeometry>) -> Self {
        self.clip = Some(clip.into());
        self
    }

    /// Map a scene point into local coordinates.
    ///
    /// A singular transform yields a non-finite point, which never hits.
    pub fn to_local(&self, scene: Point) -> Point {
        self.transform.inverse() * scene + self.origin
    }

    /// Exact test of a scene point against the painted shape and its clip.
    pub fn hit_test(&self, scene: Point) -> bool {
        let local = self.to_local(scene);
        if let Some(clip) = &self.clip
            && !clip.hit_test(local, &CLIP_STYLE)
        {
            return false;
        }
        self.geometry.hit_test(local, &self.style)
    }

    /// Conservative scene-space bounds: every point that can hit lies inside.
    ///
    /// Local bounds are padded by the stroke half-width, clipped, then mapped
    /// through the transform. Rotation and shear make the result loose.
    pub fn world_bounds(&self) -> Rect {
        let pad = self.style.half_width().unwrap_or(0.0);
        let mut local = self.geometry.local_bounds().inflate(pad, pad);
        if let Some(clip) = &self.clip {
            local = local.intersect(clip.local_bounds());
        }
        self.transform.transform_rect_bbox(local - self.origin)
    }
}

pub(crate) fn rect_to_aabb(r: Rect) -> Aabb2D<f64> {
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}

bitflags::bitflags! {
    /// Shape flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ShapeFlags: u8 {
        /// Shape is visible.
        const VISIBLE  = 0b0000_0001;
        /// Shape is pickable.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ShapeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

impl ShapeFlags {
    /// Shapes take part in picking only when both visible and pickable.
    pub const fn is_hit_testable(self) -> bool {
        self.contains(Self::VISIBLE.union(Self::PICKABLE))
    }
}

/// A shape as stored in a [`PickScene`](crate::PickScene).
#[derive(Clone, Debug, PartialEq)]
pub struct PickNode {
    /// Geometry, style and placement.
    pub descriptor: ShapeDescriptor,
    /// Paint order. Higher is drawn on top and wins ties.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: ShapeFlags,
}

impl PickNode {
    /// A visible, pickable node at z-index 0.
    pub fn new(descriptor: ShapeDescriptor) -> Self {
        Self {
            descriptor,
            z_index: 0,
            flags: ShapeFlags::default(),
        }
    }

    /// Return a copy with the given z-index.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Return a copy with the given flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ShapeFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl From<ShapeDescriptor> for PickNode {
    fn from(descriptor: ShapeDescriptor) -> Self {
        Self::new(descriptor)
    }
}
