// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use core::fmt::Debug;
use core::ops::Add;

/// Axis-aligned bounding box in 2D.
///
/// Bounds are inclusive on every edge: a point lying exactly on `max_x` is
/// contained. The broad phase only has to be conservative, so inclusive
/// edges are the safe choice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2D<T> {
    /// Minimum x.
    pub min_x: T,
    /// Minimum y.
    pub min_y: T,
    /// Maximum x.
    pub max_x: T,
    /// Maximum y.
    pub max_y: T,
}

impl<T: Copy + PartialOrd + Debug> Aabb2D<T> {
    /// Create a box from its extremes.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns `true` if the point lies inside or on the boundary.
    ///
    /// Any comparison involving NaN is false, so a NaN point is never contained.
    #[inline]
    pub fn contains_point(&self, x: T, y: T) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Returns `true` if the box encloses no point at all.
    ///
    /// A box whose extremes are NaN is considered empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min_x <= self.max_x && self.min_y <= self.max_y)
    }

    /// Returns `true` if the two boxes share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Intersection of two boxes. The result may be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min_x: max(self.min_x, other.min_x),
            min_y: max(self.min_y, other.min_y),
            max_x: min(self.max_x, other.max_x),
            max_y: min(self.max_y, other.max_y),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: min(self.min_x, other.min_x),
            min_y: min(self.min_y, other.min_y),
            max_x: max(self.max_x, other.max_x),
            max_y: max(self.max_y, other.max_y),
        }
    }
}

impl<T: Copy + PartialOrd + Debug + Add<Output = T>> Aabb2D<T> {
    /// Create a box from an origin and a size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::new(x, y, x + w, y + h)
    }
}

#[inline]
fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
