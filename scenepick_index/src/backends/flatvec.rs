// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed linear-scan backend.
//!
//! Live boxes sit contiguously in one vector, so a query touches only shapes
//! that are currently indexed. Removal swaps the last live box into the hole,
//! which keeps the vector packed but changes visit order.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Linear-scan backend over packed live boxes.
///
/// Works with any scalar. Queries are `O(n)` in the number of live boxes,
/// which is the right trade for scenes of up to a few hundred shapes and for
/// scenes that churn faster than a grid can be kept tidy.
pub struct FlatVec<T> {
    /// `(slot, box)` pairs for every live slot.
    live: Vec<(usize, Aabb2D<T>)>,
    /// Position of each slot in `live`.
    position: Vec<Option<usize>>,
}

impl<T> FlatVec<T> {
    /// Number of live boxes.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if no box is live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    fn position_of(&self, slot: usize) -> Option<usize> {
        self.position.get(slot).copied().flatten()
    }
}

impl<T> Default for FlatVec<T> {
    fn default() -> Self {
        Self {
            live: Vec::new(),
            position: Vec::new(),
        }
    }
}

impl<T> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("live", &self.live.len())
            .field("slots", &self.position.len())
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for FlatVec<T> {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<T>) {
        if let Some(pos) = self.position_of(slot) {
            self.live[pos].1 = aabb;
            return;
        }
        if self.position.len() <= slot {
            self.position.resize(slot + 1, None);
        }
        self.position[slot] = Some(self.live.len());
        self.live.push((slot, aabb));
    }

    fn update(&mut self, slot: usize, aabb: Aabb2D<T>) {
        if let Some(pos) = self.position_of(slot) {
            self.live[pos].1 = aabb;
        }
    }

    fn remove(&mut self, slot: usize) {
        let Some(pos) = self.position.get_mut(slot).and_then(Option::take) else {
            return;
        };
        self.live.swap_remove(pos);
        if let Some(&(moved, _)) = self.live.get(pos) {
            self.position[moved] = Some(pos);
        }
    }

    fn clear(&mut self) {
        self.live.clear();
        self.position.clear();
    }

    fn visit_point<F: FnMut(usize)>(&self, x: T, y: T, mut f: F) {
        self.live
            .iter()
            .filter(|(_, aabb)| aabb.contains_point(x, y))
            .for_each(|&(slot, _)| f(slot));
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<T>, mut f: F) {
        self.live
            .iter()
            .filter(|(_, aabb)| aabb.overlaps(&rect))
            .for_each(|&(slot, _)| f(slot));
    }
}
