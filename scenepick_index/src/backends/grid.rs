// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend over `f64`.
//!
//! Every box is registered in each grid cell it touches. A point query then
//! only looks at the slots of a single cell. Boxes that would touch more than
//! [`GridF64::MAX_CELLS_PER_ENTRY`] cells, boxes with non-finite or inverted
//! extents, and boxes reaching past [`GridF64::MAX_CELL_COORD`] cells from the
//! origin live in an overflow list that is scanned linearly.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::backend::Backend;
use crate::types::Aabb2D;

type Cell = (i64, i64);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CellRange {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl CellRange {
    fn cells(self) -> impl Iterator<Item = Cell> {
        (self.y0..=self.y1).flat_map(move |y| (self.x0..=self.x1).map(move |x| (x, y)))
    }
}

#[derive(Copy, Clone, Debug)]
enum Placement {
    Cells(CellRange),
    Overflow,
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    aabb: Aabb2D<f64>,
    placement: Placement,
}

/// Uniform grid backend for `f64` boxes.
pub struct GridF64 {
    inv_cell: f64,
    cell_size: f64,
    cells: HashMap<Cell, SmallVec<[usize; 4]>>,
    entries: Vec<Option<Entry>>,
    overflow: Vec<usize>,
}

impl GridF64 {
    /// Default cell edge length, in scene units.
    pub const DEFAULT_CELL_SIZE: f64 = 64.0;

    /// Boxes touching more cells than this go to the overflow list.
    pub const MAX_CELLS_PER_ENTRY: i64 = 1024;

    /// Largest cell coordinate magnitude mapped to grid cells.
    pub const MAX_CELL_COORD: f64 = 1.0e15;

    /// Create a grid with the given cell edge length.
    ///
    /// A non-finite or non-positive size falls back to [`Self::DEFAULT_CELL_SIZE`].
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            Self::DEFAULT_CELL_SIZE
        };
        Self {
            inv_cell: 1.0 / cell_size,
            cell_size,
            cells: HashMap::new(),
            entries: Vec::new(),
            overflow: Vec::new(),
        }
    }

    /// Cell edge length in use.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cell coordinate of `v`, or `None` when it is non-finite or too far out.
    fn cell_of(&self, v: f64) -> Option<i64> {
        let scaled = v * self.inv_cell;
        (-Self::MAX_CELL_COORD..=Self::MAX_CELL_COORD)
            .contains(&scaled)
            .then(|| floor_to_i64(scaled))
    }

    fn range_of(&self, aabb: &Aabb2D<f64>) -> Option<CellRange> {
        if aabb.is_empty() {
            return None;
        }
        let range = CellRange {
            x0: self.cell_of(aabb.min_x)?,
            y0: self.cell_of(aabb.min_y)?,
            x1: self.cell_of(aabb.max_x)?,
            y1: self.cell_of(aabb.max_y)?,
        };
        let span_x = range.x1.saturating_sub(range.x0).saturating_add(1);
        let span_y = range.y1.saturating_sub(range.y0).saturating_add(1);
        if span_x > Self::MAX_CELLS_PER_ENTRY
            || span_y > Self::MAX_CELLS_PER_ENTRY
            || span_x * span_y > Self::MAX_CELLS_PER_ENTRY
        {
            return None;
        }
        Some(range)
    }

    fn place(&mut self, slot: usize, aabb: Aabb2D<f64>) {
        let placement = match self.range_of(&aabb) {
            Some(range) => {
                for cell in range.cells() {
                    self.cells.entry(cell).or_default().push(slot);
                }
                Placement::Cells(range)
            }
            None => {
                self.overflow.push(slot);
                Placement::Overflow
            }
        };
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(Entry { aabb, placement });
    }

    fn unplace(&mut self, slot: usize) {
        let Some(entry) = self.entries.get_mut(slot).and_then(Option::take) else {
            return;
        };
        match entry.placement {
            Placement::Cells(range) => {
                for cell in range.cells() {
                    if let Some(list) = self.cells.get_mut(&cell) {
                        list.retain(|s| *s != slot);
                        if list.is_empty() {
                            self.cells.remove(&cell);
                        }
                    }
                }
            }
            Placement::Overflow => self.overflow.retain(|s| *s != slot),
        }
    }

    fn live(&self, slot: usize) -> Option<&Entry> {
        self.entries.get(slot).and_then(Option::as_ref)
    }
}

impl Default for GridF64 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_SIZE)
    }
}

impl Debug for GridF64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("GridF64")
            .field("cell_size", &self.cell_size)
            .field("occupied_cells", &self.cells.len())
            .field("alive", &alive)
            .field("overflow", &self.overflow.len())
            .finish_non_exhaustive()
    }
}

impl Backend<f64> for GridF64 {
    fn insert(&mut self, slot: usize, aabb: Aabb2D<f64>) {
        self.unplace(slot);
        self.place(slot, aabb);
    }

    fn update(&mut self, slot: usize, aabb: Aabb2D<f64>) {
        if self.live(slot).is_none() {
            return;
        }
        self.unplace(slot);
        self.place(slot, aabb);
    }

    fn remove(&mut self, slot: usize) {
        self.unplace(slot);
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.entries.clear();
        self.overflow.clear();
    }

    fn visit_point<F: FnMut(usize)>(&self, x: f64, y: f64, mut f: F) {
        // Points outside the mapped range can only lie in overflow boxes.
        if let (Some(cx), Some(cy)) = (self.cell_of(x), self.cell_of(y)) {
            if let Some(list) = self.cells.get(&(cx, cy)) {
                for &slot in list {
                    if self.live(slot).is_some_and(|e| e.aabb.contains_point(x, y)) {
                        f(slot);
                    }
                }
            }
        }
        for &slot in &self.overflow {
            if self.live(slot).is_some_and(|e| e.aabb.contains_point(x, y)) {
                f(slot);
            }
        }
    }

    fn visit_rect<F: FnMut(usize)>(&self, rect: Aabb2D<f64>, mut f: F) {
        let Some(range) = self.range_of(&rect) else {
            // Huge or degenerate query: a linear scan is cheaper than walking cells.
            for (slot, entry) in self.entries.iter().enumerate() {
                if entry.as_ref().is_some_and(|e| e.aabb.overlaps(&rect)) {
                    f(slot);
                }
            }
            return;
        };
        let mut seen: Vec<usize> = Vec::new();
        for cell in range.cells() {
            if let Some(list) = self.cells.get(&cell) {
                seen.extend_from_slice(list);
            }
        }
        seen.extend_from_slice(&self.overflow);
        seen.sort_unstable();
        seen.dedup();
        for slot in seen {
            if self.live(slot).is_some_and(|e| e.aabb.overlaps(&rect)) {
                f(slot);
            }
        }
    }
}

/// `floor` for finite values without `std` or `libm`.
///
/// The cast saturates, so values beyond the `i64` range clamp to its ends.
/// Callers keep `v` within [`GridF64::MAX_CELL_COORD`].
#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating float-to-int conversion is the intended rounding"
)]
fn floor_to_i64(v: f64) -> i64 {
    let t = v as i64;
    if (t as f64) > v { t.saturating_sub(1) } else { t }
}
