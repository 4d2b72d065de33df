// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenepick Index: a keyed 2D AABB index for broad-phase picking.
//!
//! The index maps caller-owned keys (shape handles, node ids, ...) to
//! axis-aligned bounding boxes and answers "which boxes contain this point"
//! and "which boxes touch this rectangle". Answers are conservative: a box
//! that contains the point is always reported, and exact containment is left
//! to a narrow-phase test.
//!
//! - [`IndexGeneric`]: the keyed index over any [`Backend`].
//! - [`Index`]: `f64` index over the [`FlatVec`] backend.
//! - [`GridIndex`]: `f64` index over the [`GridF64`] backend (feature `backend_grid`).
//! - [`Aabb2D`]: inclusive axis-aligned box.
//!
//! ```rust
//! use scenepick_index::{Aabb2D, Index};
//!
//! let mut index: Index<u32> = Index::new();
//! index.insert(1, Aabb2D::from_xywh(0.0, 0.0, 100.0, 100.0)).unwrap();
//! index.insert(2, Aabb2D::from_xywh(50.0, 50.0, 100.0, 100.0)).unwrap();
//!
//! let mut hits = index.query_point(75.0, 75.0);
//! hits.sort_unstable();
//! assert_eq!(hits, [1, 2]);
//!
//! index.remove(1);
//! assert_eq!(index.query_point(75.0, 75.0), [2]);
//! ```
//!
//! Float inputs may be non-finite: NaN boxes never match, infinite boxes match
//! everything they cover.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
mod backends;
mod index;
mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
#[cfg(feature = "backend_grid")]
pub use backends::grid::GridF64;
pub use index::{IndexError, IndexGeneric};
pub use types::Aabb2D;

/// `f64` index over the flat vector backend.
pub type Index<K> = IndexGeneric<f64, K, FlatVec<f64>>;

/// `f64` index over the uniform grid backend.
#[cfg(feature = "backend_grid")]
pub type GridIndex<K> = IndexGeneric<f64, K, GridF64>;
