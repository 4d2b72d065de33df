// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pick strategies.
//!
//! A [`PickAdapter`] turns a [`PickQuery`] into the target under the pointer.
//! The [`Picker`](crate::Picker) is handed one adapter at construction and
//! never looks past this trait, so switching strategy means switching adapter.
//!
//! - [`ExactGeometry`]: broad phase over world bounds, narrow phase over
//!   painted geometry. Works anywhere.
//! - [`PlatformDelegated`]: asks the host's own hit testing for an element id
//!   and maps it through a registry.
//! - [`PixelBufferAdapter`]: reads an id-encoded color from an offscreen pick
//!   buffer and maps it through a registry.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::query::PickQuery;

mod geometry;
mod pixel;
mod platform;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

pub use geometry::ExactGeometry;
pub use pixel::{
    MAX_PICK_ID, PickBuffer, PixelBufferAdapter, RgbaPixels, decode_pick_id, encode_pick_id,
};
pub use platform::{HostSurface, PlatformDelegated};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::DocumentSurface;

/// How an adapter finds hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickStrategy {
    /// Exact point-in-shape tests in scene coordinates.
    ExactGeometry,
    /// The host environment's own hit testing.
    PlatformDelegated,
    /// An offscreen buffer of id-encoded colors.
    PixelBuffer,
}

/// Resolves pick queries to targets.
///
/// Implementations must not return hidden, unpickable or detached shapes,
/// and must answer "nothing" rather than fail.
pub trait PickAdapter {
    /// What a pick resolves to.
    type Target;

    /// The strategy this adapter implements.
    fn strategy(&self) -> PickStrategy;

    /// The topmost target under the pointer.
    fn resolve(&self, query: &PickQuery) -> Option<Self::Target>;

    /// Every target under the pointer, topmost first.
    ///
    /// The default reports at most the single topmost target.
    fn resolve_all(&self, query: &PickQuery) -> Vec<Self::Target> {
        self.resolve(query).into_iter().collect()
    }
}

impl<A: PickAdapter + ?Sized> PickAdapter for &A {
    type Target = A::Target;

    fn strategy(&self) -> PickStrategy {
        (**self).strategy()
    }

    fn resolve(&self, query: &PickQuery) -> Option<A::Target> {
        (**self).resolve(query)
    }

    fn resolve_all(&self, query: &PickQuery) -> Vec<A::Target> {
        (**self).resolve_all(query)
    }
}

impl<A: PickAdapter + ?Sized> PickAdapter for Box<A> {
    type Target = A::Target;

    fn strategy(&self) -> PickStrategy {
        (**self).strategy()
    }

    fn resolve(&self, query: &PickQuery) -> Option<A::Target> {
        (**self).resolve(query)
    }

    fn resolve_all(&self, query: &PickQuery) -> Vec<A::Target> {
        (**self).resolve_all(query)
    }
}
