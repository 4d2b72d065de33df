// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenepick: pointer picking for retained-mode 2D scenes.
//!
//! Given a pointer position, Scenepick answers "which shape is under it",
//! honoring what is actually painted: a stroke-only ring is hollow, a line is
//! as thick as its stroke plus any extra hit tolerance, and hidden shapes are
//! never returned.
//!
//! - [`PickScene`]: shapes keyed by your handles, with a broad-phase index of
//!   world bounds kept in sync on every write.
//! - [`ShapeDescriptor`]: geometry, [`HitStyle`], origin offset, transform and
//!   optional clip of one shape.
//! - [`PickAdapter`]: a picking strategy. [`ExactGeometry`] tests geometry in
//!   scene coordinates, [`PlatformDelegated`] asks the host (for example the
//!   DOM) which element is under the pointer, and [`PixelBufferAdapter`]
//!   decodes an id-colored offscreen buffer.
//! - [`Picker`]: runs [`PickQuery`]s through one adapter and reports
//!   [`PickResult`]s.
//! - [`PickableRegistry`]: maps host element ids or pick-buffer ids back to
//!   your handles.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use scenepick::{
//!     EllipseShape, ExactGeometry, HitStyle, LineShape, PickQuery, PickScene, Picker,
//!     ShapeDescriptor,
//! };
//!
//! let mut scene: PickScene<&str> = PickScene::new();
//!
//! // A stroked ring drawn from the top-left of its 120 x 120 box.
//! let ring = ShapeDescriptor::new(
//!     EllipseShape::new(Point::new(60.0, 60.0), 60.0, 60.0),
//!     HitStyle::stroke(4.0),
//! )
//! .with_origin(Vec2::new(60.0, 60.0));
//! scene.attach("ring", ring).unwrap();
//!
//! // A hairline that is easy to hit thanks to extra tolerance.
//! let wire = ShapeDescriptor::new(
//!     LineShape::new(Point::new(-100.0, 0.0), Point::new(-20.0, 0.0)),
//!     HitStyle::stroke(1.0).with_extra_hit_tolerance(9.0),
//! );
//! scene.attach("wire", wire).unwrap();
//!
//! let picker = Picker::new(ExactGeometry::new(&scene));
//! assert_eq!(picker.pick(PickQuery::at(60.0, 0.0)).target, Some("ring"));
//! // The ring is hollow.
//! assert_eq!(picker.pick(PickQuery::at(0.0, 0.0)).target, None);
//! assert_eq!(picker.pick(PickQuery::at(-50.0, 4.0)).target, Some("wire"));
//! ```
//!
//! ## Paint order
//!
//! Higher `z_index` is on top; among equal `z_index`, the shape attached later
//! is on top. Single picks return the topmost hit and `pick_all` lists every
//! hit topmost first.
//!
//! ## Failure semantics
//!
//! Picking never fails. Degenerate geometry, non-finite coordinates, singular
//! transforms, unknown element ids and out-of-range pixels all mean "nothing
//! picked". Only scene writes return errors ([`SceneError`]) for duplicate or
//! unknown keys.
//!
//! ## Features
//!
//! - `std` (default): [`Shared`], a lock-protected handle for picking from one
//!   thread while another edits the scene.
//! - `libm`: float math for `no_std` builds.
//! - `backend_grid` (default): the [`GridF64`] broad-phase backend.
//! - `web`: `DocumentSurface`, a [`HostSurface`] over `web_sys::Document` on
//!   `wasm32`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
mod descriptor;
mod picker;
mod query;
mod registry;
mod scene;
#[cfg(feature = "std")]
mod shared;

pub use adapters::{
    ExactGeometry, HostSurface, PickAdapter, PickBuffer, PickStrategy, PixelBufferAdapter,
    PlatformDelegated, RgbaPixels, decode_pick_id, encode_pick_id,
};
pub use descriptor::{PickNode, ShapeDescriptor, ShapeFlags};
pub use picker::Picker;
pub use query::{PickAllResult, PickQuery, PickResult};
pub use registry::{PickableRegistry, RegistryAccess};
pub use scene::{PickScene, SceneAccess, SceneError};
#[cfg(feature = "std")]
pub use shared::{Shared, SharedRegistry, SharedScene};

pub use scenepick_hit::{
    CircleShape, EllipseShape, FillRule, HitStyle, LineShape, PaintFlags, PathShape, PolygonShape,
    PolylineShape, RectShape, ShapeGeometry,
};
#[cfg(feature = "backend_grid")]
pub use scenepick_index::GridF64;
pub use scenepick_index::{Aabb2D, Backend, FlatVec};
