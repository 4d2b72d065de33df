// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact geometric picking over a [`PickScene`](crate::PickScene).

use alloc::vec::Vec;

use super::{PickAdapter, PickStrategy};
use crate::query::PickQuery;
use crate::scene::SceneAccess;

/// Picks by testing the scene position against each shape's painted geometry.
///
/// Candidates come from the scene's broad-phase index and are confirmed in
/// reverse paint order; the first confirmed shape is the hit. The client
/// position of the query is ignored.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use scenepick::{ExactGeometry, HitStyle, PickAdapter, PickQuery, PickScene, RectShape, ShapeDescriptor};
///
/// let mut scene: PickScene<u32> = PickScene::new();
/// scene
///     .attach(1, ShapeDescriptor::new(RectShape::new(Point::ZERO, Size::new(10.0, 10.0)), HitStyle::fill()))
///     .unwrap();
///
/// let adapter = ExactGeometry::new(&scene);
/// assert_eq!(adapter.resolve(&PickQuery::at(5.0, 5.0)), Some(1));
/// assert_eq!(adapter.resolve(&PickQuery::at(15.0, 5.0)), None);
/// ```
#[derive(Clone, Debug)]
pub struct ExactGeometry<S> {
    scene: S,
}

impl<S: SceneAccess> ExactGeometry<S> {
    /// Pick over `scene`: an owned scene, a reference, an `Arc`, or a shared handle.
    pub fn new(scene: S) -> Self {
        Self { scene }
    }

    /// The scene this adapter reads.
    pub fn scene(&self) -> &S {
        &self.scene
    }
}

impl<S: SceneAccess> PickAdapter for ExactGeometry<S> {
    type Target = S::Key;

    fn strategy(&self) -> PickStrategy {
        PickStrategy::ExactGeometry
    }

    fn resolve(&self, query: &PickQuery) -> Option<S::Key> {
        self.scene.with_scene(|s| s.hit_test(query.position))
    }

    fn resolve_all(&self, query: &PickQuery) -> Vec<S::Key> {
        self.scene.with_scene(|s| s.hit_test_all(query.position))
    }
}
