// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pickable scene: shape storage, the broad-phase index, and exact queries.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use scenepick_index::{Backend, FlatVec, IndexGeneric};

use crate::descriptor::{PickNode, ShapeDescriptor, ShapeFlags, rect_to_aabb};

/// Error returned by scene mutations.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SceneError<K> {
    /// A shape with this key is already attached.
    DuplicateShape(K),
    /// No shape with this key is attached.
    UnknownShape(K),
}

impl<K: Debug> Debug for SceneError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateShape(k) => write!(f, "DuplicateShape({k:?})"),
            Self::UnknownShape(k) => write!(f, "UnknownShape({k:?})"),
        }
    }
}

impl<K: Debug> fmt::Display for SceneError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateShape(k) => write!(f, "shape {k:?} is already attached"),
            Self::UnknownShape(k) => write!(f, "shape {k:?} is not attached"),
        }
    }
}

impl<K: Debug> core::error::Error for SceneError<K> {}

#[derive(Clone, Debug)]
struct Entry {
    node: PickNode,
    /// Attach sequence number; breaks z-index ties in favor of later shapes.
    seq: u64,
}

/// A set of pickable shapes keyed by caller-owned handles.
///
/// The scene keeps a broad-phase index of conservative world bounds in sync
/// with every mutation, and answers point queries by confirming index
/// candidates with each shape's exact painted-geometry test.
///
/// Only shapes that are both [visible](ShapeFlags::VISIBLE) and
/// [pickable](ShapeFlags::PICKABLE) are indexed; the others keep their
/// descriptor and re-enter the index when their flags are restored.
///
/// ## Ordering
///
/// Results are ordered topmost first: higher `z_index` wins, and among equal
/// `z_index` the shape attached later wins. Changing a shape's descriptor or
/// flags does not change its attach order.
///
/// ## Concurrency
///
/// Queries take `&self` and mutations take `&mut self`. To pick from one
/// thread while another edits the scene, wrap it in
/// [`SharedScene`](crate::SharedScene) (feature `std`).
pub struct PickScene<K, B = FlatVec<f64>>
where
    B: Backend<f64>,
{
    nodes: HashMap<K, Entry>,
    index: IndexGeneric<f64, K, B>,
    next_seq: u64,
}

impl<K> PickScene<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Create an empty scene over the flat vector backend.
    ///
    /// Use [`with_backend`](Self::with_backend) for other backends.
    pub fn new() -> Self {
        Self::with_backend(FlatVec::default())
    }
}

impl<K, B> Default for PickScene<K, B>
where
    K: Copy + Eq + Hash + Debug,
    B: Backend<f64> + Default,
{
    fn default() -> Self {
        Self::with_backend(B::default())
    }
}

impl<K, B> PickScene<K, B>
where
    K: Copy + Eq + Hash + Debug,
    B: Backend<f64>,
{
    /// Create an empty scene over the given broad-phase backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            nodes: HashMap::new(),
            index: IndexGeneric::with_backend(backend),
            next_seq: 0,
        }
    }

    /// Attach a new shape.
    pub fn attach(&mut self, key: K, node: impl Into<PickNode>) -> Result<(), SceneError<K>> {
        if self.nodes.contains_key(&key) {
            return Err(SceneError::DuplicateShape(key));
        }
        let node = node.into();
        tracing::trace!(
            ?key,
            kind = node.descriptor.geometry.kind_name(),
            z_index = node.z_index,
            "attach shape"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.nodes.insert(key, Entry { node, seq });
        self.sync(key);
        Ok(())
    }

    /// Detach a shape, returning it. The key no longer appears in any query.
    pub fn detach(&mut self, key: K) -> Result<PickNode, SceneError<K>> {
        let entry = self
            .nodes
            .remove(&key)
            .ok_or(SceneError::UnknownShape(key))?;
        self.index.remove(key);
        tracing::trace!(?key, "detach shape");
        Ok(entry.node)
    }

    /// Replace a shape's descriptor and re-index its bounds.
    pub fn update_descriptor(
        &mut self,
        key: K,
        descriptor: ShapeDescriptor,
    ) -> Result<(), SceneError<K>> {
        self.entry_mut(key)?.node.descriptor = descriptor;
        self.sync(key);
        Ok(())
    }

    /// Replace a shape's flags.
    pub fn set_flags(&mut self, key: K, flags: ShapeFlags) -> Result<(), SceneError<K>> {
        self.entry_mut(key)?.node.flags = flags;
        self.sync(key);
        Ok(())
    }

    /// Replace a shape's z-index.
    pub fn set_z_index(&mut self, key: K, z_index: i32) -> Result<(), SceneError<K>> {
        self.entry_mut(key)?.node.z_index = z_index;
        Ok(())
    }

    /// Detach every shape.
    pub fn clear(&mut self) {
        tracing::trace!(count = self.nodes.len(), "clear scene");
        self.nodes.clear();
        self.index.clear();
    }

    /// The attached shape for `key`, if any.
    pub fn node(&self, key: K) -> Option<&PickNode> {
        self.nodes.get(&key).map(|e| &e.node)
    }

    /// Returns `true` if a shape is attached under `key`.
    pub fn contains(&self, key: K) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Number of attached shapes, hit-testable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no shapes are attached.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of shapes currently in the broad-phase index.
    pub fn indexed_len(&self) -> usize {
        self.index.len()
    }

    /// Iterate over attached shapes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &PickNode)> + '_ {
        self.nodes.iter().map(|(k, e)| (*k, &e.node))
    }

    /// Access the broad-phase index.
    pub fn index(&self) -> &IndexGeneric<f64, K, B> {
        &self.index
    }

    /// Broad phase only: shapes whose world bounds contain `pt`, topmost first.
    ///
    /// This is a superset of [`hit_test_all`](Self::hit_test_all).
    pub fn candidates_at(&self, pt: Point) -> Vec<K> {
        let mut out = Vec::new();
        self.index.visit_point(pt.x, pt.y, |key, _| out.push(key));
        self.sort_topmost_first(&mut out);
        out
    }

    /// The topmost shape whose painted geometry contains `pt`.
    pub fn hit_test(&self, pt: Point) -> Option<K> {
        let mut best: Option<(i32, u64, K)> = None;
        self.index.visit_point(pt.x, pt.y, |key, _| {
            let Some(entry) = self.nodes.get(&key) else {
                return;
            };
            let rank = (entry.node.z_index, entry.seq);
            if best.is_some_and(|(z, s, _)| (z, s) >= rank) {
                return;
            }
            if entry.node.descriptor.hit_test(pt) {
                best = Some((rank.0, rank.1, key));
            }
        });
        let hit = best.map(|(_, _, key)| key);
        tracing::trace!(x = pt.x, y = pt.y, ?hit, "scene hit test");
        hit
    }

    /// Every shape whose painted geometry contains `pt`, topmost first.
    pub fn hit_test_all(&self, pt: Point) -> Vec<K> {
        let mut out = Vec::new();
        self.index.visit_point(pt.x, pt.y, |key, _| {
            if self
                .nodes
                .get(&key)
                .is_some_and(|e| e.node.descriptor.hit_test(pt))
            {
                out.push(key);
            }
        });
        self.sort_topmost_first(&mut out);
        out
    }

    /// Shapes whose world bounds intersect `rect`, topmost first.
    ///
    /// This is a bounds query, useful for marquee selection and visibility
    /// culling; it does not test painted geometry.
    pub fn intersect_rect(&self, rect: Rect) -> Vec<K> {
        let mut out = self.index.query_rect(rect_to_aabb(rect.abs()));
        self.sort_topmost_first(&mut out);
        out
    }

    fn entry_mut(&mut self, key: K) -> Result<&mut Entry, SceneError<K>> {
        self.nodes.get_mut(&key).ok_or(SceneError::UnknownShape(key))
    }

    /// Bring the index entry for `key` in line with its node.
    fn sync(&mut self, key: K) {
        let Some(entry) = self.nodes.get(&key) else {
            return;
        };
        if entry.node.flags.is_hit_testable() {
            let bounds = entry.node.descriptor.world_bounds();
            self.index.upsert(key, rect_to_aabb(bounds));
        } else {
            self.index.remove(key);
        }
    }

    fn sort_topmost_first(&self, keys: &mut [K]) {
        keys.sort_unstable_by_key(|key| {
            self.nodes
                .get(key)
                .map(|e| core::cmp::Reverse((e.node.z_index, e.seq)))
        });
    }
}

impl<K, B> Debug for PickScene<K, B>
where
    K: Debug,
    B: Backend<f64> + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickScene")
            .field("len", &self.nodes.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Read access to a [`PickScene`], however it is owned.
///
/// Adapters take a `SceneAccess` rather than a scene so that the same
/// adapter works over a scene it owns, a borrowed scene, or a scene shared
/// behind a lock.
pub trait SceneAccess {
    /// Shape key type.
    type Key: Copy + Eq + Hash + Debug;
    /// Broad-phase backend.
    type Backend: Backend<f64>;

    /// Run `f` with a shared view of the scene.
    fn with_scene<R>(&self, f: impl FnOnce(&PickScene<Self::Key, Self::Backend>) -> R) -> R;
}

impl<K, B> SceneAccess for PickScene<K, B>
where
    K: Copy + Eq + Hash + Debug,
    B: Backend<f64>,
{
    type Key = K;
    type Backend = B;

    fn with_scene<R>(&self, f: impl FnOnce(&PickScene<K, B>) -> R) -> R {
        f(self)
    }
}

impl<S: SceneAccess> SceneAccess for &S {
    type Key = S::Key;
    type Backend = S::Backend;

    fn with_scene<R>(&self, f: impl FnOnce(&PickScene<Self::Key, Self::Backend>) -> R) -> R {
        (**self).with_scene(f)
    }
}

impl<S: SceneAccess> SceneAccess for Arc<S> {
    type Key = S::Key;
    type Backend = S::Backend;

    fn with_scene<R>(&self, f: impl FnOnce(&PickScene<Self::Key, Self::Backend>) -> R) -> R {
        (**self).with_scene(f)
    }
}
