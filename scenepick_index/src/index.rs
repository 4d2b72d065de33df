// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed index over a spatial backend.

use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::hash::Hash;

use hashbrown::HashMap;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Error returned by index mutations.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum IndexError<K> {
    /// The key already has an entry.
    DuplicateKey(K),
    /// The key has no entry.
    UnknownKey(K),
}

impl<K: Debug> Debug for IndexError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(k) => write!(f, "DuplicateKey({k:?})"),
            Self::UnknownKey(k) => write!(f, "UnknownKey({k:?})"),
        }
    }
}

impl<K: Debug> fmt::Display for IndexError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(k) => write!(f, "key {k:?} is already indexed"),
            Self::UnknownKey(k) => write!(f, "key {k:?} is not indexed"),
        }
    }
}

impl<K: Debug> core::error::Error for IndexError<K> {}

/// A spatial index of `K` keys, each owning exactly one box.
///
/// Keys are mapped to dense backend slots; freed slots are reused. The index
/// never returns a removed key.
///
/// ## Concurrency
///
/// Queries take `&self` and mutations take `&mut self`, so a query can never
/// observe a half-applied mutation when the index is used directly. Embedders
/// that share an index across threads must uphold the same rule with their own
/// lock: querying while a mutation is in flight is not supported.
pub struct IndexGeneric<T, K, B>
where
    T: Copy + PartialOrd + Debug,
    B: Backend<T>,
{
    backend: B,
    slots: Vec<Option<(K, Aabb2D<T>)>>,
    by_key: HashMap<K, usize>,
    free: Vec<usize>,
}

impl<T, K, B> IndexGeneric<T, K, B>
where
    T: Copy + PartialOrd + Debug,
    K: Copy + Eq + Hash,
    B: Backend<T> + Default,
{
    /// Create an empty index with a default-constructed backend.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<T, K, B> Default for IndexGeneric<T, K, B>
where
    T: Copy + PartialOrd + Debug,
    K: Copy + Eq + Hash,
    B: Backend<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, B> IndexGeneric<T, K, B>
where
    T: Copy + PartialOrd + Debug,
    K: Copy + Eq + Hash,
    B: Backend<T>,
{
    /// Create an empty index over the given backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            slots: Vec::new(),
            by_key: HashMap::new(),
            free: Vec::new(),
        }
    }

    /// Insert a new entry.
    pub fn insert(&mut self, key: K, aabb: Aabb2D<T>) -> Result<(), IndexError<K>> {
        if self.by_key.contains_key(&key) {
            return Err(IndexError::DuplicateKey(key));
        }
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some((key, aabb));
                slot
            }
            None => {
                self.slots.push(Some((key, aabb)));
                self.slots.len() - 1
            }
        };
        self.by_key.insert(key, slot);
        self.backend.insert(slot, aabb);
        Ok(())
    }

    /// Replace the box of an existing entry.
    pub fn update(&mut self, key: K, aabb: Aabb2D<T>) -> Result<(), IndexError<K>> {
        let Some(&slot) = self.by_key.get(&key) else {
            return Err(IndexError::UnknownKey(key));
        };
        self.slots[slot] = Some((key, aabb));
        self.backend.update(slot, aabb);
        Ok(())
    }

    /// Insert the entry, or replace its box if it already exists.
    pub fn upsert(&mut self, key: K, aabb: Aabb2D<T>) {
        if self.update(key, aabb).is_err() {
            // Cannot be a duplicate: `update` just told us the key is absent.
            let _ = self.insert(key, aabb);
        }
    }

    /// Remove an entry, returning its last box.
    pub fn remove(&mut self, key: K) -> Option<Aabb2D<T>> {
        let slot = self.by_key.remove(&key)?;
        let (_, aabb) = self.slots[slot].take()?;
        self.backend.remove(slot);
        self.free.push(slot);
        Some(aabb)
    }

    /// Current box of an entry.
    pub fn get(&self, key: K) -> Option<Aabb2D<T>> {
        let slot = *self.by_key.get(&key)?;
        self.slots[slot].as_ref().map(|(_, aabb)| *aabb)
    }

    /// Returns `true` if the key has an entry.
    pub fn contains(&self, key: K) -> bool {
        self.by_key.contains_key(&key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.backend.clear();
        self.slots.clear();
        self.by_key.clear();
        self.free.clear();
    }

    /// Iterate over all entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Aabb2D<T>)> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Visit every entry whose box contains the point.
    pub fn visit_point<F: FnMut(K, Aabb2D<T>)>(&self, x: T, y: T, mut f: F) {
        self.backend.visit_point(x, y, |slot| {
            if let Some(Some((key, aabb))) = self.slots.get(slot) {
                f(*key, *aabb);
            }
        });
    }

    /// Keys whose box contains the point.
    ///
    /// This is a conservative superset of the exact hits; order is unspecified.
    pub fn query_point(&self, x: T, y: T) -> Vec<K> {
        let mut out = Vec::new();
        self.visit_point(x, y, |key, _| out.push(key));
        out
    }

    /// Keys whose box intersects the rectangle. Order is unspecified.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> Vec<K> {
        let mut out = Vec::new();
        self.backend.visit_rect(rect, |slot| {
            if let Some(Some((key, _))) = self.slots.get(slot) {
                out.push(*key);
            }
        });
        out
    }

    /// Access the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<T, K, B> Debug for IndexGeneric<T, K, B>
where
    T: Copy + PartialOrd + Debug,
    B: Backend<T> + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexGeneric")
            .field("len", &self.by_key.len())
            .field("free_slots", &self.free.len())
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
