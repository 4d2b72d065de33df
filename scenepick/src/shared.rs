// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lock-protected sharing of scenes and registries across threads.

use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::Hash;

use std::sync::Arc;

use parking_lot::RwLock;
use scenepick_index::{Backend, FlatVec};

use crate::registry::{PickableRegistry, RegistryAccess};
use crate::scene::{PickScene, SceneAccess};

/// A cloneable handle to a value behind a reader-writer lock.
///
/// Picks take the read lock for the duration of one query, so a query never
/// observes a half-applied mutation. Any number of picks may read at once;
/// a write waits for them and excludes everything else.
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

/// A [`PickScene`] shared between a writer and picking adapters.
pub type SharedScene<K, B = FlatVec<f64>> = Shared<PickScene<K, B>>;

/// A [`PickableRegistry`] shared between the scene owner and adapters.
pub type SharedRegistry<I, R> = Shared<PickableRegistry<I, R>>;

impl<T> Shared<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|v| f.debug_tuple("Shared").field(v).finish())
    }
}

impl<K, B> SceneAccess for Shared<PickScene<K, B>>
where
    K: Copy + Eq + Hash + Debug,
    B: Backend<f64>,
{
    type Key = K;
    type Backend = B;

    fn with_scene<R>(&self, f: impl FnOnce(&PickScene<K, B>) -> R) -> R {
        self.read(f)
    }
}

impl<I: Eq + Hash, R: Clone> RegistryAccess for Shared<PickableRegistry<I, R>> {
    type Id = I;
    type Target = R;

    fn lookup<Q>(&self, id: &Q) -> Option<R>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read(|r| r.lookup(id))
    }
}
