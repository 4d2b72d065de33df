// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier-to-target lookup for strategies that discover hits by id.

use alloc::sync::Arc;
use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::Hash;

use hashbrown::HashMap;

/// Maps identifiers reported by a platform or pick buffer back to targets.
///
/// Strategies that do not compute hits themselves (the host's element lookup,
/// or a color-coded pick buffer) find an identifier at the pointer and resolve
/// it here. Registration follows the lifetime of the scene's shapes:
/// register on attach, unregister on detach.
///
/// ```rust
/// use scenepick::PickableRegistry;
///
/// let mut registry: PickableRegistry<String, u32> = PickableRegistry::new();
/// registry.register("shape-7".to_owned(), 7);
/// assert_eq!(registry.get("shape-7"), Some(&7));
/// assert_eq!(registry.unregister("shape-7"), Some(7));
/// assert!(registry.is_empty());
/// ```
pub struct PickableRegistry<I, R> {
    entries: HashMap<I, R>,
}

impl<I, R> PickableRegistry<I, R>
where
    I: Eq + Hash,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `target` under `id`, returning the target it replaces.
    pub fn register(&mut self, id: I, target: R) -> Option<R> {
        self.entries.insert(id, target)
    }

    /// Remove the registration for `id`.
    pub fn unregister<Q>(&mut self, id: &Q) -> Option<R>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(id)
    }

    /// The target registered under `id`.
    pub fn get<Q>(&self, id: &Q) -> Option<&R>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(id)
    }

    /// Returns `true` if `id` is registered.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(id)
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over registrations in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &R)> + '_ {
        self.entries.iter()
    }
}

impl<I: Eq + Hash, R> Default for PickableRegistry<I, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Debug, R: Debug> Debug for PickableRegistry<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<I: Eq + Hash, R> FromIterator<(I, R)> for PickableRegistry<I, R> {
    fn from_iter<T: IntoIterator<Item = (I, R)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read access to a [`PickableRegistry`], however it is owned.
pub trait RegistryAccess {
    /// Identifier type.
    type Id: Eq + Hash;
    /// Resolved target type.
    type Target: Clone;

    /// Resolve `id` to a copy of its target.
    fn lookup<Q>(&self, id: &Q) -> Option<Self::Target>
    where
        Self::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

impl<I: Eq + Hash, R: Clone> RegistryAccess for PickableRegistry<I, R> {
    type Id = I;
    type Target = R;

    fn lookup<Q>(&self, id: &Q) -> Option<R>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(id).cloned()
    }
}

impl<A: RegistryAccess> RegistryAccess for &A {
    type Id = A::Id;
    type Target = A::Target;

    fn lookup<Q>(&self, id: &Q) -> Option<A::Target>
    where
        A::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        (**self).lookup(id)
    }
}

impl<A: RegistryAccess> RegistryAccess for Arc<A> {
    type Id = A::Id;
    type Target = A::Target;

    fn lookup<Q>(&self, id: &Q) -> Option<A::Target>
    where
        A::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        (**self).lookup(id)
    }
}
