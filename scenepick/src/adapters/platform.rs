// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking delegated to the host's own hit testing.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use super::{PickAdapter, PickStrategy};
use crate::query::PickQuery;
use crate::registry::RegistryAccess;

/// A host that can report which of its elements lie under a point.
///
/// Points are in the host's viewport coordinates. Elements are named by the
/// identifier they were registered under; elements without one are skipped.
pub trait HostSurface {
    /// Identifier of the topmost element at `client`.
    fn element_id_at(&self, client: Point) -> Option<String>;

    /// Identifiers of every element at `client`, topmost first.
    ///
    /// The default reports at most the topmost element.
    fn element_ids_at(&self, client: Point) -> Vec<String> {
        self.element_id_at(client).into_iter().collect()
    }
}

impl<F> HostSurface for F
where
    F: Fn(Point) -> Option<String>,
{
    fn element_id_at(&self, client: Point) -> Option<String> {
        self(client)
    }
}

/// Picks by asking a [`HostSurface`] and resolving ids through a registry.
///
/// The probe point is the query's client position, or its scene position
/// when no client position is given. Ids the host reports but the registry
/// does not know (decorations, other widgets) resolve to nothing, and so do
/// empty ids.
#[derive(Clone, Debug)]
pub struct PlatformDelegated<H, Reg> {
    host: H,
    registry: Reg,
}

impl<H, Reg> PlatformDelegated<H, Reg>
where
    H: HostSurface,
    Reg: RegistryAccess<Id = String>,
{
    /// Delegate to `host`, resolving through `registry`.
    pub fn new(host: H, registry: Reg) -> Self {
        Self { host, registry }
    }

    /// The host surface.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The registry.
    pub fn registry(&self) -> &Reg {
        &self.registry
    }
}

impl<H, Reg> PickAdapter for PlatformDelegated<H, Reg>
where
    H: HostSurface,
    Reg: RegistryAccess<Id = String>,
{
    type Target = Reg::Target;

    fn strategy(&self) -> PickStrategy {
        PickStrategy::PlatformDelegated
    }

    fn resolve(&self, query: &PickQuery) -> Option<Reg::Target> {
        let id = self.host.element_id_at(query.client_or_position())?;
        if id.is_empty() {
            return None;
        }
        self.registry.lookup(id.as_str())
    }

    fn resolve_all(&self, query: &PickQuery) -> Vec<Reg::Target> {
        self.host
            .element_ids_at(query.client_or_position())
            .iter()
            .filter(|id| !id.is_empty())
            .filter_map(|id| self.registry.lookup(id.as_str()))
            .collect()
    }
}
