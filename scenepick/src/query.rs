// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pick queries and their results.

use alloc::vec::Vec;

use kurbo::Point;

/// A pointer position to resolve.
///
/// `position` is in scene coordinates and drives geometry-based strategies.
/// `client` is the same pointer in host (viewport) coordinates, which the
/// platform-delegated and pixel-buffer strategies use. When absent, those
/// strategies fall back to `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickQuery {
    /// Pointer in scene coordinates.
    pub position: Point,
    /// Pointer in host viewport coordinates, if known.
    pub client: Option<Point>,
}

impl PickQuery {
    /// A query with only a scene position.
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            client: None,
        }
    }

    /// A query at scene position `(x, y)`.
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y))
    }

    /// Return a copy carrying host viewport coordinates.
    #[must_use]
    pub const fn with_client(mut self, client: Point) -> Self {
        self.client = Some(client);
        self
    }

    /// The point host-side strategies should probe.
    pub fn client_or_position(&self) -> Point {
        self.client.unwrap_or(self.position)
    }
}

impl From<Point> for PickQuery {
    fn from(position: Point) -> Self {
        Self::new(position)
    }
}

/// Outcome of a single-target pick.
#[derive(Clone, Debug, PartialEq)]
pub struct PickResult<K> {
    /// The query this answers.
    pub query: PickQuery,
    /// Topmost target under the pointer, if any.
    pub target: Option<K>,
}

impl<K> PickResult<K> {
    /// Returns `true` if something was picked.
    pub fn is_hit(&self) -> bool {
        self.target.is_some()
    }
}

/// Outcome of an all-targets pick.
#[derive(Clone, Debug, PartialEq)]
pub struct PickAllResult<K> {
    /// The query this answers.
    pub query: PickQuery,
    /// Every target under the pointer, topmost first.
    pub targets: Vec<K>,
}

impl<K> PickAllResult<K> {
    /// The topmost target, if any.
    pub fn topmost(&self) -> Option<&K> {
        self.targets.first()
    }
}
