// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picking coordinator.

use core::fmt::Debug;

use crate::adapters::{PickAdapter, PickStrategy};
use crate::query::{PickAllResult, PickQuery, PickResult};

/// Answers "what is under the pointer" with one injected [`PickAdapter`].
///
/// The picker holds no state between calls; everything it knows comes from
/// the adapter at the moment of the query.
///
/// ```rust
/// use kurbo::Point;
/// use scenepick::{CircleShape, ExactGeometry, HitStyle, PickQuery, PickScene, Picker, ShapeDescriptor};
///
/// let mut scene: PickScene<u32> = PickScene::new();
/// scene
///     .attach(1, ShapeDescriptor::new(CircleShape::new(Point::ZERO, 10.0), HitStyle::fill()))
///     .unwrap();
///
/// let picker = Picker::new(ExactGeometry::new(&scene));
/// let result = picker.pick(PickQuery::at(3.0, 4.0));
/// assert_eq!(result.target, Some(1));
/// assert_eq!(result.query.position, Point::new(3.0, 4.0));
/// ```
#[derive(Clone, Debug)]
pub struct Picker<A> {
    adapter: A,
}

impl<A> Picker<A>
where
    A: PickAdapter,
    A::Target: Debug,
{
    /// Pick with `adapter`.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// The adapter's strategy.
    pub fn strategy(&self) -> PickStrategy {
        self.adapter.strategy()
    }

    /// Access the adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Consume the picker, returning its adapter.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// The topmost target under the pointer.
    pub fn pick(&self, query: impl Into<PickQuery>) -> PickResult<A::Target> {
        let query = query.into();
        let target = self.adapter.resolve(&query);
        tracing::debug!(
            strategy = ?self.adapter.strategy(),
            x = query.position.x,
            y = query.position.y,
            ?target,
            "pick"
        );
        PickResult { query, target }
    }

    /// Every target under the pointer, topmost first.
    ///
    /// Strategies that can only see the topmost target report at most one.
    pub fn pick_all(&self, query: impl Into<PickQuery>) -> PickAllResult<A::Target> {
        let query = query.into();
        let targets = self.adapter.resolve_all(&query);
        tracing::debug!(
            strategy = ?self.adapter.strategy(),
            x = query.position.x,
            y = query.position.y,
            count = targets.len(),
            "pick all"
        );
        PickAllResult { query, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Point;

    /// Reports whatever it was built with, regardless of the query.
    struct Fixed(Vec<u8>);

    impl PickAdapter for Fixed {
        type Target = u8;

        fn strategy(&self) -> PickStrategy {
            PickStrategy::PixelBuffer
        }

        fn resolve(&self, _query: &PickQuery) -> Option<u8> {
            self.0.first().copied()
        }
    }

    #[test]
    fn result_echoes_the_query() {
        let picker = Picker::new(Fixed(vec![3]));
        let query = PickQuery::at(1.0, 2.0).with_client(Point::new(10.0, 20.0));
        let result = picker.pick(query);
        assert_eq!(result.query, query);
        assert_eq!(result.target, Some(3));
        assert!(result.is_hit());
    }

    #[test]
    fn default_pick_all_reports_only_the_top() {
        let picker = Picker::new(Fixed(vec![3, 2, 1]));
        let all = picker.pick_all(Point::new(0.0, 0.0));
        assert_eq!(all.targets, [3]);
        assert_eq!(all.topmost(), Some(&3));

        let empty = Picker::new(Fixed(Vec::new())).pick_all(Point::ZERO);
        assert!(empty.targets.is_empty());
        assert_eq!(empty.topmost(), None);
    }

    #[test]
    fn boxed_adapters_are_interchangeable() {
        let adapters: Vec<Box<dyn PickAdapter<Target = u8>>> =
            vec![Box::new(Fixed(vec![1])), Box::new(Fixed(Vec::new()))];
        let picks: Vec<_> = adapters
            .into_iter()
            .map(|a| Picker::new(a).pick(Point::ZERO).target)
            .collect();
        assert_eq!(picks, [Some(1), None]);
    }
}
