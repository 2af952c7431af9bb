#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{ViewId, ViewKind};

#[cfg(feature = "std")]
type KindViewMap = HashMap<ViewKind, ViewId>;
#[cfg(not(feature = "std"))]
type KindViewMap = BTreeMap<ViewKind, ViewId>;

/// A single-slot-per-kind recycling pool.
///
/// Holds at most one detached view per [`ViewKind`], so leaving and
/// re-entering a page does not force re-construction of its view. This is
/// deliberately not a general pool: storing a second view of the same kind
/// evicts the first.
///
/// Invariant: a view is never simultaneously in the cache and attached to a
/// live slot. [`crate::LoopingAdapter`] maintains this by removing a view on
/// `take` and only storing on release.
#[derive(Clone, Debug, Default)]
pub struct ViewCache {
    views: KindViewMap,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the cached view of `kind`, if any.
    pub fn take(&mut self, kind: ViewKind) -> Option<ViewId> {
        self.views.remove(&kind)
    }

    /// Stores `view` under `kind`, returning the evicted previous occupant.
    ///
    /// An evicted view will never be handed out again; the host should
    /// discard it.
    pub fn store(&mut self, kind: ViewKind, view: ViewId) -> Option<ViewId> {
        self.views.insert(kind, view)
    }

    /// Returns the cached view of `kind` without removing it.
    pub fn peek(&self, kind: ViewKind) -> Option<ViewId> {
        self.views.get(&kind).copied()
    }

    pub fn clear(&mut self) {
        self.views.clear();
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
