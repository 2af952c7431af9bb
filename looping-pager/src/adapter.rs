use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::cache::ViewCache;
use crate::{PageSource, ViewId, ViewKind};

/// The view-construction collaborator a concrete host supplies.
///
/// The engine never touches real views; it asks the binder to build, fill,
/// attach, and detach them, identified by [`ViewId`] handles into whatever
/// arena the host keeps.
pub trait ViewBinder<T> {
    /// Builds a fresh view of `kind` for the logical item at `logical`.
    fn inflate(&mut self, kind: ViewKind, logical: usize) -> ViewId;

    /// Populates `view` with `item`.
    fn bind(&mut self, view: ViewId, item: &T, logical: usize, kind: ViewKind);

    /// Adds `view` to the scroll container.
    fn attach(&mut self, view: ViewId);

    /// Removes `view` from the scroll container.
    fn detach(&mut self, view: ViewId);

    /// Classifies a logical item for recycling purposes.
    fn view_kind(&self, logical: usize) -> ViewKind {
        let _ = logical;
        ViewKind::default()
    }

    /// Called for a view that will never be handed out again (evicted from
    /// the cache, or detached during a dataset refresh). The host may free
    /// its arena entry.
    fn discard(&mut self, view: ViewId) {
        let _ = view;
    }
}

/// Marks a dataset refresh as in progress for a [`LoopingAdapter`].
///
/// While any guard is alive, released views are detached but not recycled,
/// so a refresh cannot repopulate the cache with views bound to stale data.
/// The mark is cleared when the guard drops, even on early return.
#[must_use = "the refresh mark is cleared when the guard is dropped"]
#[derive(Debug)]
pub struct RefreshGuard {
    depth: Rc<Cell<usize>>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        let depth = self.depth.get();
        debug_assert!(depth > 0, "refresh depth underflow");
        self.depth.set(depth.saturating_sub(1));
    }
}

/// A page source that pads the item list with two sentinel slots when
/// looping is effective.
///
/// Slot `0` mirrors the last logical item and slot `N + 1` mirrors the
/// first, so a drag past either end always has real content to show; the
/// pager teleports off the sentinels once the scroll comes to rest.
#[derive(Debug)]
pub struct LoopingAdapter<T, B> {
    items: Vec<T>,
    binder: B,
    endless: bool,
    can_loop: bool,
    cache: ViewCache,
    refresh_depth: Rc<Cell<usize>>,
}

impl<T, B: ViewBinder<T>> LoopingAdapter<T, B> {
    pub fn new(items: Vec<T>, endless: bool, binder: B) -> Self {
        let can_loop = items.len() > 1;
        ldebug!(
            items = items.len(),
            endless,
            can_loop,
            "LoopingAdapter::new"
        );
        Self {
            items,
            binder,
            endless,
            can_loop,
            cache: ViewCache::new(),
            refresh_depth: Rc::new(Cell::new(0)),
        }
    }

    /// Replaces the item list wholesale and recomputes loop eligibility.
    ///
    /// No view bookkeeping happens here: the host is expected to wrap its
    /// release/re-instantiate sweep in [`Self::begin_refresh`].
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.can_loop = self.items.len() > 1;
        ldebug!(items = self.items.len(), can_loop = self.can_loop, "set_items");
    }

    /// Returns the logical item at `logical`, or `None` out of range.
    pub fn item(&self, logical: usize) -> Option<&T> {
        self.items.get(logical)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn endless(&self) -> bool {
        self.endless
    }

    /// Whether the list is long enough to loop (`N > 1`).
    pub fn can_loop(&self) -> bool {
        self.can_loop
    }

    fn looping_effective(&self) -> bool {
        self.endless && self.can_loop
    }

    /// Maps an external slot index to a logical item index.
    ///
    /// Pure and total over the valid slot range: identity when looping is
    /// not effective, otherwise slot `0` mirrors the last item, the trailing
    /// sentinel mirrors item `0`, and everything between shifts down by one.
    pub fn slot_to_logical(&self, slot: usize) -> usize {
        if !self.looping_effective() {
            return slot;
        }
        let count = self.count();
        if slot == 0 {
            self.items.len() - 1
        } else if slot > count - 2 {
            0
        } else {
            slot - 1
        }
    }

    /// Marks a dataset refresh as in progress until the guard drops.
    ///
    /// Guards nest; recycling stays suppressed while any of them is alive.
    pub fn begin_refresh(&mut self) -> RefreshGuard {
        let depth = self.refresh_depth.get();
        self.refresh_depth.set(depth.saturating_add(1));
        RefreshGuard {
            depth: Rc::clone(&self.refresh_depth),
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh_depth.get() > 0
    }

    /// Identity comparison: a handle represents a view iff it is the exact
    /// same handle.
    pub fn matches_handle(view: ViewId, handle: ViewId) -> bool {
        view == handle
    }

    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }

    pub fn binder_mut(&mut self) -> &mut B {
        &mut self.binder
    }
}

impl<T, B: ViewBinder<T>> PageSource for LoopingAdapter<T, B> {
    fn count(&self) -> usize {
        let count = self.items.len();
        if self.looping_effective() {
            count + 2
        } else {
            count
        }
    }

    fn instantiate(&mut self, slot: usize) -> Option<ViewId> {
        if slot >= self.count() {
            lwarn!(slot, count = self.count(), "instantiate: slot out of range");
            return None;
        }
        let logical = self.slot_to_logical(slot);
        let item = self.items.get(logical)?;
        let kind = self.binder.view_kind(logical);

        let view = match self.cache.take(kind) {
            Some(view) => {
                ltrace!(slot, logical, kind = kind.0, reused = true, "instantiate");
                view
            }
            None => {
                ltrace!(slot, logical, kind = kind.0, reused = false, "instantiate");
                self.binder.inflate(kind, logical)
            }
        };

        self.binder.bind(view, item, logical, kind);
        self.binder.attach(view);
        Some(view)
    }

    fn release(&mut self, slot: usize, view: ViewId) {
        self.binder.detach(view);
        if self.is_refreshing() {
            // Views released mid-refresh are bound to stale data.
            self.binder.discard(view);
            ltrace!(slot, view = view.0, "release: refresh in progress, not cached");
            return;
        }
        let logical = self.slot_to_logical(slot);
        let kind = self.binder.view_kind(logical);
        if let Some(evicted) = self.cache.store(kind, view) {
            self.binder.discard(evicted);
        }
        ltrace!(slot, logical, kind = kind.0, "release: cached");
    }

    fn list_count(&self) -> usize {
        self.items.len()
    }

    fn last_slot_index(&self) -> usize {
        if self.endless {
            self.items.len()
        } else {
            self.items.len().saturating_sub(1)
        }
    }

    fn loop_aware(&self) -> bool {
        true
    }
}
