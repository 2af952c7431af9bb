use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use looping_pager::{
    Jump, LoopingAdapter, LoopingPager, PageSource, PagerOptions, PagerState, ScrollPhase,
    ViewBinder, ViewId,
};

/// A framework-neutral controller that wraps a [`LoopingPager`] over a
/// [`LoopingAdapter`] and provides common host workflows (windowed view
/// population, dataset refresh, auto-advance driving).
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_page_scrolled` / `on_scroll_state_changed` when scroll events occur
/// - `tick(now_ms)` each frame/timer tick (for auto-advance)
///
/// The controller keeps the slots within `offscreen` of the current slot
/// instantiated and attached; everything else is released back to the
/// adapter's recycling cache. Hosts that animate their own page moves can
/// bypass [`Self::select`] and forward raw events to [`Self::pager_mut`],
/// applying any returned [`Jump`] themselves.
#[derive(Debug)]
pub struct PagerController<T, B: ViewBinder<T>> {
    pager: LoopingPager<LoopingAdapter<T, B>>,
    attached: BTreeMap<usize, ViewId>,
    offscreen: usize,
}

impl<T, B: ViewBinder<T>> PagerController<T, B> {
    pub fn new(options: PagerOptions, items: Vec<T>, binder: B, now_ms: u64) -> Self {
        let endless = options.endless;
        let mut pager = LoopingPager::new(options);
        pager.attach_source(LoopingAdapter::new(items, endless, binder), now_ms);
        let mut controller = Self {
            pager,
            attached: BTreeMap::new(),
            offscreen: 1,
        };
        controller.populate();
        controller
    }

    /// Sets how many slots on each side of the current one stay attached.
    pub fn with_offscreen(mut self, offscreen: usize) -> Self {
        self.offscreen = offscreen;
        self.populate();
        self
    }

    pub fn pager(&self) -> &LoopingPager<LoopingAdapter<T, B>> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut LoopingPager<LoopingAdapter<T, B>> {
        &mut self.pager
    }

    pub fn adapter(&self) -> Option<&LoopingAdapter<T, B>> {
        self.pager.source()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut LoopingAdapter<T, B>> {
        self.pager.source_mut()
    }

    pub fn current_slot(&self) -> usize {
        self.pager.current_slot()
    }

    /// The attached view for `slot`, if it is inside the live window.
    pub fn attached_view(&self, slot: usize) -> Option<ViewId> {
        self.attached.get(&slot).copied()
    }

    pub fn attached_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.attached.keys().copied()
    }

    /// Moves to `slot` the way a host would animate a programmatic page
    /// change: the selection commits, the scroll settles, and any sentinel
    /// teleport is applied silently.
    pub fn select(&mut self, slot: usize, now_ms: u64) {
        self.pager.on_scroll_state_changed(ScrollPhase::Settling, now_ms);
        self.pager.on_page_selected(slot, now_ms);
        // A returned teleport jump is already reflected in the pager; all
        // that is left is re-centering the view window.
        self.pager.on_scroll_state_changed(ScrollPhase::Idle, now_ms);
        self.populate();
    }

    /// Replaces the dataset.
    ///
    /// Views released while the refresh mark is held are discarded rather
    /// than recycled, so no view bound to stale data can resurface. The
    /// pager then re-seats at its starting slot and the window is rebuilt
    /// from the new items.
    pub fn set_items(&mut self, items: Vec<T>, now_ms: u64) {
        if let Some(adapter) = self.pager.source_mut() {
            let guard = adapter.begin_refresh();
            for (slot, view) in core::mem::take(&mut self.attached) {
                adapter.release(slot, view);
            }
            drop(guard);
            adapter.set_items(items);
        }
        self.pager.reset(now_ms);
        self.populate();
    }

    /// Advances the auto-scroll; returns the new current slot when a page
    /// move fired.
    ///
    /// The animated jump the pager hands back is resolved synchronously
    /// here: the controller plays the settle the host animation would
    /// produce, including the sentinel teleport at the end.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        let jump = self.pager.tick(now_ms)?;
        self.pager.on_scroll_state_changed(ScrollPhase::Settling, now_ms);
        self.pager.on_page_selected(jump.slot, now_ms);
        self.pager.on_scroll_state_changed(ScrollPhase::Idle, now_ms);
        self.populate();
        Some(self.pager.current_slot())
    }

    pub fn resume_auto_scroll(&mut self, now_ms: u64) {
        self.pager.resume_auto_scroll(now_ms);
    }

    pub fn pause_auto_scroll(&mut self) {
        self.pager.pause_auto_scroll();
    }

    pub fn state(&self) -> PagerState {
        self.pager.state()
    }

    pub fn restore_state(&mut self, state: PagerState) -> Jump {
        let jump = self.pager.restore_state(state);
        self.populate();
        jump
    }

    /// Reconciles the attached window with the current slot: releases views
    /// that fell out of range and instantiates the missing ones.
    fn populate(&mut self) {
        let Some(count) = self.pager.source().map(|source| source.count()) else {
            return;
        };
        if count == 0 {
            return;
        }
        let current = self.pager.current_slot();
        let lo = current.saturating_sub(self.offscreen);
        let hi = (current + self.offscreen).min(count - 1);

        let stale: Vec<(usize, ViewId)> = self
            .attached
            .iter()
            .filter(|(slot, _)| **slot < lo || **slot > hi)
            .map(|(slot, view)| (*slot, *view))
            .collect();
        let Some(source) = self.pager.source_mut() else {
            return;
        };
        for (slot, view) in stale {
            self.attached.remove(&slot);
            source.release(slot, view);
        }
        for slot in lo..=hi {
            if self.attached.contains_key(&slot) {
                continue;
            }
            if let Some(view) = source.instantiate(slot) {
                self.attached.insert(slot, view);
            }
        }
    }
}
