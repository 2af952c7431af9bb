use alloc::boxed::Box;

use crate::{
    IndicatorBridge, Jump, PageSource, PagerOptions, PagerState, ScrollDirection, ScrollPhase,
};

/// The stateful control surface layered on the host's linear pager.
///
/// The engine is driven entirely by the host's scroll callbacks
/// ([`Self::on_page_scrolled`], [`Self::on_page_selected`],
/// [`Self::on_scroll_state_changed`]) plus a timer tick for auto-advance.
/// Where the engine decides to move the visible page itself — the initial
/// seat on attach, resets, sentinel teleports, auto-advance — it returns a
/// [`Jump`] for the host to apply. A returned jump is already reflected in
/// the engine's state; the host applies it to its scroll container without
/// feeding events back.
///
/// Everything runs synchronously on the host's UI thread; there is no
/// locking and no handler blocks.
pub struct LoopingPager<S> {
    options: PagerOptions,
    source: Option<S>,
    indicator: Option<Box<dyn IndicatorBridge>>,

    to_the_right: bool,
    phase: ScrollPhase,
    previous_phase: ScrollPhase,
    previous_slot: usize,
    current_slot: usize,
    /// Continuous position of the last stable (offset 0) scroll event; the
    /// anchor for drag-direction detection.
    settled_position: f32,

    auto_scroll_deadline: Option<u64>,
}

impl<S> core::fmt::Debug for LoopingPager<S>
where
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoopingPager")
            .field("options", &self.options)
            .field("source", &self.source)
            .field("to_the_right", &self.to_the_right)
            .field("phase", &self.phase)
            .field("previous_phase", &self.previous_phase)
            .field("previous_slot", &self.previous_slot)
            .field("current_slot", &self.current_slot)
            .field("settled_position", &self.settled_position)
            .field("auto_scroll_deadline", &self.auto_scroll_deadline)
            .finish_non_exhaustive()
    }
}

impl<S: PageSource> LoopingPager<S> {
    pub fn new(options: PagerOptions) -> Self {
        ldebug!(
            endless = options.endless,
            auto_scroll = options.auto_scroll,
            interval_ms = options.scroll_interval_ms,
            "LoopingPager::new"
        );
        Self {
            options,
            source: None,
            indicator: None,
            to_the_right: true,
            phase: ScrollPhase::Idle,
            previous_phase: ScrollPhase::Idle,
            previous_slot: 0,
            current_slot: 0,
            settled_position: 0.0,
            auto_scroll_deadline: None,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// Installs the source.
    ///
    /// When looping is requested, the visible slot immediately jumps to `1`
    /// (so the user starts on logical item `0` with the leading sentinel
    /// available for a backward drag); the returned jump carries that move.
    pub fn attach_source(&mut self, source: S, now_ms: u64) -> Option<Jump> {
        self.source = Some(source);
        if !self.options.endless {
            return None;
        }
        let count = self.source.as_ref().map_or(0, |source| source.count());
        // The host pager clamps a jump into an undersized slot range.
        let slot = if count == 0 { 0 } else { 1.min(count - 1) };
        if slot != self.current_slot {
            self.select(slot, now_ms);
        }
        Some(Jump {
            slot,
            animated: false,
        })
    }

    /// Removes the source and cancels any pending auto-advance, so no stale
    /// timer callback can fire after teardown.
    pub fn detach_source(&mut self) -> Option<S> {
        self.pause_auto_scroll();
        self.source.take()
    }

    /// Installs (or clears) the indicator bridge.
    pub fn set_indicator(&mut self, indicator: Option<Box<dyn IndicatorBridge>>) {
        self.indicator = indicator;
    }

    pub fn set_smart_indicator(&mut self, smart_indicator: bool) {
        self.options.smart_indicator = smart_indicator;
    }

    pub fn set_auto_scroll(&mut self, auto_scroll: bool) {
        self.options.auto_scroll = auto_scroll;
    }

    pub fn set_scroll_interval_ms(&mut self, scroll_interval_ms: u64) {
        self.options.scroll_interval_ms = scroll_interval_ms;
    }

    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    pub fn previous_slot(&self) -> usize {
        self.previous_slot
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        if self.to_the_right {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        }
    }

    /// The pending auto-advance deadline in host-clock milliseconds, for
    /// hosts that schedule a real timer instead of polling [`Self::tick`].
    pub fn auto_scroll_deadline(&self) -> Option<u64> {
        self.auto_scroll_deadline
    }

    /// Re-seats the pager at its starting slot (`1` when looping, else `0`)
    /// without animation.
    pub fn reset(&mut self, now_ms: u64) -> Jump {
        let slot = if self.options.endless {
            let count = self.source.as_ref().map_or(0, |source| source.count());
            if count == 0 { 0 } else { 1.min(count - 1) }
        } else {
            0
        };
        if slot != self.current_slot {
            self.select(slot, now_ms);
        }
        Jump {
            slot,
            animated: false,
        }
    }

    /// Captures the slot positions for later [`Self::restore_state`].
    pub fn state(&self) -> PagerState {
        PagerState {
            current_slot: self.current_slot,
            previous_slot: self.previous_slot,
        }
    }

    /// Restores slot positions from a previously captured snapshot and hands
    /// back the non-animated jump that puts the host there.
    pub fn restore_state(&mut self, state: PagerState) -> Jump {
        self.current_slot = state.current_slot;
        self.previous_slot = state.previous_slot;
        Jump {
            slot: state.current_slot,
            animated: false,
        }
    }

    /// Handles the host's scroll-progress event: `slot` plus a fractional
    /// `offset` in `[0, 1)` toward the next slot.
    ///
    /// Derives the drag direction, predicts the indicator slot the drag is
    /// heading toward, and forwards a progress value in `(0, 1]` to the
    /// bridge. Events whose computed progress is `0` or above `1` are
    /// discarded as no-op edges.
    pub fn on_page_scrolled(&mut self, slot: usize, offset: f32) {
        self.to_the_right = slot as f32 + offset >= self.settled_position;
        if offset == 0.0 {
            self.settled_position = slot as f32;
        }

        let target = self.selecting_indicator_position(self.to_the_right);

        let progress = if self.phase == ScrollPhase::Settling
            && self.current_slot.abs_diff(self.previous_slot) > 1
        {
            // A programmatic multi-page jump is in flight: spread progress
            // across the full distance so the indicator advances smoothly
            // through the intermediate pages instead of snapping.
            let diff = self.current_slot.abs_diff(self.previous_slot) as f32;
            if self.to_the_right {
                (slot as i64 - self.previous_slot as i64) as f32 / diff + offset / diff
            } else {
                (self.previous_slot as i64 - (slot as i64 + 1)) as f32 / diff
                    + (1.0 - offset) / diff
            }
        } else if self.to_the_right {
            offset
        } else {
            1.0 - offset
        };

        if progress == 0.0 || progress > 1.0 {
            return;
        }

        if self.options.smart_indicator {
            // A self-animating indicator only wants progress from a live drag.
            if self.phase != ScrollPhase::Dragging {
                return;
            }
            self.emit_progress(target, progress);
        } else {
            if self.phase == ScrollPhase::Dragging
                && ((self.to_the_right && target.abs_diff(self.current_slot) == 2)
                    || (!self.to_the_right && target == self.current_slot))
            {
                // Spurious edge at the loop boundary; emitting it makes the
                // indicator flicker.
                return;
            }
            self.emit_progress(target, progress);
        }
    }

    /// Handles the host's committed page selection.
    pub fn on_page_selected(&mut self, slot: usize, now_ms: u64) {
        self.select(slot, now_ms);
    }

    /// Handles a scroll-state transition.
    ///
    /// On coming to rest on a sentinel slot, returns the silent re-seat jump
    /// that closes the loop; the teleport happens only at rest, never
    /// mid-drag, so it is visually undetectable.
    pub fn on_scroll_state_changed(&mut self, phase: ScrollPhase, now_ms: u64) -> Option<Jump> {
        if !self.options.smart_indicator
            && self.phase == ScrollPhase::Settling
            && phase == ScrollPhase::Dragging
        {
            // A new drag interrupted the settle: flush a final full-progress
            // event at the old target before tracking the new drag.
            let target = self.selecting_indicator_position(self.to_the_right);
            self.emit_progress(target, 1.0);
        }
        self.previous_phase = self.phase;
        self.phase = phase;

        if phase != ScrollPhase::Idle {
            return None;
        }

        let mut jump = None;
        if self.options.endless {
            let count = self.source.as_ref()?.count();
            if count < 2 {
                return None;
            }
            let target = match self.current_slot {
                0 => Some(count - 2),
                slot if slot == count - 1 => Some(1),
                _ => None,
            };
            if let Some(slot) = target {
                ldebug!(from = self.current_slot, to = slot, "idle teleport");
                self.select(slot, now_ms);
                jump = Some(Jump {
                    slot,
                    animated: false,
                });
            }
        }

        let settled = self.indicator_position();
        self.emit_progress(settled, 1.0);
        jump
    }

    /// Advances the auto-scroll if its deadline has passed.
    ///
    /// Fires at most once per armed deadline; the deadline is re-armed by
    /// the page selection the returned animated jump eventually produces.
    /// Suppressed (and the deadline consumed) when auto-scroll is disabled,
    /// no source is attached, or fewer than two items exist.
    pub fn tick(&mut self, now_ms: u64) -> Option<Jump> {
        let deadline = self.auto_scroll_deadline?;
        if now_ms < deadline {
            return None;
        }
        self.auto_scroll_deadline = None;

        let source = self.source.as_ref()?;
        if !self.options.auto_scroll || source.count() < 2 {
            return None;
        }

        let slot = if !self.options.endless && source.count() - 1 == self.current_slot {
            0
        } else {
            self.current_slot + 1
        };
        self.current_slot = slot;
        ltrace!(slot, "auto advance");
        Some(Jump {
            slot,
            animated: true,
        })
    }

    /// Arms the auto-advance deadline.
    pub fn resume_auto_scroll(&mut self, now_ms: u64) {
        self.auto_scroll_deadline = Some(now_ms.saturating_add(self.options.scroll_interval_ms));
    }

    /// Cancels the pending auto-advance.
    pub fn pause_auto_scroll(&mut self) {
        self.auto_scroll_deadline = None;
    }

    /// 0-based indicator index for the current slot, sentinel-adjusted.
    ///
    /// Identity for non-looping pagers and loop-unaware sources.
    pub fn indicator_position(&self) -> usize {
        if !self.options.endless {
            return self.current_slot;
        }
        let Some(source) = &self.source else {
            return self.current_slot;
        };
        if !source.loop_aware() {
            return self.current_slot;
        }
        if self.current_slot == 0 {
            source.list_count().saturating_sub(1)
        } else if self.current_slot == source.last_slot_index() + 1 {
            0
        } else {
            self.current_slot - 1
        }
    }

    /// Predicts which indicator index the drag is heading toward, before the
    /// page-selected event fires.
    ///
    /// With no active directional drag (settling, idle, or a drag freshly
    /// interrupting a settle) this defers to [`Self::indicator_position`].
    /// Otherwise it applies a one-step delta, rewriting the front- and
    /// tail-boundary cases to jump across the sentinel rather than report an
    /// out-of-range target.
    pub fn selecting_indicator_position(&self, to_the_right: bool) -> usize {
        if self.phase == ScrollPhase::Settling
            || self.phase == ScrollPhase::Idle
            || (self.previous_phase == ScrollPhase::Settling && self.phase == ScrollPhase::Dragging)
        {
            return self.indicator_position();
        }
        let delta: isize = if to_the_right { 1 } else { -1 };
        let current = self.current_slot as isize;

        let stepped = (current + delta).max(0) as usize;
        if !self.options.endless {
            return stepped;
        }
        let Some(source) = &self.source else {
            return stepped;
        };
        if !source.loop_aware() {
            return stepped;
        }

        if self.current_slot == 1 && !to_the_right {
            source.last_slot_index().saturating_sub(1)
        } else if self.current_slot == source.last_slot_index() && to_the_right {
            0
        } else {
            (current + delta - 1).max(0) as usize
        }
    }

    /// Number of pages the indicator should render.
    pub fn indicator_count(&self) -> usize {
        match &self.source {
            None => 0,
            Some(source) if source.loop_aware() => source.list_count(),
            Some(source) => source.count(),
        }
    }

    fn select(&mut self, slot: usize, now_ms: u64) {
        self.previous_slot = self.current_slot;
        self.current_slot = slot;
        let indicator_slot = self.indicator_position();
        ltrace!(slot, indicator_slot, "page selected");
        if let Some(indicator) = self.indicator.as_deref_mut() {
            indicator.on_indicator_page_change(indicator_slot);
        }
        // Manual interaction resets the timer: cancel and reschedule.
        self.auto_scroll_deadline = Some(now_ms.saturating_add(self.options.scroll_interval_ms));
    }

    fn emit_progress(&mut self, indicator_slot: usize, progress: f32) {
        if let Some(indicator) = self.indicator.as_deref_mut() {
            indicator.on_indicator_progress(indicator_slot, progress);
        }
    }
}
