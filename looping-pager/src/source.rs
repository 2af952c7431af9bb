use crate::ViewId;

/// The capability contract the pager sees.
///
/// A source exposes a slot space (possibly padded with sentinels), produces
/// and releases per-slot views, and answers the looping-aware questions the
/// pager needs for indicator math. The defaults make a plain source behave
/// exactly like a non-looping adapter; [`crate::LoopingAdapter`] overrides
/// them.
pub trait PageSource {
    /// Slot count as seen by the host pager (sentinels included when looping
    /// is effective).
    fn count(&self) -> usize;

    /// Creates or recycles the view for `slot`, binds it, and attaches it.
    ///
    /// Returns `None` for an out-of-range slot or an empty item list.
    fn instantiate(&mut self, slot: usize) -> Option<ViewId>;

    /// Detaches the view for `slot`, possibly recycling it.
    fn release(&mut self, slot: usize, view: ViewId);

    /// Stable slot of a live view across a dataset refresh.
    ///
    /// `None` means no slot-to-view association survives the refresh and the
    /// host must rebuild the view.
    fn stable_slot(&self, view: ViewId) -> Option<usize> {
        let _ = view;
        None
    }

    /// Logical item count, unadjusted for sentinels.
    fn list_count(&self) -> usize {
        self.count()
    }

    /// Index of the last slot holding real content.
    fn last_slot_index(&self) -> usize {
        self.count().saturating_sub(1)
    }

    /// Whether this source implements sentinel-based looping.
    fn loop_aware(&self) -> bool {
        false
    }
}
