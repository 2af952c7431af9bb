/// Scroll state of the host's linear pager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// An opaque handle into the host's view arena.
///
/// The engine never dereferences a `ViewId`; it only stores, compares, and
/// hands handles back to the host. Two handles represent the same view iff
/// they are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

/// View classification used as the recycling-cache key.
///
/// The default classification puts every logical item in kind `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewKind(pub u32);

/// A position command the engine hands back to the host pager.
///
/// A non-animated jump is a silent re-seat (initial placement, reset, or a
/// sentinel teleport): it is already accounted for in the engine's state,
/// and the host must **not** feed synthetic scroll events back for it. An
/// animated jump is a regular page move (auto-advance): the host animates
/// to `slot` and reports the resulting scroll events as usual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jump {
    pub slot: usize,
    pub animated: bool,
}
