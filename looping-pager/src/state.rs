/// A lightweight, serializable snapshot of the pager's slot positions.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Useful for restoring a pager across host lifecycle events without
/// coupling the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub current_slot: usize,
    pub previous_slot: usize,
}
