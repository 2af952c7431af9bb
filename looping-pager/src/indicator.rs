/// Callback contract for an external page-indicator widget.
///
/// The bridge is stateless from the engine's point of view: the pager pushes
/// fractional drag progress and discrete page selections, and the indicator
/// renders them however it likes.
pub trait IndicatorBridge {
    /// Fired potentially many times per drag.
    ///
    /// `progress` is always in `(0, 1]`; values of exactly `0` or above `1`
    /// are filtered out before they reach the bridge.
    fn on_indicator_progress(&mut self, indicator_slot: usize, progress: f32);

    /// Fired exactly once per committed page selection.
    fn on_indicator_page_change(&mut self, indicator_slot: usize);
}
