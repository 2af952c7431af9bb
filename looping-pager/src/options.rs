/// Configuration for [`crate::LoopingPager`].
///
/// All options are plain values; the struct is cheap to copy and compare.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerOptions {
    /// Enables sentinel-based looping. Looping is only effective when the
    /// item list has more than one entry.
    pub endless: bool,

    /// Enables the deferred auto-advance.
    pub auto_scroll: bool,

    /// Enables measure-to-tallest-child sizing (see the measure helpers in
    /// the adapter crate).
    pub wrap_content: bool,

    /// Auto-advance period in host-clock milliseconds.
    pub scroll_interval_ms: u64,

    /// Fixed height-from-width ratio. `<= 0` disables aspect sizing.
    pub aspect_ratio: f32,

    /// Whether the indicator self-animates between discrete selections.
    ///
    /// A smart indicator only needs progress while the user is actively
    /// dragging; a plain one also receives progress during the settle.
    pub smart_indicator: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            endless: false,
            auto_scroll: false,
            wrap_content: true,
            scroll_interval_ms: 5000,
            aspect_ratio: 0.0,
            smart_indicator: false,
        }
    }
}

impl PagerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endless(mut self, endless: bool) -> Self {
        self.endless = endless;
        self
    }

    pub fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_wrap_content(mut self, wrap_content: bool) -> Self {
        self.wrap_content = wrap_content;
        self
    }

    pub fn with_scroll_interval_ms(mut self, scroll_interval_ms: u64) -> Self {
        self.scroll_interval_ms = scroll_interval_ms;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_smart_indicator(mut self, smart_indicator: bool) -> Self {
        self.smart_indicator = smart_indicator;
        self
    }
}
