// Example: driving the engine with raw scroll events and watching the loop close.
use looping_pager::{
    IndicatorBridge, LoopingAdapter, LoopingPager, PageSource, PagerOptions, ScrollPhase,
    ViewBinder, ViewId, ViewKind,
};

struct PrintBinder {
    next: u64,
}

impl ViewBinder<&'static str> for PrintBinder {
    fn inflate(&mut self, _kind: ViewKind, _logical: usize) -> ViewId {
        self.next += 1;
        ViewId(self.next)
    }

    fn bind(&mut self, view: ViewId, item: &&'static str, logical: usize, _kind: ViewKind) {
        println!("bind view#{} <- {item:?} (item {logical})", view.0);
    }

    fn attach(&mut self, _view: ViewId) {}

    fn detach(&mut self, _view: ViewId) {}
}

struct PrintIndicator;

impl IndicatorBridge for PrintIndicator {
    fn on_indicator_progress(&mut self, indicator_slot: usize, progress: f32) {
        println!("indicator: slot {indicator_slot} progress {progress:.2}");
    }

    fn on_indicator_page_change(&mut self, indicator_slot: usize) {
        println!("indicator: page -> {indicator_slot}");
    }
}

fn main() {
    let adapter = LoopingAdapter::new(
        vec!["spring", "summer", "autumn"],
        true,
        PrintBinder { next: 0 },
    );
    let mut pager = LoopingPager::new(PagerOptions::new().with_endless(true));
    pager.set_indicator(Some(Box::new(PrintIndicator)));

    if let Some(jump) = pager.attach_source(adapter, 0) {
        println!("host jumps to slot {}", jump.slot);
    }
    pager.on_page_scrolled(pager.current_slot(), 0.0);

    // The host instantiates the visible neighborhood.
    for slot in 0..=2 {
        pager.source_mut().unwrap().instantiate(slot);
    }

    // Drag backward from "spring" across the loop edge onto the leading
    // sentinel (a copy of "autumn").
    pager.on_scroll_state_changed(ScrollPhase::Dragging, 0);
    for offset in [0.8, 0.55, 0.3] {
        pager.on_page_scrolled(0, offset);
    }
    pager.on_scroll_state_changed(ScrollPhase::Settling, 0);
    pager.on_page_selected(0, 0);
    pager.on_page_scrolled(0, 0.0);

    if let Some(jump) = pager.on_scroll_state_changed(ScrollPhase::Idle, 0) {
        println!("host teleports silently to slot {}", jump.slot);
    }
    println!("indicator position: {}", pager.indicator_position());
}
