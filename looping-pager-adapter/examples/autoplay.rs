use looping_pager::{PagerOptions, ViewBinder, ViewId, ViewKind};
use looping_pager_adapter::PagerController;

struct Binder {
    next: u64,
}

impl ViewBinder<&'static str> for Binder {
    fn inflate(&mut self, _kind: ViewKind, logical: usize) -> ViewId {
        self.next += 1;
        println!("inflate view#{} for item {logical}", self.next);
        ViewId(self.next)
    }

    fn bind(&mut self, _view: ViewId, _item: &&'static str, _logical: usize, _kind: ViewKind) {}

    fn attach(&mut self, _view: ViewId) {}

    fn detach(&mut self, _view: ViewId) {}
}

fn main() {
    // Example: a carousel that advances on its own every 2 seconds.
    //
    // A host would:
    // - call tick(now_ms) in a frame loop / timer
    // - animate to the returned slot when a tick fires
    // - render the views the controller keeps attached
    let mut c = PagerController::new(
        PagerOptions::new()
            .with_endless(true)
            .with_auto_scroll(true)
            .with_scroll_interval_ms(2000),
        vec!["one", "two", "three"],
        Binder { next: 0 },
        0,
    );

    let mut now_ms = 0u64;
    for _ in 0..10 {
        now_ms += 1000;
        if let Some(slot) = c.tick(now_ms) {
            let adapter = c.adapter().unwrap();
            let item = adapter.item(adapter.slot_to_logical(slot));
            println!("t={now_ms}ms -> slot {slot} showing {item:?}");
        }
    }
    println!(
        "attached slots at rest: {:?}",
        c.attached_slots().collect::<Vec<_>>()
    );
}
