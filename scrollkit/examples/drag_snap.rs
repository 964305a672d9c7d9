// Example: a horizontal pager driven by simulated drag input and a 60fps tick.
use scrollkit::sim::SimHost;
use scrollkit::{Flow, Length, ObjectSpec, Point, ScrollFlags, ScrollSnap, Scroller};

fn main() {
    let mut host = SimHost::new();
    let screen = host.create_root(320, 240);
    let pager = host.create(
        screen,
        ObjectSpec::new(Length::Px(300), Length::Px(200)).with_flow(Flow::Row),
    );
    for _ in 0..5 {
        host.create(pager, ObjectSpec::fill());
    }

    let mut sc = Scroller::new(host);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.add_flags(pager, ScrollFlags::SCROLL_ONE);

    // A finger swipes left in 12px steps; content follows it.
    let mut now_ms = 0u64;
    let mut last = Point::ZERO;
    for _ in 0..10 {
        now_ms += 16;
        sc.tick(now_ms);
        last = Point::new(12, 0);
        let rest = sc.drag_by(pager, last.x, last.y);
        println!(
            "t={now_ms}ms drag off={} rest={:?}",
            sc.scroll_x(pager),
            rest
        );
    }
    sc.drag_release(pager, last);
    println!(
        "release: off={} settle={}",
        sc.scroll_x(pager),
        sc.scroll_end(pager).x
    );

    while sc.is_scrolling(pager) {
        now_ms += 16;
        sc.tick(now_ms);
        let (hor, _) = sc.scrollbar_area(pager);
        println!("t={now_ms}ms off={} thumb={:?}", sc.scroll_x(pager), hor);
    }

    // A UI would dispatch these to its handlers and redraw the dirty areas.
    let dirty = sc.host_mut().take_dirty();
    let events = sc.host_mut().drain_events();
    println!(
        "done: off={} dirty={} events={}",
        sc.scroll_x(pager),
        dirty.len(),
        events.len()
    );
}
