// Example: a three-tab view driven by a tab click and then a swipe.
use scrollkit::sim::SimHost;
use scrollkit::{Point, Scroller};
use scrollkit_tabview::sim::SimSelector;
use scrollkit_tabview::{Selector, TabPosition, TabView, TabViewConfig};

fn main() {
    let mut host = SimHost::new();
    let screen = host.create_root(320, 480);
    let mut sc = Scroller::new(host);

    let mut tv: TabView<_, SimSelector> =
        TabView::create(&mut sc, screen, TabViewConfig::new(TabPosition::Top, 48));
    for name in ["Inbox", "Sent", "Archive"] {
        let page = tv.add_tab(&mut sc, name);
        println!("tab {name} -> page {page:?}");
    }
    println!("map={:?}", tv.selector().map());

    let mut now_ms = 0u64;

    // The user taps "Archive".
    tv.selector_mut().click(2);
    tv.on_selector_changed(&mut sc);
    println!(
        "click: active={} settle={}",
        tv.active_index(),
        sc.scroll_end(tv.content()).x
    );
    while sc.is_scrolling(tv.content()) {
        now_ms += 16;
        sc.tick(now_ms);
        while let Some(ev) = sc.host_mut().pop_event() {
            tv.on_event(&mut sc, ev.current, ev.event);
        }
    }

    // Then swipes back toward "Sent".
    let content = tv.content();
    for _ in 0..8 {
        now_ms += 16;
        sc.tick(now_ms);
        sc.drag_by(content, -20, 0);
    }
    sc.drag_release(content, Point::new(-20, 0));
    loop {
        while let Some(ev) = sc.host_mut().pop_event() {
            tv.on_event(&mut sc, ev.current, ev.event);
        }
        if !sc.is_scrolling(content) {
            break;
        }
        now_ms += 16;
        sc.tick(now_ms);
    }

    println!(
        "swipe: active={} off={} checked={}",
        tv.active_index(),
        sc.scroll_x(content),
        tv.selector().is_checked(tv.active_index())
    );
}
