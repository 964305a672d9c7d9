use crate::sim::{SimHost, SimId};
use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i32
    }
}

type Sc = Scroller<SimId, SimHost>;

/// A `width` × `height` container at the screen origin holding a column of `count` rows.
fn column(width: i32, height: i32, row_height: i32, count: usize) -> (Sc, SimId, Vec<SimId>) {
    let mut host = SimHost::new();
    let root = host.create_root(800, 800);
    let list = host.create(
        root,
        ObjectSpec::new(Length::Px(width), Length::Px(height)).with_flow(Flow::Column),
    );
    let rows = (0..count)
        .map(|_| host.create(list, ObjectSpec::new(Length::Pct(100), Length::Px(row_height))))
        .collect();
    (Scroller::new(host), list, rows)
}

/// A 300 × 300 container with `count` full-size pages in one row.
fn pager(count: usize) -> (Sc, SimId, Vec<SimId>) {
    let mut host = SimHost::new();
    let root = host.create_root(800, 800);
    let pager = host.create(
        root,
        ObjectSpec::new(Length::Px(300), Length::Px(300)).with_flow(Flow::Row),
    );
    let pages = (0..count)
        .map(|_| host.create(pager, ObjectSpec::fill()))
        .collect();
    (Scroller::new(host), pager, pages)
}

fn settle(sc: &mut Sc) {
    let end = sc.now_ms() + sc.options().anim_duration_ms;
    sc.tick(end);
}

#[test]
fn untouched_objects_read_as_defaults() {
    let (sc, list, _) = column(100, 200, 50, 2);
    let st = sc.state(list);
    assert_eq!(st.offset(), Point::ZERO);
    assert_eq!(sc.scroll_dir(list), Dir::ALL);
    assert_eq!(sc.snap_x(list), ScrollSnap::None);
    assert_eq!(sc.snap_y(list), ScrollSnap::None);
    assert_eq!(sc.scrollbar_mode(list), ScrollbarMode::Auto);
    assert!(sc.flags(list).contains(ScrollFlags::SCROLLABLE | ScrollFlags::SNAPPABLE));
    assert!(!sc.flags(list).contains(ScrollFlags::SCROLL_ONE));
    assert!(!sc.is_scrolling(list));
}

#[test]
fn limits_follow_content_and_offset() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    assert_eq!(sc.scroll_top(list), 0);
    assert_eq!(sc.scroll_bottom(list), 400);
    assert_eq!(sc.scroll_left(list), 0);
    assert_eq!(sc.scroll_right(list), 0);

    sc.scroll_to_y(list, 150, false);
    assert_eq!(sc.scroll_y(list), 150);
    assert_eq!(sc.scroll_top(list), 150);
    assert_eq!(sc.scroll_bottom(list), 250);
    assert_eq!(sc.limits(list).max(Axis::Y), 400);
}

#[test]
fn limits_include_padding() {
    let (mut sc, list, _) = column(100, 200, 100, 3);
    sc.host_mut().set_padding(list, Padding {
        top: 10,
        bottom: 20,
        ..Padding::default()
    });
    // Rows now span 10..310, plus 20 bottom padding, in a 200 tall box.
    assert_eq!(sc.scroll_bottom(list), 130);
}

#[test]
fn undersized_content_has_negative_limit_and_does_not_scroll() {
    let (mut sc, list, _) = column(100, 200, 50, 2);
    assert_eq!(sc.scroll_bottom(list), -100);
    assert_eq!(sc.limits(list).max(Axis::Y), 0);

    sc.scroll_to_y(list, 80, false);
    assert_eq!(sc.scroll_y(list), 0);
    assert!(sc.host().dirty().is_empty());
}

#[test]
fn empty_container_has_zero_limits() {
    let mut host = SimHost::new();
    let root = host.create_root(400, 400);
    let empty = host.create(root, ObjectSpec::new(Length::Px(100), Length::Px(100)));
    let sc = Scroller::new(host);
    assert_eq!(sc.limits(empty), ScrollLimits::default());
}

#[test]
fn scroll_to_in_range_is_exact_and_notifies() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to(list, 0, 123, false);
    assert_eq!(sc.scroll_y(list), 123);
    assert_eq!(sc.host().dirty(), &[Area::new(0, 0, 100, 200)]);
    assert_eq!(sc.host().events_for(list), [Event::Scroll]);
}

#[test]
fn repeated_scroll_to_is_idempotent() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to(list, 0, 300, false);
    sc.host_mut().take_dirty();
    sc.host_mut().drain_events();

    sc.scroll_to(list, 0, 300, false);
    assert_eq!(sc.scroll_y(list), 300);
    assert!(sc.host().dirty().len() <= 1);
    assert!(sc.host().events_for(list).len() <= 1);
}

#[test]
fn scroll_to_clamps_out_of_range_targets() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 10_000, false);
    assert_eq!(sc.scroll_y(list), 400);
    sc.scroll_to_y(list, -50, false);
    assert_eq!(sc.scroll_y(list), 0);
}

#[test]
fn scroll_by_is_relative() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_by(list, 0, 70, false);
    sc.scroll_by(list, 0, 70, false);
    assert_eq!(sc.scroll_y(list), 140);
    sc.scroll_by(list, 0, 1_000, false);
    assert_eq!(sc.scroll_y(list), 400);
}

#[test]
fn locked_axis_is_left_unchanged() {
    let (mut sc, pager, _) = pager(3);
    sc.set_scroll_dir(pager, Dir::VER);
    sc.scroll_to(pager, 300, 0, false);
    assert_eq!(sc.scroll_x(pager), 0);
    assert!(sc.host().events_for(pager).is_empty());

    sc.set_scroll_dir(pager, Dir::LEFT);
    sc.scroll_to_x(pager, 300, false);
    assert_eq!(sc.scroll_x(pager), 300);
}

#[test]
fn scroll_to_x_keeps_y() {
    let mut host = SimHost::new();
    let root = host.create_root(800, 800);
    let board = host.create(root, ObjectSpec::new(Length::Px(100), Length::Px(100)));
    host.create(
        board,
        ObjectSpec::new(Length::Px(400), Length::Px(400)).with_pos(0, 0),
    );
    let mut sc = Scroller::new(host);

    sc.scroll_to(board, 50, 60, false);
    sc.scroll_to_x(board, 120, false);
    assert_eq!(sc.scroll_offset(board), Point::new(120, 60));
    sc.scroll_to_y(board, 10, false);
    assert_eq!(sc.scroll_offset(board), Point::new(120, 10));
}

#[test]
fn animated_scroll_runs_on_ticks_and_ends() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 300, true);

    assert_eq!(sc.scroll_y(list), 0);
    assert!(sc.is_scrolling(list));
    assert_eq!(sc.scroll_end(list), Point::new(0, 300));

    let mut last = 0;
    for now_ms in [50, 100, 150, 200, 250] {
        sc.tick(now_ms);
        let y = sc.scroll_y(list);
        assert!(y >= last && y <= 300);
        last = y;
    }
    sc.tick(300);
    assert_eq!(sc.scroll_y(list), 300);
    assert!(!sc.is_scrolling(list));

    let events = sc.host().events_for(list);
    assert_eq!(events.first(), Some(&Event::ScrollBegin));
    assert_eq!(events.last(), Some(&Event::ScrollEnd));
    assert_eq!(
        events.iter().filter(|e| **e == Event::ScrollEnd).count(),
        1
    );
}

#[test]
fn new_animation_replaces_the_running_one() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 300, true);
    sc.tick(100);
    let mid = sc.scroll_y(list);
    assert!(mid > 0 && mid < 300);

    sc.scroll_to_y(list, 50, true);
    assert_eq!(sc.scroll_end(list).y, 50);
    let tween = sc.state(list).anim().get(Axis::Y).copied().unwrap();
    assert_eq!(tween.from, mid);
    assert_eq!(tween.start_ms, 100);

    sc.tick(400);
    assert_eq!(sc.scroll_y(list), 50);
    assert!(!sc.is_scrolling(list));
}

#[test]
fn immediate_scroll_cancels_animation_on_that_axis() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 300, true);
    sc.scroll_to_y(list, 20, false);
    assert_eq!(sc.scroll_y(list), 20);
    assert!(!sc.is_scrolling(list));
    sc.tick(1_000);
    assert_eq!(sc.scroll_y(list), 20);
}

#[test]
fn tick_writes_then_invalidates_then_emits() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 100, true);
    sc.host_mut().drain_events();
    sc.tick(150);
    assert_eq!(sc.host().dirty().len(), 1);
    assert_eq!(sc.host().events_for(list), [Event::Scroll]);
}

#[test]
fn scroll_to_view_brings_row_into_view_once() {
    let (mut sc, list, rows) = column(100, 200, 50, 20);
    sc.scroll_to_view(rows[10], false);

    // Row 10 spans 500..550; the smallest move that shows it puts its bottom at the edge.
    assert_eq!(sc.scroll_y(list), 350);
    let view = sc.screen_area(list);
    assert!(view.contains(&sc.screen_area(rows[10])));

    sc.host_mut().take_dirty();
    sc.host_mut().drain_events();
    sc.scroll_to_view(rows[10], false);
    assert_eq!(sc.scroll_y(list), 350);
    assert!(sc.host().dirty().is_empty());

    sc.scroll_to_view(rows[2], false);
    assert_eq!(sc.scroll_y(list), 100);
}

#[test]
fn scroll_to_view_respects_padding() {
    let (mut sc, list, rows) = column(100, 200, 50, 20);
    sc.host_mut().set_padding(list, Padding {
        top: 10,
        bottom: 10,
        ..Padding::default()
    });
    sc.scroll_to_view(rows[5], false);
    // Row 5 spans 260..310 and must end 10px above the bottom edge.
    assert_eq!(sc.scroll_y(list), 120);
}

#[test]
fn scroll_to_view_uses_snap_alignment() {
    let (mut sc, pager, pages) = pager(4);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.scroll_to_view(pages[2], false);
    assert_eq!(sc.scroll_x(pager), 600);
}

#[test]
fn scroll_to_view_recursive_walks_up() {
    let mut host = SimHost::new();
    let root = host.create_root(800, 800);
    let outer = host.create(
        root,
        ObjectSpec::new(Length::Px(200), Length::Px(200)).with_flow(Flow::Column),
    );
    for _ in 0..4 {
        host.create(outer, ObjectSpec::new(Length::Pct(100), Length::Px(100)));
    }
    let inner = host.create(
        outer,
        ObjectSpec::new(Length::Pct(100), Length::Px(100)).with_flow(Flow::Column),
    );
    let mut leaf = None;
    for _ in 0..5 {
        leaf = Some(host.create(inner, ObjectSpec::new(Length::Pct(100), Length::Px(40))));
    }
    let leaf = leaf.unwrap();
    let mut sc = Scroller::new(host);

    sc.scroll_to_view_recursive(leaf, false);
    // Leaf spans 160..200 inside `inner`, which spans 400..500 inside `outer`.
    assert_eq!(sc.scroll_y(inner), 100);
    assert_eq!(sc.scroll_y(outer), 300);
    let outer_view = sc.screen_area(outer);
    assert!(outer_view.contains(&sc.screen_area(leaf)));
}

#[test]
fn focus_only_scrolls_objects_that_ask_for_it() {
    let (mut sc, list, rows) = column(100, 200, 50, 20);
    sc.clear_flags(rows[8], ScrollFlags::ON_FOCUS);
    sc.focus(rows[8], false);
    assert_eq!(sc.scroll_y(list), 0);

    sc.focus(rows[9], false);
    assert_eq!(sc.scroll_y(list), 300);
}

#[test]
fn center_snap_picks_nearest_child() {
    let (mut sc, pager, _) = pager(3);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.scroll_to_x(pager, 290, false);
    assert_eq!(sc.snap_offset(pager, Axis::X), 300);

    sc.update_snap(pager, false);
    assert_eq!(sc.scroll_x(pager), 300);
}

#[test]
fn snap_ties_go_to_the_earliest_child() {
    assert_eq!(nearest_snap([0, 300, 600], 150, None), Some(0));
    assert_eq!(nearest_snap([0, 300, 600], 451, None), Some(600));
    assert_eq!(nearest_snap([0, 300, 600], 600, Some((0, 300))), Some(300));
    assert_eq!(nearest_snap(core::iter::empty(), 10, None), None);
}

#[test]
fn snap_offsets_per_alignment() {
    let size = Area::new(0, 0, 300, 300);
    let pad = Padding {
        left: 10,
        right: 20,
        ..Padding::default()
    };
    let child = Area::new(400, 0, 100, 100);
    assert_eq!(align_offset(ScrollSnap::None, Axis::X, size, pad, child), None);
    assert_eq!(align_offset(ScrollSnap::Start, Axis::X, size, pad, child), Some(390));
    assert_eq!(align_offset(ScrollSnap::End, Axis::X, size, pad, child), Some(220));
    // Child center 450, padded view center 10 + 270 / 2 = 145.
    assert_eq!(align_offset(ScrollSnap::Center, Axis::X, size, pad, child), Some(305));
}

#[test]
fn snap_without_alignment_or_children_keeps_offset() {
    let (mut sc, pager, _) = pager(3);
    sc.scroll_to_x(pager, 290, false);
    sc.update_snap(pager, false);
    assert_eq!(sc.scroll_x(pager), 290);

    let mut host = SimHost::new();
    let root = host.create_root(400, 400);
    let empty = host.create(root, ObjectSpec::new(Length::Px(100), Length::Px(100)));
    let mut sc = Scroller::new(host);
    sc.set_snap_y(empty, ScrollSnap::Start);
    sc.update_snap(empty, false);
    assert_eq!(sc.scroll_y(empty), 0);
}

#[test]
fn snap_skips_children_that_are_not_snappable() {
    let (mut sc, pager, pages) = pager(3);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.clear_flags(pages[1], ScrollFlags::SNAPPABLE);
    sc.scroll_to_x(pager, 290, false);
    sc.update_snap(pager, false);
    assert_eq!(sc.scroll_x(pager), 0);
}

#[test]
fn snap_may_center_undersized_content() {
    let mut host = SimHost::new();
    let root = host.create_root(800, 800);
    let strip = host.create(
        root,
        ObjectSpec::new(Length::Px(300), Length::Px(100)).with_flow(Flow::Row),
    );
    host.create(strip, ObjectSpec::new(Length::Px(100), Length::Px(100)));
    let mut sc = Scroller::new(host);
    sc.set_snap_x(strip, ScrollSnap::Center);
    sc.update_snap(strip, false);
    assert_eq!(sc.scroll_x(strip), -100);
}

#[test]
fn elastic_drag_overscrolls_and_release_returns() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.drag_begin(list);
    assert!(sc.is_scrolling(list));
    let rest = sc.drag_by(list, 0, -40);
    assert_eq!(rest, Point::ZERO);
    assert_eq!(sc.scroll_y(list), -10);
    assert_eq!(sc.scroll_top(list), -10);

    sc.drag_release(list, Point::ZERO);
    assert_eq!(sc.scroll_end(list), Point::new(0, 0));
    assert!(sc.is_scrolling(list));
    settle(&mut sc);
    assert_eq!(sc.scroll_y(list), 0);
    assert!(!sc.is_scrolling(list));

    let events = sc.host().events_for(list);
    assert_eq!(events.first(), Some(&Event::ScrollBegin));
    assert_eq!(
        events.iter().filter(|e| **e == Event::ScrollBegin).count(),
        1
    );
    assert_eq!(
        events.iter().filter(|e| **e == Event::ScrollEnd).count(),
        2
    );
}

#[test]
fn elastic_damping_only_applies_past_the_edge() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 380, false);
    sc.drag_by(list, 0, 60);
    // 20px to the edge at full speed, the remaining 40px at a quarter.
    assert_eq!(sc.scroll_y(list), 410);
    assert_eq!(sc.scroll_bottom(list), -10);
}

#[test]
fn scroll_to_during_elastic_drag_defers_clamping() {
    let (mut sc, pager, _) = pager(3);
    sc.drag_begin(pager);
    sc.scroll_to_x(pager, 620, false);
    assert_eq!(sc.scroll_x(pager), 620);
    sc.drag_release(pager, Point::ZERO);
    settle(&mut sc);
    assert_eq!(sc.scroll_x(pager), 600);
}

#[test]
fn drag_to_extreme_offsets_keeps_queries_total() {
    for target in [Coord::MIN, Coord::MAX] {
        let (mut sc, pager, pages) = pager(3);
        sc.drag_begin(pager);
        sc.scroll_by(pager, target, 0, false);
        assert_eq!(sc.scroll_x(pager), target);

        let limits = sc.limits(pager);
        assert_eq!(limits.left, target);
        assert!(limits.max(Axis::X) >= 0);
        let _ = sc.scroll_right(pager);
        let _ = sc.scrollbar_area(pager);
        let _ = sc.screen_area(pages[2]);

        // Pulling further past the edge stays pinned at the limit.
        let further = if target < 0 { -50 } else { 50 };
        sc.drag_by(pager, further, 0);
        assert_eq!(sc.scroll_x(pager), target);

        sc.drag_release(pager, Point::ZERO);
        settle(&mut sc);
        assert!((0..=600).contains(&sc.scroll_x(pager)));
        assert!(!sc.is_scrolling(pager));
    }
}

#[test]
fn rigid_drag_stops_at_edges_and_chains_the_rest() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.clear_flags(list, ScrollFlags::ELASTIC);
    let rest = sc.drag_by(list, 0, -25);
    assert_eq!(sc.scroll_y(list), 0);
    assert_eq!(rest, Point::new(0, -25));

    sc.clear_flags(list, ScrollFlags::CHAIN);
    let rest = sc.drag_by(list, 0, -25);
    assert_eq!(rest, Point::ZERO);
}

#[test]
fn drag_in_locked_direction_does_not_move() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.set_scroll_dir(list, Dir::BOTTOM);
    sc.scroll_to_y(list, 100, false);
    let rest = sc.drag_by(list, 0, -30);
    assert_eq!(sc.scroll_y(list), 100);
    assert_eq!(rest, Point::new(0, -30));
    sc.drag_by(list, 0, 30);
    assert_eq!(sc.scroll_y(list), 130);
}

#[test]
fn drag_on_non_scrollable_object_hands_back_everything() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.clear_flags(list, ScrollFlags::SCROLLABLE);
    assert_eq!(sc.drag_by(list, 5, 7), Point::new(5, 7));
    assert!(!sc.is_scrolling(list));
}

#[test]
fn momentum_release_snaps_to_nearest_page() {
    let (mut sc, pager, _) = pager(3);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.drag_by(pager, 120, 0);
    sc.drag_release(pager, Point::new(20, 0));
    assert_eq!(sc.scroll_end(pager).x, 300);
    settle(&mut sc);
    assert_eq!(sc.scroll_x(pager), 300);
}

#[test]
fn momentum_is_clamped_without_snap() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.drag_by(list, 0, 50);
    sc.drag_release(list, Point::new(0, 100));
    assert_eq!(sc.scroll_end(list).y, 400);

    sc.clear_flags(list, ScrollFlags::MOMENTUM);
    settle(&mut sc);
    sc.drag_by(list, 0, -50);
    sc.drag_release(list, Point::new(0, -100));
    assert_eq!(sc.scroll_end(list).y, 350);
}

#[test]
fn scroll_one_limits_a_throw_to_the_next_page() {
    let (mut sc, pager, _) = pager(3);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.add_flags(pager, ScrollFlags::SCROLL_ONE);
    sc.drag_by(pager, 120, 0);
    sc.drag_release(pager, Point::new(100, 0));
    assert_eq!(sc.scroll_end(pager).x, 300);

    let (mut sc, pager, _) = self::pager(3);
    sc.set_snap_x(pager, ScrollSnap::Center);
    sc.drag_by(pager, 120, 0);
    sc.drag_release(pager, Point::new(100, 0));
    assert_eq!(sc.scroll_end(pager).x, 600);
}

#[test]
fn grabbing_stops_a_running_animation() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.scroll_to_y(list, 300, true);
    sc.tick(100);
    let y = sc.scroll_y(list);
    sc.drag_begin(list);
    assert!(sc.state(list).anim().get(Axis::Y).is_none());
    sc.tick(400);
    assert_eq!(sc.scroll_y(list), y);
    assert!(sc.is_scrolling(list));
}

#[test]
fn scrollbar_off_is_always_empty() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.set_scrollbar_mode(list, ScrollbarMode::Off);
    for y in [0, 200, 400] {
        sc.scroll_to_y(list, y, false);
        let (hor, ver) = sc.scrollbar_area(list);
        assert!(hor.is_empty() && ver.is_empty());
    }
    sc.drag_by(list, 0, -100);
    let (hor, ver) = sc.scrollbar_area(list);
    assert!(hor.is_empty() && ver.is_empty());
}

#[test]
fn scrollbar_auto_tracks_offset() {
    let (mut sc, list, _) = column(100, 200, 100, 4);
    let (hor, ver) = sc.scrollbar_area(list);
    assert!(hor.is_empty());
    // Track 196px, thumb 196 * 200 / 400.
    assert_eq!(ver, Area::new(94, 2, 4, 98));

    sc.scroll_to_y(list, 200, false);
    let (_, ver) = sc.scrollbar_area(list);
    assert_eq!(ver, Area::new(94, 100, 4, 98));

    sc.scroll_to_y(list, 100, false);
    let (_, ver) = sc.scrollbar_area(list);
    assert_eq!(ver.y, 2 + 49);
}

#[test]
fn scrollbar_shrinks_while_overscrolled() {
    let (mut sc, list, _) = column(100, 200, 100, 4);
    sc.drag_by(list, 0, -80);
    assert_eq!(sc.scroll_y(list), -20);
    let (_, ver) = sc.scrollbar_area(list);
    assert_eq!(ver, Area::new(94, 2, 4, 78));
}

#[test]
fn scrollbar_auto_hides_without_overflow_but_on_shows() {
    let (mut sc, list, _) = column(100, 200, 50, 2);
    let (hor, ver) = sc.scrollbar_area(list);
    assert!(hor.is_empty() && ver.is_empty());

    sc.set_scrollbar_mode(list, ScrollbarMode::On);
    let (hor, ver) = sc.scrollbar_area(list);
    assert!(!hor.is_empty() && !ver.is_empty());

    sc.set_scroll_dir(list, Dir::VER);
    let (hor, _) = sc.scrollbar_area(list);
    assert!(hor.is_empty());
}

#[test]
fn scrollbar_active_only_while_scrolling() {
    let (mut sc, list, _) = column(100, 200, 100, 4);
    sc.set_scrollbar_mode(list, ScrollbarMode::Active);
    assert!(sc.scrollbar_area(list).1.is_empty());
    sc.scroll_to_y(list, 100, true);
    assert!(!sc.scrollbar_area(list).1.is_empty());
    settle(&mut sc);
    assert!(sc.scrollbar_area(list).1.is_empty());
}

#[test]
fn scrollbar_invalidate_marks_visible_indicators() {
    let (mut sc, list, _) = column(100, 200, 100, 4);
    sc.scrollbar_invalidate(list);
    assert_eq!(sc.host_mut().take_dirty(), [Area::new(94, 2, 4, 98)]);

    sc.set_scrollbar_mode(list, ScrollbarMode::Off);
    sc.host_mut().take_dirty();
    sc.scrollbar_invalidate(list);
    assert!(sc.host().dirty().is_empty());
}

#[test]
fn screen_area_applies_ancestor_offsets() {
    let (mut sc, list, rows) = column(100, 200, 100, 6);
    sc.host_mut().set_pos(list, 10, 20);
    sc.scroll_to_y(list, 150, false);
    assert_eq!(sc.screen_area(rows[2]), Area::new(10, 20 + 200 - 150, 100, 100));
}

#[test]
fn events_bubble_when_the_host_allows_it() {
    let mut host = SimHost::new();
    let root = host.create_root(800, 800);
    let list = host.create(
        root,
        ObjectSpec::new(Length::Px(100), Length::Px(100)).with_flow(Flow::Column),
    );
    host.create(list, ObjectSpec::new(Length::Pct(100), Length::Px(300)));
    host.set_bubble(list, true);
    let mut sc = Scroller::new(host);
    sc.scroll_to_y(list, 10, false);
    let events = sc.host_mut().drain_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].target, list);
    assert_eq!(events[1].current, root);
}

#[test]
fn snapshot_restores_offset_and_settings() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.set_snap_y(list, ScrollSnap::Start);
    sc.set_scrollbar_mode(list, ScrollbarMode::On);
    sc.scroll_to_y(list, 250, false);
    let snap = sc.snapshot(list);

    sc.remove(list);
    assert_eq!(sc.scroll_y(list), 0);
    assert_eq!(sc.snap_y(list), ScrollSnap::None);

    sc.restore(list, snap);
    assert_eq!(sc.scroll_y(list), 250);
    assert_eq!(sc.snap_y(list), ScrollSnap::Start);
    assert_eq!(sc.scrollbar_mode(list), ScrollbarMode::On);
}

#[test]
fn options_control_animation_duration() {
    let (mut sc, list, _) = column(100, 200, 100, 6);
    sc.update_options(|o| {
        o.anim_duration_ms = 100;
        o.easing = Easing::Linear;
    });
    sc.scroll_to_y(list, 200, true);
    sc.tick(50);
    assert_eq!(sc.scroll_y(list), 100);
    sc.tick(100);
    assert_eq!(sc.scroll_y(list), 200);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOut,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    let t = Tween::new(100, -100, 10, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(0), 100);
    assert_eq!(t.sample(11), -100);
}

#[test]
fn tween_interpolates_large_offsets_exactly() {
    let t = Tween::new(100_000_007, 100_000_107, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 100_000_057);
    assert_eq!(t.sample(100), 100_000_107);
}

#[test]
fn randomized_scroll_to_matches_clamped_target() {
    let mut rng = Lcg::new(0x5c20_11);
    for _ in 0..200 {
        let height = rng.gen_range_i32(20, 400);
        let row = rng.gen_range_i32(1, 120);
        let count = rng.gen_range_i32(0, 12) as usize;
        let (mut sc, list, _) = column(100, height, row, count);
        let max = (row * count as i32 - height).max(0);
        for _ in 0..5 {
            let target = rng.gen_range_i32(-500, 2_000);
            sc.scroll_to_y(list, target, false);
            assert_eq!(sc.scroll_y(list), target.clamp(0, max));
            assert!(sc.scroll_bottom(list) >= 0 || max == 0);
        }
    }
}

#[test]
fn randomized_scroll_to_view_contains_target() {
    let mut rng = Lcg::new(42);
    for _ in 0..100 {
        let height = rng.gen_range_i32(100, 300);
        let row = rng.gen_range_i32(10, 100);
        let count = rng.gen_range_i32(1, 30) as usize;
        let (mut sc, list, rows) = column(100, height, row, count);
        for _ in 0..5 {
            let target = rows[rng.gen_range_i32(0, count as i32) as usize];
            sc.scroll_to_view(target, false);
            let view = sc.screen_area(list);
            assert!(view.contains(&sc.screen_area(target)));
            let before = sc.scroll_y(list);
            sc.scroll_to_view(target, false);
            assert_eq!(sc.scroll_y(list), before);
        }
    }
}
