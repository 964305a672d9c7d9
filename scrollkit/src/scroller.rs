use alloc::vec::Vec;

use crate::key::StateMap;
use crate::limits::limits_of;
use crate::{
    Area, Axis, Coord, Dir, Event, Host, ObjectKey, Point, ScrollFlags, ScrollLimits,
    ScrollOptions, ScrollSnap, ScrollSnapshot, ScrollState, ScrollbarMode, Tween, snap,
};

/// A headless scroll engine.
///
/// The scroller owns the scroll state of every object it has touched and nothing else: the
/// object tree, layout, redraw and event delivery belong to the [`Host`]. Time only moves when
/// the caller invokes [`Scroller::tick`]; animated scrolls return immediately and advance on
/// each tick.
///
/// Every offset change invalidates the object's screen area and emits [`Event::Scroll`], in
/// that order. A drag release or a finished animation emits [`Event::ScrollEnd`].
#[derive(Clone, Debug)]
pub struct Scroller<K, H> {
    host: H,
    options: ScrollOptions,
    states: StateMap<K, ScrollState>,
    now_ms: u64,
}

impl<K: ObjectKey, H: Host<K>> Scroller<K, H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, ScrollOptions::default())
    }

    pub fn with_options(host: H, options: ScrollOptions) -> Self {
        sdebug!(?options, "Scroller::new");
        Self {
            host,
            options,
            states: StateMap::default(),
            now_ms: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
    }

    /// Copies the current options, applies `f`, then stores the result.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Timestamp of the last [`Scroller::tick`]. New animations start at this time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The stored state of `obj`, or the defaults if the scroller has never touched it.
    pub fn state(&self, obj: K) -> ScrollState {
        self.states.get(&obj).copied().unwrap_or_default()
    }

    fn state_mut(&mut self, obj: K) -> &mut ScrollState {
        self.states.entry(obj).or_default()
    }

    /// Forgets `obj`. Call this when the host deletes the object.
    pub fn remove(&mut self, obj: K) -> Option<ScrollState> {
        self.states.remove(&obj)
    }

    pub fn snapshot(&self, obj: K) -> ScrollSnapshot {
        self.state(obj).snapshot()
    }

    /// Restores settings and offset from a snapshot. Running animations and drags are dropped.
    pub fn restore(&mut self, obj: K, snapshot: ScrollSnapshot) {
        let st = self.state_mut(obj);
        st.dir = snapshot.dir;
        st.snap_x = snapshot.snap_x;
        st.snap_y = snapshot.snap_y;
        st.scrollbar_mode = snapshot.scrollbar_mode;
        st.flags = snapshot.flags;
        st.dragging = false;
        st.anim.cancel_all();
        self.write_offset(obj, snapshot.offset);
    }

    // Settings

    pub fn set_scrollbar_mode(&mut self, obj: K, mode: ScrollbarMode) {
        if self.state(obj).scrollbar_mode == mode {
            return;
        }
        self.scrollbar_invalidate(obj);
        self.state_mut(obj).scrollbar_mode = mode;
        self.scrollbar_invalidate(obj);
    }

    pub fn scrollbar_mode(&self, obj: K) -> ScrollbarMode {
        self.state(obj).scrollbar_mode
    }

    pub fn set_scroll_dir(&mut self, obj: K, dir: Dir) {
        self.state_mut(obj).dir = dir;
    }

    pub fn scroll_dir(&self, obj: K) -> Dir {
        self.state(obj).dir
    }

    pub fn set_snap_x(&mut self, obj: K, align: ScrollSnap) {
        self.state_mut(obj).snap_x = align;
    }

    pub fn set_snap_y(&mut self, obj: K, align: ScrollSnap) {
        self.state_mut(obj).snap_y = align;
    }

    pub fn snap_x(&self, obj: K) -> ScrollSnap {
        self.state(obj).snap_x
    }

    pub fn snap_y(&self, obj: K) -> ScrollSnap {
        self.state(obj).snap_y
    }

    fn snap_align(&self, obj: K, axis: Axis) -> ScrollSnap {
        match axis {
            Axis::X => self.snap_x(obj),
            Axis::Y => self.snap_y(obj),
        }
    }

    pub fn add_flags(&mut self, obj: K, flags: ScrollFlags) {
        self.state_mut(obj).flags.insert(flags);
    }

    pub fn clear_flags(&mut self, obj: K, flags: ScrollFlags) {
        self.state_mut(obj).flags.remove(flags);
    }

    pub fn flags(&self, obj: K) -> ScrollFlags {
        self.state(obj).flags
    }

    // Geometry

    pub fn scroll_offset(&self, obj: K) -> Point {
        self.states.get(&obj).map(|st| st.offset).unwrap_or_default()
    }

    pub fn scroll_x(&self, obj: K) -> Coord {
        self.scroll_offset(obj).x
    }

    pub fn scroll_y(&self, obj: K) -> Coord {
        self.scroll_offset(obj).y
    }

    pub fn limits(&self, obj: K) -> ScrollLimits {
        limits_of(&self.host, obj, self.scroll_offset(obj))
    }

    pub fn scroll_top(&self, obj: K) -> Coord {
        self.limits(obj).top
    }

    pub fn scroll_bottom(&self, obj: K) -> Coord {
        self.limits(obj).bottom
    }

    pub fn scroll_left(&self, obj: K) -> Coord {
        self.limits(obj).left
    }

    pub fn scroll_right(&self, obj: K) -> Coord {
        self.limits(obj).right
    }

    /// Where scrolling will settle: animation targets where animations run, else the offset.
    pub fn scroll_end(&self, obj: K) -> Point {
        let st = self.state(obj);
        let mut end = st.offset;
        for axis in Axis::BOTH {
            if let Some(target) = st.anim.target(axis) {
                end.set(axis, target);
            }
        }
        end
    }

    /// The object's outer box on screen, with every ancestor's scroll offset applied.
    pub fn screen_area(&self, obj: K) -> Area {
        let mut area = self.host.area(obj);
        let mut cur = obj;
        while let Some(parent) = self.host.parent(cur) {
            let p = self.host.area(parent);
            let off = self.scroll_offset(parent);
            area = area.translate(p.x.saturating_sub(off.x), p.y.saturating_sub(off.y));
            cur = parent;
        }
        area
    }

    pub fn is_scrolling(&self, obj: K) -> bool {
        self.state(obj).is_scrolling()
    }

    // Programmatic scrolling

    /// Scrolls by `(dx, dy)` relative to the current offset. See [`Scroller::scroll_to`].
    pub fn scroll_by(&mut self, obj: K, dx: Coord, dy: Coord, anim: bool) {
        let cur = self.scroll_offset(obj);
        self.scroll_to(obj, cur.x.saturating_add(dx), cur.y.saturating_add(dy), anim);
    }

    /// Scrolls to `(x, y)`.
    ///
    /// Axes not allowed by the scroll direction keep their offset. Targets are clamped into
    /// the scrollable range, except during an elastic drag where the release settles them.
    /// With `anim`, any animation on a targeted axis is replaced by a new one.
    pub fn scroll_to(&mut self, obj: K, x: Coord, y: Coord, anim: bool) {
        let x = self.clamped_target(obj, Axis::X, x);
        let y = self.clamped_target(obj, Axis::Y, y);
        self.move_to(obj, x, y, anim);
    }

    pub fn scroll_to_x(&mut self, obj: K, x: Coord, anim: bool) {
        let y = self.scroll_y(obj);
        self.scroll_to(obj, x, y, anim);
    }

    pub fn scroll_to_y(&mut self, obj: K, y: Coord, anim: bool) {
        let x = self.scroll_x(obj);
        self.scroll_to(obj, x, y, anim);
    }

    /// Scrolls the nearest scrollable ancestor of `obj` just enough to show `obj` entirely.
    ///
    /// Objects larger than the viewport are aligned by their start edge. On axes where the
    /// ancestor snaps, `obj` is aligned the way snapping would align it.
    pub fn scroll_to_view(&mut self, obj: K, anim: bool) {
        let Some(parent) = self.scrollable_parent(obj) else {
            return;
        };
        let target = self.screen_area(obj);
        let view = self.screen_area(parent).inset(self.host.padding(parent));
        let st = self.state(parent);
        let dx = view_delta(target, view, Axis::X, st.snap_x);
        let dy = view_delta(target, view, Axis::Y, st.snap_y);
        if dx == 0 && dy == 0 {
            return;
        }
        sdebug!(?obj, ?parent, dx, dy, "scroll_to_view");
        self.scroll_by(parent, dx, dy, anim);
    }

    /// Repeats [`Scroller::scroll_to_view`] up the ancestor chain.
    pub fn scroll_to_view_recursive(&mut self, obj: K, anim: bool) {
        let mut child = obj;
        while let Some(parent) = self.scrollable_parent(child) {
            self.scroll_to_view(child, anim);
            child = parent;
        }
    }

    /// Focus hook: objects with [`ScrollFlags::ON_FOCUS`] are scrolled into view.
    pub fn focus(&mut self, obj: K, anim: bool) {
        if self.flags(obj).contains(ScrollFlags::ON_FOCUS) {
            self.scroll_to_view_recursive(obj, anim);
        }
    }

    /// Aligns `obj` to its nearest snap point on every axis that has a snap alignment.
    ///
    /// The reference is where scrolling will settle ([`Scroller::scroll_end`]). Snap targets
    /// are not clamped: undersized content may center at a negative offset.
    pub fn update_snap(&mut self, obj: K, anim: bool) {
        let st = self.state(obj);
        let end = self.scroll_end(obj);
        let mut targets = [None, None];
        for (slot, axis) in targets.iter_mut().zip(Axis::BOTH) {
            if st.dir.allows_axis(axis) {
                *slot = self.snap_target(obj, axis, end.get(axis), None);
            }
        }
        let [x, y] = targets;
        sdebug!(?obj, ?x, ?y, "update_snap");
        self.move_to(obj, x, y, anim);
    }

    /// The snap offset nearest to the current settle point, or that point if nothing snaps.
    pub fn snap_offset(&self, obj: K, axis: Axis) -> Coord {
        let reference = self.scroll_end(obj).get(axis);
        self.snap_target(obj, axis, reference, None).unwrap_or(reference)
    }

    // Input

    /// Starts a drag gesture. Running animations on `obj` stop where they are.
    pub fn drag_begin(&mut self, obj: K) {
        let st = self.state_mut(obj);
        if st.dragging || !st.flags.contains(ScrollFlags::SCROLLABLE) {
            return;
        }
        let was_scrolling = st.is_scrolling();
        st.anim.cancel_all();
        st.dragging = true;
        st.drag_origin = st.offset;
        sdebug!(?obj, "drag begin");
        if !was_scrolling {
            self.host.emit(obj, Event::ScrollBegin);
        }
    }

    /// Moves the content by a drag step. Starts a drag if none is active.
    ///
    /// Locked directions do not move. Past an edge, elastic objects move with damping and
    /// the others stop at the edge. Returns the part of the step that was not consumed when
    /// the object chains scrolling to its ancestors (zero otherwise).
    pub fn drag_by(&mut self, obj: K, dx: Coord, dy: Coord) -> Point {
        let st = self.state(obj);
        let delta = Point::new(dx, dy);
        if !st.flags.contains(ScrollFlags::SCROLLABLE) {
            return delta;
        }
        if !st.dragging {
            self.drag_begin(obj);
        }

        let limits = self.limits(obj);
        let elastic = st.flags.contains(ScrollFlags::ELASTIC);
        let divisor = if self.options.elastic_divisor > 0 {
            self.options.elastic_divisor
        } else {
            swarn!(divisor = self.options.elastic_divisor, "elastic divisor below 1, using 1");
            1
        };
        let mut next = st.offset;
        let mut leftover = Point::ZERO;
        for axis in Axis::BOTH {
            let d = delta.get(axis);
            if d == 0 {
                continue;
            }
            if !st.dir.allows_delta(axis, d) {
                leftover.set(axis, d);
                continue;
            }
            let current = st.offset.get(axis);
            let max = limits.max(axis);
            let moved = if elastic {
                elastic_step(current, d, max, divisor)
            } else {
                current.saturating_add(d).clamp(0, max)
            };
            if !elastic {
                leftover.set(axis, d.saturating_sub(moved.saturating_sub(current)));
            }
            next.set(axis, moved);
        }
        self.write_offset(obj, next);

        if st.flags.contains(ScrollFlags::CHAIN) {
            leftover
        } else {
            Point::ZERO
        }
    }

    /// Ends a drag gesture and settles the object.
    ///
    /// `throw` is the last drag step; with [`ScrollFlags::MOMENTUM`] it is projected forward.
    /// The settle target is the nearest snap point when the axis snaps, else the projection
    /// clamped into range. [`ScrollFlags::SCROLL_ONE`] keeps it within one viewport of where
    /// the drag began. Emits [`Event::ScrollEnd`] immediately; the settle animation emits
    /// another when it finishes.
    pub fn drag_release(&mut self, obj: K, throw: Point) {
        let st = self.state(obj);
        if !st.dragging {
            return;
        }
        let limits = self.limits(obj);
        let view = self.host.area(obj).inset(self.host.padding(obj));
        let gain = self.options.momentum_gain;

        for axis in Axis::BOTH {
            if !st.dir.allows_axis(axis) {
                continue;
            }
            let mut target = st.offset.get(axis);
            if st.flags.contains(ScrollFlags::MOMENTUM) {
                target = target.saturating_add(throw.get(axis).saturating_mul(gain));
            }
            let mut window = None;
            if st.flags.contains(ScrollFlags::SCROLL_ONE) {
                let origin = st.drag_origin.get(axis);
                let reach = view.size(axis);
                let (lo, hi) = (origin.saturating_sub(reach), origin.saturating_add(reach));
                target = target.clamp(lo, hi);
                window = Some((lo, hi));
            }
            let settle = self
                .snap_target(obj, axis, target, window)
                .unwrap_or_else(|| limits.clamp(axis, target));
            self.animate_axis(obj, axis, settle);
        }

        self.state_mut(obj).dragging = false;
        sdebug!(?obj, end = ?self.scroll_end(obj), "drag release");
        self.host.emit(obj, Event::ScrollEnd);
    }

    // Time

    /// Advances every running animation to `now_ms`.
    ///
    /// For each animated object: the offset is written, its area invalidated and
    /// [`Event::Scroll`] emitted; once its last animation completes [`Event::ScrollEnd`]
    /// follows.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let animated: Vec<K> = self
            .states
            .iter()
            .filter(|(_, st)| st.anim.is_running())
            .map(|(obj, _)| *obj)
            .collect();

        for obj in animated {
            let Some(st) = self.states.get_mut(&obj) else {
                continue;
            };
            let (x, y) = st.anim.advance(now_ms);
            let mut next = st.offset;
            if let Some(x) = x {
                next.x = x;
            }
            if let Some(y) = y {
                next.y = y;
            }
            let settled = !st.anim.is_running() && !st.dragging;
            self.write_offset(obj, next);
            if settled {
                sdebug!(?obj, x = next.x, y = next.y, "scroll settled");
                self.host.emit(obj, Event::ScrollEnd);
            }
        }
    }

    // Scrollbars

    /// Screen-space (horizontal, vertical) scrollbar indicator areas of `obj`.
    pub fn scrollbar_area(&self, obj: K) -> (Area, Area) {
        let st = self.state(obj);
        crate::scrollbar::scrollbar_area(
            self.screen_area(obj),
            &self.limits(obj),
            st.scrollbar_mode,
            st.dir,
            st.is_scrolling(),
            &self.options,
        )
    }

    /// Marks the scrollbar indicators of `obj` dirty.
    pub fn scrollbar_invalidate(&mut self, obj: K) {
        let (hor, ver) = self.scrollbar_area(obj);
        for area in [hor, ver] {
            if !area.is_empty() {
                self.host.invalidate(area);
            }
        }
    }

    // Internals

    fn scrollable_parent(&self, obj: K) -> Option<K> {
        let mut cur = self.host.parent(obj)?;
        loop {
            if self.flags(cur).contains(ScrollFlags::SCROLLABLE) {
                return Some(cur);
            }
            cur = self.host.parent(cur)?;
        }
    }

    fn snap_target(
        &self,
        obj: K,
        axis: Axis,
        reference: Coord,
        window: Option<(Coord, Coord)>,
    ) -> Option<Coord> {
        snap::resolve(
            &self.host,
            obj,
            axis,
            self.snap_align(obj, axis),
            reference,
            window,
            |child| self.flags(child).contains(ScrollFlags::SNAPPABLE),
        )
    }

    fn clamped_target(&self, obj: K, axis: Axis, value: Coord) -> Option<Coord> {
        let st = self.state(obj);
        if !st.dir.allows_axis(axis) {
            strace!(?obj, ?axis, "scroll on locked axis ignored");
            return None;
        }
        if st.defers_clamp() {
            return Some(value);
        }
        Some(self.limits(obj).clamp(axis, value))
    }

    fn move_to(&mut self, obj: K, x: Option<Coord>, y: Option<Coord>, anim: bool) {
        if anim {
            if let Some(x) = x {
                self.animate_axis(obj, Axis::X, x);
            }
            if let Some(y) = y {
                self.animate_axis(obj, Axis::Y, y);
            }
            return;
        }

        let st = self.state_mut(obj);
        let mut next = st.offset;
        if let Some(x) = x {
            st.anim.cancel(Axis::X);
            next.x = x;
        }
        if let Some(y) = y {
            st.anim.cancel(Axis::Y);
            next.y = y;
        }
        self.write_offset(obj, next);
    }

    fn animate_axis(&mut self, obj: K, axis: Axis, target: Coord) {
        let now_ms = self.now_ms;
        let duration_ms = self.options.anim_duration_ms;
        let easing = self.options.easing;

        let st = self.state_mut(obj);
        let current = st.offset.get(axis);
        if current == target {
            st.anim.cancel(axis);
            return;
        }
        if st.anim.target(axis) == Some(target) {
            return;
        }
        let was_scrolling = st.is_scrolling();
        st.anim
            .start(axis, Tween::new(current, target, now_ms, duration_ms, easing));
        strace!(?obj, ?axis, from = current, to = target, "animate");
        if !was_scrolling {
            self.host.emit(obj, Event::ScrollBegin);
        }
    }

    fn write_offset(&mut self, obj: K, next: Point) {
        let st = self.state_mut(obj);
        if st.offset == next {
            return;
        }
        st.offset = next;
        strace!(?obj, x = next.x, y = next.y, "scroll");
        let area = self.screen_area(obj);
        self.host.invalidate(area);
        self.host.emit(obj, Event::Scroll);
    }
}

/// One drag step with damping past the `[0, max]` range.
fn elastic_step(current: Coord, delta: Coord, max: Coord, divisor: Coord) -> Coord {
    let next = current.saturating_add(delta);
    if delta > 0 && next > max {
        let inside = max.saturating_sub(current).max(0);
        current
            .saturating_add(inside)
            .saturating_add(delta.saturating_sub(inside) / divisor)
    } else if delta < 0 && next < 0 {
        let inside = current.saturating_neg().min(0);
        current
            .saturating_add(inside)
            .saturating_add(delta.saturating_sub(inside) / divisor)
    } else {
        next
    }
}

/// Scroll needed along `axis` to bring `target` into `view`.
fn view_delta(target: Area, view: Area, axis: Axis, snap: ScrollSnap) -> Coord {
    let (t0, t1) = (target.start(axis), target.end(axis));
    let (v0, v1) = (view.start(axis), view.end(axis));
    match snap {
        ScrollSnap::Start => t0.saturating_sub(v0),
        ScrollSnap::End => t1.saturating_sub(v1),
        ScrollSnap::Center => t0
            .saturating_add(target.size(axis) / 2)
            .saturating_sub(v0.saturating_add(view.size(axis) / 2)),
        ScrollSnap::None => {
            if t0 < v0 || target.size(axis) > view.size(axis) {
                t0.saturating_sub(v0)
            } else if t1 > v1 {
                t1.saturating_sub(v1)
            } else {
                0
            }
        }
    }
}
