use crate::{Area, Axis, Coord, Dir, ScrollLimits, ScrollOptions, ScrollbarMode};

/// Whether the indicator for `axis` should be drawn.
pub fn scrollbar_visible(
    axis: Axis,
    mode: ScrollbarMode,
    dir: Dir,
    limits: &ScrollLimits,
    scrolling: bool,
) -> bool {
    if !dir.allows_axis(axis) {
        return false;
    }
    match mode {
        ScrollbarMode::Off => false,
        ScrollbarMode::On => true,
        ScrollbarMode::Auto => limits.overflows(axis),
        ScrollbarMode::Active => scrolling && limits.overflows(axis),
    }
}

/// Computes the screen-space (horizontal, vertical) indicator rectangles of an object.
///
/// `screen` is the object's outer box on screen. Hidden indicators are [`Area::ZERO`].
pub fn scrollbar_area(
    screen: Area,
    limits: &ScrollLimits,
    mode: ScrollbarMode,
    dir: Dir,
    scrolling: bool,
    options: &ScrollOptions,
) -> (Area, Area) {
    let hor_on = scrollbar_visible(Axis::X, mode, dir, limits, scrolling);
    let ver_on = scrollbar_visible(Axis::Y, mode, dir, limits, scrolling);
    let width = options.scrollbar_width;
    let side = options.scrollbar_side_pad;
    let end = options.scrollbar_end_pad;
    // Leave the corner to the other indicator when both are drawn.
    let corner = width + side;

    let hor = if hor_on {
        let track = screen.width - 2 * end - if ver_on { corner } else { 0 };
        let (pos, len) = thumb(track, screen.width, limits, Axis::X, options.scrollbar_min_len);
        Area::new(
            screen.x.saturating_add(end + pos),
            screen.y2().saturating_sub(side + width),
            len,
            width,
        )
    } else {
        Area::ZERO
    };

    let ver = if ver_on {
        let track = screen.height - 2 * end - if hor_on { corner } else { 0 };
        let (pos, len) = thumb(track, screen.height, limits, Axis::Y, options.scrollbar_min_len);
        Area::new(
            screen.x2().saturating_sub(side + width),
            screen.y.saturating_add(end + pos),
            width,
            len,
        )
    } else {
        Area::ZERO
    };

    (hor, ver)
}

/// Position and length of a thumb inside a track of `track` pixels.
fn thumb(
    track: Coord,
    viewport: Coord,
    limits: &ScrollLimits,
    axis: Axis,
    min_len: Coord,
) -> (Coord, Coord) {
    if track <= 0 || viewport <= 0 {
        return (0, 0);
    }
    let offset = limits.start(axis);
    let max = limits.max(axis);
    let over_start = offset.saturating_neg().max(0);
    let over_end = offset.saturating_sub(max).max(0);

    let track64 = track as i64;
    let content = viewport as i64 + max as i64;
    let min_len = min_len.min(track);
    let len = (track64 * viewport as i64 / content) as Coord;
    // Overscroll squeezes the thumb against the edge it was pulled past.
    let len = len
        .saturating_sub(over_start)
        .saturating_sub(over_end)
        .clamp(min_len, track);

    let pos = if max == 0 {
        if over_end > 0 { track - len } else { 0 }
    } else {
        let travel = (track - len) as i64;
        (travel * offset.clamp(0, max) as i64 / max as i64) as Coord
    };
    (pos, len)
}
