use crate::{Area, Axis, Coord, Host, ObjectKey, Padding, ScrollSnap};

/// The offset on `axis` that aligns `child` with its container per `align`.
///
/// `size` is the container's outer box (only its size is used), `child` is in the container's
/// unscrolled local space. Returns `None` for [`ScrollSnap::None`].
pub fn align_offset(
    align: ScrollSnap,
    axis: Axis,
    size: Area,
    padding: Padding,
    child: Area,
) -> Option<Coord> {
    let view_start = padding.start(axis);
    let view_end = size.size(axis) - padding.end(axis);
    let offset = match align {
        ScrollSnap::None => return None,
        ScrollSnap::Start => child.start(axis) - view_start,
        ScrollSnap::End => child.end(axis) - view_end,
        ScrollSnap::Center => {
            let child_center = child.start(axis) + child.size(axis) / 2;
            let view_center = view_start + (view_end - view_start) / 2;
            child_center - view_center
        }
    };
    Some(offset)
}

/// Picks the candidate nearest to `reference`. Ties go to the earliest candidate.
///
/// When `window` is set, candidates outside `[min, max]` are skipped.
pub fn nearest(
    candidates: impl IntoIterator<Item = Coord>,
    reference: Coord,
    window: Option<(Coord, Coord)>,
) -> Option<Coord> {
    let mut best: Option<Coord> = None;
    for candidate in candidates {
        if let Some((min, max)) = window {
            if candidate < min || candidate > max {
                continue;
            }
        }
        let closer = match best {
            Some(b) => candidate.abs_diff(reference) < b.abs_diff(reference),
            None => true,
        };
        if closer {
            best = Some(candidate);
        }
    }
    best
}

/// Finds the snap offset of `obj` on `axis` among its children accepted by `snappable`.
pub(crate) fn resolve<K: ObjectKey, H: Host<K> + ?Sized>(
    host: &H,
    obj: K,
    axis: Axis,
    align: ScrollSnap,
    reference: Coord,
    window: Option<(Coord, Coord)>,
    snappable: impl Fn(K) -> bool,
) -> Option<Coord> {
    if align == ScrollSnap::None {
        return None;
    }
    let size = host.area(obj);
    let padding = host.padding(obj);

    let mut best: Option<Coord> = None;
    host.for_each_child(obj, &mut |child| {
        if !snappable(child) {
            return;
        }
        let Some(candidate) = align_offset(align, axis, size, padding, host.area(child)) else {
            return;
        };
        best = nearest(best.into_iter().chain([candidate]), reference, window);
    });
    best
}
