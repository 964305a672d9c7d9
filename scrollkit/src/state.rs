use crate::{AxisAnim, Dir, Point, ScrollFlags, ScrollSnap, ScrollbarMode};

/// Scroll state attached to one object.
///
/// Objects the scroller has never written to read as `ScrollState::default()`: zero offset,
/// every direction allowed, no snapping, `ScrollbarMode::Auto`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub(crate) offset: Point,
    pub(crate) dir: Dir,
    pub(crate) snap_x: ScrollSnap,
    pub(crate) snap_y: ScrollSnap,
    pub(crate) scrollbar_mode: ScrollbarMode,
    pub(crate) flags: ScrollFlags,
    pub(crate) dragging: bool,
    pub(crate) drag_origin: Point,
    pub(crate) anim: AxisAnim,
}

impl ScrollState {
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn anim(&self) -> &AxisAnim {
        &self.anim
    }

    pub fn is_scrolling(&self) -> bool {
        self.dragging || self.anim.is_running()
    }

    /// Offsets are left unclamped while an elastic drag is in progress.
    pub(crate) fn defers_clamp(&self) -> bool {
        self.dragging && self.flags.contains(ScrollFlags::ELASTIC)
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.offset,
            dir: self.dir,
            snap_x: self.snap_x,
            snap_y: self.snap_y,
            scrollbar_mode: self.scrollbar_mode,
            flags: self.flags,
        }
    }
}

/// A lightweight, serializable snapshot of an object's scroll position and settings.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is useful for
/// restoring a screen's scroll positions across sessions without touching the host tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub offset: Point,
    pub dir: Dir,
    pub snap_x: ScrollSnap,
    pub snap_y: ScrollSnap,
    pub scrollbar_mode: ScrollbarMode,
    pub flags: ScrollFlags,
}
