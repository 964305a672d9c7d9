use bitflags::bitflags;

use crate::{Axis, Coord};

bitflags! {
    /// Directions in which an object may be dragged.
    ///
    /// `RIGHT`/`BOTTOM` allow the offset to grow (revealing content on that side),
    /// `LEFT`/`TOP` allow it to shrink.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Dir: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
        const HOR = Self::LEFT.bits() | Self::RIGHT.bits();
        const VER = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::HOR.bits() | Self::VER.bits();
    }
}

impl Default for Dir {
    fn default() -> Self {
        Self::ALL
    }
}

impl Dir {
    /// Whether programmatic scrolling may touch `axis` at all.
    pub fn allows_axis(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.intersects(Self::HOR),
            Axis::Y => self.intersects(Self::VER),
        }
    }

    /// Whether a drag moving the offset by `delta` along `axis` is permitted.
    pub fn allows_delta(self, axis: Axis, delta: Coord) -> bool {
        if delta == 0 {
            return true;
        }
        let needed = match (axis, delta > 0) {
            (Axis::X, true) => Self::RIGHT,
            (Axis::X, false) => Self::LEFT,
            (Axis::Y, true) => Self::BOTTOM,
            (Axis::Y, false) => Self::TOP,
        };
        self.contains(needed)
    }
}

bitflags! {
    /// Per-object scroll behavior switches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ScrollFlags: u16 {
        /// The object scrolls its content; only scrollable ancestors take `scroll_to_view`.
        const SCROLLABLE = 1 << 0;
        /// Dragging past an edge is allowed, with damping.
        const ELASTIC = 1 << 1;
        /// A release keeps moving in the throw direction.
        const MOMENTUM = 1 << 2;
        /// A single release may travel at most one viewport from where the drag began.
        const SCROLL_ONE = 1 << 3;
        /// Unconsumed drag delta is handed back so it can be chained to an ancestor.
        const CHAIN = 1 << 4;
        /// Focusing the object scrolls it into view.
        const ON_FOCUS = 1 << 5;
        /// The object is a snap candidate inside its parent.
        const SNAPPABLE = 1 << 6;
    }
}

impl Default for ScrollFlags {
    fn default() -> Self {
        Self::SCROLLABLE
            | Self::ELASTIC
            | Self::MOMENTUM
            | Self::CHAIN
            | Self::ON_FOCUS
            | Self::SNAPPABLE
    }
}
