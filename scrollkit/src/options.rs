use crate::{Coord, Easing};

/// Configuration for [`crate::Scroller`].
///
/// Shared by every object the scroller manages. Update it with `Scroller::set_options` or
/// `Scroller::update_options`; the new values apply to the next animation, drag or query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOptions {
    /// Duration of animated scrolls.
    pub anim_duration_ms: u64,
    pub easing: Easing,

    /// Drag movement past an edge is divided by this when elastic scrolling is on.
    pub elastic_divisor: Coord,

    /// A release projects the last drag step this many times further (momentum).
    pub momentum_gain: Coord,

    /// Thickness of the scrollbar indicators.
    pub scrollbar_width: Coord,
    /// Distance between an indicator and the object's side.
    pub scrollbar_side_pad: Coord,
    /// Space kept free at both ends of an indicator's track.
    pub scrollbar_end_pad: Coord,
    /// Indicators never get shorter than this.
    pub scrollbar_min_len: Coord,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollOptions {
    pub const fn new() -> Self {
        Self {
            anim_duration_ms: 300,
            easing: Easing::EaseOut,
            elastic_divisor: 4,
            momentum_gain: 10,
            scrollbar_width: 4,
            scrollbar_side_pad: 2,
            scrollbar_end_pad: 2,
            scrollbar_min_len: 10,
        }
    }

    pub fn with_anim_duration_ms(mut self, anim_duration_ms: u64) -> Self {
        self.anim_duration_ms = anim_duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_elastic_divisor(mut self, elastic_divisor: Coord) -> Self {
        self.elastic_divisor = elastic_divisor.max(1);
        self
    }

    pub fn with_momentum_gain(mut self, momentum_gain: Coord) -> Self {
        self.momentum_gain = momentum_gain.max(0);
        self
    }

    pub fn with_scrollbar(
        mut self,
        width: Coord,
        side_pad: Coord,
        end_pad: Coord,
        min_len: Coord,
    ) -> Self {
        self.scrollbar_width = width;
        self.scrollbar_side_pad = side_pad;
        self.scrollbar_end_pad = end_pad;
        self.scrollbar_min_len = min_len;
        self
    }
}
