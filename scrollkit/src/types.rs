/// Where snappable children are aligned when scrolling comes to rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollSnap {
    /// Leave the offset where it is.
    #[default]
    None,
    /// Align the child's left/top edge with the container's.
    Start,
    /// Align the child's right/bottom edge with the container's.
    End,
    /// Align the child's center with the container's.
    Center,
}

/// When the scrollbar indicators are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollbarMode {
    /// Never.
    Off,
    /// Always, on every axis that may be scrolled.
    On,
    /// While the object is being scrolled and its content overflows.
    Active,
    /// Whenever the content overflows.
    #[default]
    Auto,
}

/// Notifications delivered through [`crate::Host::emit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A drag started, or an animation started on an idle object.
    ScrollBegin,
    /// The offset changed.
    Scroll,
    /// A drag was released or an animation finished.
    ScrollEnd,
}
