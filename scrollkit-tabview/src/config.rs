use scrollkit::Coord;

/// Which edge of the tab view the tab bar sits on.
///
/// `Left` and `Right` are accepted but currently lay out like `Top` and `Bottom`: the bar
/// stays horizontal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TabPosition {
    /// Whether the tab bar comes after the content.
    pub fn is_trailing(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }
}

/// Construction parameters of a [`crate::TabView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabViewConfig {
    pub position: TabPosition,
    /// Thickness of the tab bar in pixels.
    pub size: Coord,
}

impl TabViewConfig {
    pub const fn new(position: TabPosition, size: Coord) -> Self {
        Self { position, size }
    }
}

impl Default for TabViewConfig {
    fn default() -> Self {
        Self::new(TabPosition::Top, 40)
    }
}
