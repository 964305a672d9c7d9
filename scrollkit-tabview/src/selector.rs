use alloc::string::String;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// Per-button control bits of a button matrix.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ButtonCtrl: u8 {
        /// The button toggles between checked and unchecked.
        const CHECKABLE = 1 << 0;
        /// Value changes fire on click instead of press.
        const CLICK_TRIG = 1 << 1;
        /// Holding the button does not repeat.
        const NO_REPEAT = 1 << 2;
        const CHECKED = 1 << 3;
    }
}

/// The tab bar: a button matrix owned by the host toolkit.
///
/// The map lists one label per button followed by an empty-string terminator. It is always
/// replaced whole.
pub trait Selector<K> {
    /// The selector's own object in the host tree.
    fn object(&self) -> K;

    fn set_map(&mut self, map: Vec<String>);

    fn map(&self) -> &[String];

    /// With `one` set, checking a button unchecks every other one.
    fn set_one_checked(&mut self, one: bool);

    /// Adds `ctrl` to every button.
    fn set_all_controls(&mut self, ctrl: ButtonCtrl);

    /// Adds [`ButtonCtrl::CHECKED`] to button `index`.
    fn set_checked(&mut self, index: usize);

    /// The button the user last activated, if any.
    fn active_index(&self) -> Option<usize>;
}
