use scrollkit::{Host, ObjectKey, ObjectSpec};

use crate::Selector;

/// A [`Host`] that can also build the objects a tab view is made of.
pub trait TabHost<K: ObjectKey>: Host<K> {
    type Selector: Selector<K>;

    /// Creates a plain container as the last child of `parent`.
    fn create_object(&mut self, parent: K, spec: ObjectSpec) -> K;

    /// Creates a button matrix as the last child of `parent`.
    fn create_selector(&mut self, parent: K, spec: ObjectSpec) -> Self::Selector;
}
