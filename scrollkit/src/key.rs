#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type StateMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type StateMap<K, V> = BTreeMap<K, V>;

/// Identity of an object in the host's tree.
///
/// Hosts usually use a small `Copy` handle (an index, a slotmap key, ...).
#[cfg(feature = "std")]
pub trait ObjectKey: Copy + core::hash::Hash + Eq + core::fmt::Debug {}
#[cfg(feature = "std")]
impl<K: Copy + core::hash::Hash + Eq + core::fmt::Debug> ObjectKey for K {}

#[cfg(not(feature = "std"))]
pub trait ObjectKey: Copy + Ord + core::fmt::Debug {}
#[cfg(not(feature = "std"))]
impl<K: Copy + Ord + core::fmt::Debug> ObjectKey for K {}
