//! A headless scroll engine for embedded GUI toolkits.
//!
//! For a tabbed container built on top of it, see the `scrollkit-tabview` crate.
//!
//! This crate owns the scroll state of container objects: offsets, allowed directions, snap
//! alignment, scrollbar visibility and in-flight animations. It computes scroll limits from
//! layout, clamps and animates offset changes, resolves snap points among children, handles
//! single-axis drag/release (elastic overscroll, momentum) and reports scrollbar geometry.
//!
//! It is UI-agnostic. A host toolkit is expected to provide, through [`Host`]:
//! - the object tree and each object's unscrolled layout box and padding
//! - a redraw hook for invalidated screen areas
//! - an event queue for [`Event`]s
//!
//! and to call [`Scroller::tick`] from its timer loop.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anim;
mod flags;
mod geometry;
mod host;
mod key;
mod limits;
mod options;
mod scrollbar;
mod scroller;
mod snap;
mod state;
mod types;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(test)]
mod tests;

pub use anim::{AxisAnim, Easing, Tween};
pub use flags::{Dir, ScrollFlags};
pub use geometry::{Area, Axis, Coord, Padding, Point};
pub use host::{Flow, Host, Length, ObjectSpec};
pub use key::ObjectKey;
pub use limits::ScrollLimits;
pub use options::ScrollOptions;
pub use scrollbar::{scrollbar_area, scrollbar_visible};
pub use scroller::Scroller;
pub use snap::{align_offset, nearest as nearest_snap};
pub use state::{ScrollSnapshot, ScrollState};
pub use types::{Event, ScrollSnap, ScrollbarMode};
