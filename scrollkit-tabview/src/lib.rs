//! A tabbed container built on the `scrollkit` scroll engine.
//!
//! The tab view combines a tab bar (a button matrix provided by the host toolkit through
//! [`Selector`]) with a content container holding one full-size page per tab. Pages sit in a
//! single row and snap to the center, so a drag settles on a whole page; the tab bar and the
//! scroll position are kept in sync in both directions.
//!
//! Like `scrollkit`, this crate is UI-agnostic: hosts implement [`TabHost`] to create the
//! objects and feed events back through [`TabView::on_event`] and
//! [`TabView::on_selector_changed`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod host;
mod selector;
mod tabview;

#[cfg(any(test, feature = "sim"))]
pub mod sim;


pub use config::{TabPosition, TabViewConfig};
pub use host::TabHost;
pub use selector::{ButtonCtrl, Selector};
pub use tabview::TabView;
