//! Use the floating action button widgets of [fab_menu].
//!
//! The widgets in this crate do not draw anything themselves. An
//! [`Action`] composes the records a host renders (see
//! [`action::Composition`]), reacts to the events the host feeds it, and
//! publishes messages through a [`Shell`](core::Shell).
//!
//! [fab_menu]: https://github.com/mkrueger/fab_menu
pub use fab_menu_core as core;

pub mod action;
pub mod touchable;

#[cfg(feature = "serde")]
pub mod config;

pub use action::{Action, action};
