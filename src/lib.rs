//! fab_menu composes the items of floating action button menus.
//!
//! An item, or [`Action`], is a round button with an optional label beside
//! it. The [`Position`] of the item decides the order of both and which edge
//! of the row is padded, while its `active` flag drives a critically damped
//! spring that eases the row's bottom margin between two values.
//!
//! The crate does not draw: hosts feed [`Event`]s to the items, render the
//! [`Composition`] they return and keep one [`State`] per mounted item.
//!
//! ```
//! use fab_menu::{Action, Position};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Pressed(String),
//! }
//!
//! let item: Action<'_, Message> = fab_menu::action("add")
//!     .text("Add")
//!     .position(Position::Left)
//!     .on_press(|name| Message::Pressed(name.to_owned()));
//!
//! let state = item.state();
//! let composition = item.view(&state);
//!
//! assert_eq!(composition.container.margin_bottom, 5.0);
//! ```
//!
//! [`Composition`]: widget::action::Composition
//! [`State`]: widget::action::State
pub use fab_menu_core as core;
pub use fab_menu_widget as widget;

pub use crate::core::animation;
pub use crate::core::event::{self, Event};
pub use crate::core::image;
pub use crate::core::mouse;
pub use crate::core::time;
pub use crate::core::touch;
pub use crate::core::window;
pub use crate::core::{Color, Padding, Point, Rectangle, Shadow, Shell, Vector, color};

pub use widget::action::{self, Action, Position, action};
pub use widget::touchable;

#[cfg(feature = "serde")]
pub use widget::config;
