//! Actions are the items of a floating action button menu.
//!
//! An action is a round button with an optional text label next to it. Its
//! [`Position`] decides on which side of the button the label goes and which
//! edge of the row is padded; its `active` flag drives a spring that grows
//! the bottom margin of the row from 5 to 10 units.
//!
//! # Example
//! ```
//! use fab_menu_widget::action;
//! use fab_menu_widget::action::{Phase, Position};
//! use fab_menu_widget::core::time::Duration;
//!
//! let mut state = action::<(), ()>("share").position(Position::Right).state();
//!
//! // The menu opens: the parent supplies the new properties.
//! let item = action::<(), ()>("share")
//!     .position(Position::Right)
//!     .active(true);
//!
//! assert!(item.diff(&mut state));
//!
//! while state.advance(Duration::from_millis(16)) {}
//!
//! assert_eq!(state.phase(), Phase::Expanded);
//! assert_eq!(item.view(&state).container.margin_bottom, 10.0);
//! ```
mod elevation;
mod layout;
mod state;
mod widget;

pub mod style;

#[cfg(test)]
mod tests;

pub use elevation::{DEFAULT_TEXT_ELEVATION, resolve_elevation};
pub use layout::{
    Arrangement, DEFAULT_MARGIN, LABEL_GAP, LABEL_MARGIN_TOP, Position, ROW_PADDING,
    ROW_PADDING_TOP_BOTTOM, Slot, arrange,
};
pub use state::{MARGIN_BOTTOM, Phase, State};
pub use widget::{Action, Child, Composition, Icon, action};
