//! The core library of [fab_menu].
//!
//! This library holds basic types that can be reused by hosts embedding
//! floating action button menus, as well as the animation primitives driving
//! their transitions.
//!
//! It does not render anything: layout engines, image decoding and hit
//! testing belong to the host. Widgets describe what to draw and react to the
//! [`Event`]s a host feeds them.
//!
//! [fab_menu]: https://github.com/mkrueger/fab_menu
pub mod animation;
pub mod event;
pub mod image;
pub mod mouse;
pub mod padding;
pub mod time;
pub mod touch;
pub mod window;

mod color;
mod point;
mod rectangle;
mod shadow;
mod shell;
mod vector;

pub use color::Color;
pub use event::Event;
pub use padding::Padding;
pub use point::Point;
pub use rectangle::Rectangle;
pub use shadow::Shadow;
pub use shell::Shell;
pub use vector::Vector;
