//! Build window-based GUI applications.
use crate::time::Instant;

/// A window-related event.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Event {
    /// A window redraw was requested.
    ///
    /// The [`Instant`] contains the current time.
    RedrawRequested(Instant),

    /// A window was focused.
    Focused,

    /// A window was unfocused.
    Unfocused,
}

/// A request to redraw a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RedrawRequest {
    /// Redraw the next frame.
    NextFrame,

    /// Redraw at the given time.
    At(Instant),

    /// No redraw is needed.
    Wait,
}

impl From<Instant> for RedrawRequest {
    fn from(time: Instant) -> Self {
        Self::At(time)
    }
}
