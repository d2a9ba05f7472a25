//! Pressable surfaces.
//!
//! A [`Surface`] turns raw pointer and touch input into logical taps: a press
//! that starts and ends over the same bounds. The kind of visual feedback is
//! picked per platform by [`surface`].
use crate::core::mouse;
use crate::core::touch;
use crate::core::{Color, Event, Rectangle};

/// The opacity of an [`Feedback::Opacity`] surface while it is pressed.
pub const DEFAULT_ACTIVE_OPACITY: f32 = 0.4;

/// The visual feedback of a pressed [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    /// The content fades to the given opacity while pressed.
    Opacity {
        /// The opacity of the content while pressed.
        active_opacity: f32,
    },

    /// A ripple of the given color spreads from the press location.
    Ripple {
        /// The color of the ripple.
        color: Color,
    },
}

/// The press tracking of a [`Surface`].
///
/// Hosts keep it alongside the rest of the widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Press {
    is_pressed: bool,
}

impl Press {
    /// Returns true while a press is in progress.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }
}

/// What a [`Surface`] made of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The event was not for this surface.
    Ignored,

    /// A press started, or an ongoing press was canceled.
    Tracked,

    /// A press was released over the surface.
    Tapped,
}

/// A pressable container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    feedback: Feedback,
    disabled: bool,
}

/// Returns the [`Surface`] matching the current platform.
///
/// Android gets ripples, every other platform fades the content.
pub fn surface(disabled: bool) -> Surface {
    let feedback = if cfg!(target_os = "android") {
        Feedback::Ripple {
            color: Color::WHITE.scale_alpha(0.3),
        }
    } else {
        Feedback::Opacity {
            active_opacity: DEFAULT_ACTIVE_OPACITY,
        }
    };

    Surface { feedback, disabled }
}

impl Surface {
    /// Creates a [`Surface`] with the given [`Feedback`].
    pub fn new(feedback: Feedback) -> Self {
        Self {
            feedback,
            disabled: false,
        }
    }

    /// Sets whether the [`Surface`] ignores input.
    #[must_use]
    pub fn disabled(self, disabled: bool) -> Self {
        Self { disabled, ..self }
    }

    /// Returns the [`Feedback`] of the [`Surface`].
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Returns true if the [`Surface`] ignores input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the opacity of the content for the given [`Press`].
    pub fn opacity(&self, press: &Press) -> f32 {
        match self.feedback {
            Feedback::Opacity { active_opacity } if press.is_pressed => active_opacity,
            Feedback::Opacity { .. } | Feedback::Ripple { .. } => 1.0,
        }
    }

    /// Processes an [`Event`] targeting the given bounds.
    pub fn update(
        &self,
        press: &mut Press,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Interaction {
        if self.disabled {
            press.is_pressed = false;
            return Interaction::Ignored;
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
            }) => {
                if cursor.is_over(bounds) {
                    press.is_pressed = true;
                    return Interaction::Tracked;
                }
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    press.is_pressed = true;
                    return Interaction::Tracked;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased {
                button: mouse::Button::Left,
            }) => {
                if press.is_pressed {
                    press.is_pressed = false;

                    return if cursor.is_over(bounds) {
                        Interaction::Tapped
                    } else {
                        Interaction::Tracked
                    };
                }
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                if press.is_pressed {
                    press.is_pressed = false;

                    return if bounds.contains(*position) {
                        Interaction::Tapped
                    } else {
                        Interaction::Tracked
                    };
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) | Event::Mouse(mouse::Event::CursorLeft) => {
                if press.is_pressed {
                    press.is_pressed = false;
                    return Interaction::Tracked;
                }
            }
            _ => {}
        }

        Interaction::Ignored
    }
}
