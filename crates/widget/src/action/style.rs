//! The visual records of an action.
use crate::core::image;
use crate::core::{Color, Padding, Shadow, color};

/// The background of the button when no color is given.
pub const DEFAULT_COLOR: Color = color!(0x1253bc);

/// The color of the label text when none is given.
pub const DEFAULT_TEXT_COLOR: Color = color!(0xffffff);

/// The distance between an action and the edge of the menu.
pub const DEFAULT_DISTANCE_TO_EDGE: f32 = 30.0;

/// The side of the square button box.
pub const BUTTON_SIZE: f32 = 55.0;

/// The corner radius of the button.
pub const BUTTON_RADIUS: f32 = 30.0;

/// The elevation of the round button.
pub const BUTTON_ELEVATION: f32 = 5.0;

/// The right margin of the row; negative so the button sits on the edge.
pub const ROW_MARGIN_RIGHT: f32 = -8.0;

/// The font size of the label.
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// The line height of the label.
pub const LABEL_LINE_HEIGHT: f32 = 20.0;

/// The height of the label box.
pub const LABEL_HEIGHT: f32 = 22.0;


/// The outer container of an action row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// The padding of the row.
    pub padding: Padding,

    /// The animated bottom margin of the row.
    pub margin_bottom: f32,

    /// The right margin of the row.
    pub margin_right: f32,

    /// The opacity of the row content, driven by the press feedback.
    pub opacity: f32,
}

/// The round button of an action.
#[derive(Debug, PartialEq)]
pub struct Button<'a, E> {
    /// The side of the button box.
    pub size: f32,

    /// The corner radius of the button.
    pub radius: f32,

    /// The background of the button.
    pub background: Color,

    /// The drop shadow of the button.
    pub shadow: Shadow,

    /// What is drawn inside of the button, if anything.
    pub content: Option<Content<'a, E>>,
}

/// The content of a [`Button`].
#[derive(Debug, PartialEq)]
pub enum Content<'a, E> {
    /// An image view synthesized around an image handle.
    Image(Image<'a>),

    /// A caller-provided element, passed through untouched.
    Element(&'a E),
}

/// An image view fitted inside of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image<'a> {
    /// The image to draw.
    pub handle: &'a image::Handle,

    /// The box of the image.
    pub style: Icon,
}

/// How an image fills its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFit {
    /// Scale the image to fill the box, cropping what overflows.
    Cover,

    /// Scale the image to fit inside of the box, keeping its aspect ratio.
    Contain,
}

/// The box of an image icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    /// The width of the image box.
    pub width: f32,

    /// The height of the image box.
    pub height: f32,

    /// How the image fills the box.
    pub fit: ContentFit,

    /// The corner radius of the image box.
    pub radius: f32,

    /// The margin above the image box.
    pub margin_top: f32,
}

impl Icon {
    /// A remote image, drawn as a logo covering the whole button.
    pub const LOGO: Self = Self {
        width: 65.0,
        height: 65.0,
        fit: ContentFit::Cover,
        radius: 30.0,
        margin_top: 0.0,
    };

    /// A bundled image, fitted inside of the button.
    pub const BUNDLED: Self = Self {
        width: 60.0,
        height: 60.0,
        fit: ContentFit::Contain,
        radius: 0.0,
        margin_top: 3.0,
    };

    /// Returns the default box for the given image.
    pub fn for_handle(handle: &image::Handle) -> Self {
        if handle.is_remote() {
            Self::LOGO
        } else {
            Self::BUNDLED
        }
    }
}

/// The text label of an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label<'a> {
    /// The text of the label.
    pub text: &'a str,

    /// The color of the text.
    pub text_color: Color,

    /// The background of the label box.
    pub background: Option<Color>,

    /// The resolved elevation of the label box.
    pub elevation: f32,

    /// The drop shadow derived from the elevation.
    pub shadow: Shadow,

    /// The margin of the label box.
    pub margin: Padding,

    /// The height of the label box.
    pub height: f32,

    /// The font size of the text.
    pub font_size: f32,

    /// The line height of the text.
    pub line_height: f32,
}
