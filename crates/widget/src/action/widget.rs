use crate::core::image;
use crate::core::mouse;
use crate::core::window;
use crate::core::{Color, Event, Padding, Rectangle, Shadow, Shell};
use crate::touchable::{self, Interaction};

use super::elevation::resolve_elevation;
use super::layout::{self, Position, Slot};
use super::state::State;
use super::style::{self, Button, Container, Content, Image, Label};

use smol_str::SmolStr;

/// The icon of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon<E> {
    /// An image, drawn inside a synthesized image view.
    Image(image::Handle),

    /// A ready-made element, drawn as-is.
    Element(E),
}

impl<E> From<image::Handle> for Icon<E> {
    fn from(handle: image::Handle) -> Self {
        Self::Image(handle)
    }
}

/// A single item of a floating action button menu.
///
/// An [`Action`] is rebuilt from its properties every frame, while its
/// [`State`] is created once with [`Action::state`] and kept by the host.
///
/// # Example
/// ```
/// use fab_menu_widget::action;
/// use fab_menu_widget::action::Position;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Message {
///     Pressed(String),
/// }
///
/// let item = action::<Message, ()>("add")
///     .text("Add")
///     .position(Position::Left)
///     .on_press(|name| Message::Pressed(name.to_owned()));
///
/// let state = item.state();
/// let composition = item.view(&state);
///
/// assert_eq!(composition.slots(), vec![action::Slot::Icon, action::Slot::Label]);
/// assert_eq!(composition.container.padding.left, 38.0);
/// ```
pub struct Action<'a, Message, E = ()> {
    name: SmolStr,
    icon: Option<Icon<E>>,
    text: Option<String>,
    color: Color,
    text_color: Color,
    text_background: Option<Color>,
    text_elevation: Option<f32>,
    elevation: Option<f32>,
    position: Option<Position>,
    active: bool,
    distance_to_edge: f32,
    padding_top_bottom: Option<f32>,
    icon_style: Option<Box<dyn Fn(style::Icon) -> style::Icon + 'a>>,
    on_press: Option<Box<dyn Fn(&str) -> Message + 'a>>,
}

/// Creates a new [`Action`] with the given name.
pub fn action<'a, Message, E>(name: impl Into<SmolStr>) -> Action<'a, Message, E> {
    Action::new(name)
}

impl<'a, Message, E> Action<'a, Message, E> {
    /// Creates a new [`Action`] with the given name.
    ///
    /// The name identifies the action and is handed back by
    /// [`Action::on_press`]; it must not be empty.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        let name = name.into();

        debug_assert!(!name.is_empty(), "an action needs a non-empty name");

        Self {
            name,
            icon: None,
            text: None,
            color: style::DEFAULT_COLOR,
            text_color: style::DEFAULT_TEXT_COLOR,
            text_background: None,
            text_elevation: None,
            elevation: None,
            position: None,
            active: false,
            distance_to_edge: style::DEFAULT_DISTANCE_TO_EDGE,
            padding_top_bottom: None,
            icon_style: None,
            on_press: None,
        }
    }

    /// Returns the name of the [`Action`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the [`Icon`] of the [`Action`].
    pub fn icon(mut self, icon: impl Into<Icon<E>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets a ready-made element as the icon of the [`Action`].
    pub fn icon_element(mut self, element: E) -> Self {
        self.icon = Some(Icon::Element(element));
        self
    }

    /// Adjusts the box of an image icon.
    ///
    /// The closure receives the default box for the image, [`style::Icon::LOGO`]
    /// for remote images and [`style::Icon::BUNDLED`] otherwise. Ready-made
    /// elements are never restyled.
    pub fn icon_style(mut self, style: impl Fn(style::Icon) -> style::Icon + 'a) -> Self {
        self.icon_style = Some(Box::new(style));
        self
    }

    /// Sets the label text of the [`Action`].
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the background [`Color`] of the button.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the [`Color`] of the label text.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the background [`Color`] of the label.
    pub fn text_background(mut self, color: Color) -> Self {
        self.text_background = Some(color);
        self
    }

    /// Sets the elevation of the label.
    pub fn text_elevation(mut self, elevation: f32) -> Self {
        self.text_elevation = Some(elevation);
        self
    }

    /// Sets the elevation of the label.
    #[deprecated(note = "use `text_elevation` instead")]
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Sets the [`Position`] of the [`Action`] in the menu.
    pub fn position(mut self, position: impl Into<Option<Position>>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets whether the [`Action`] is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the distance between the [`Action`] and the edge of the menu.
    pub fn distance_to_edge(mut self, distance: f32) -> Self {
        self.distance_to_edge = distance;
        self
    }

    /// Sets the padding above and below the [`Action`].
    ///
    /// Defaults to [`ROW_PADDING_TOP_BOTTOM`](super::ROW_PADDING_TOP_BOTTOM).
    pub fn padding_top_bottom(mut self, padding: f32) -> Self {
        self.padding_top_bottom = Some(padding);
        self
    }

    /// Sets the message produced, from the action name, when the [`Action`]
    /// is pressed.
    ///
    /// Unless `on_press` is called, the [`Action`] will be disabled.
    pub fn on_press(mut self, on_press: impl Fn(&str) -> Message + 'a) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Creates the [`State`] of a freshly mounted [`Action`].
    pub fn state(&self) -> State {
        State::mounted(self.active)
    }

    /// Reconciles the [`State`] with the current properties.
    ///
    /// Returns true if a transition started; the host should then schedule
    /// a redraw.
    pub fn diff(&self, state: &mut State) -> bool {
        let started = state.set_active(self.active);

        if started {
            log::debug!(
                "action {} {}",
                self.name,
                if self.active { "expanding" } else { "collapsing" }
            );
        }

        started
    }

    /// Processes an [`Event`] for the [`Action`] laid out in the given bounds.
    pub fn update(
        &self,
        state: &mut State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
        shell: &mut Shell<'_, Message>,
    ) {
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            if state.tick(*now) {
                shell.request_redraw();
            }

            return;
        }

        let surface = self.surface();

        match surface.update(&mut state.press, event, bounds, cursor) {
            Interaction::Tapped => {
                if let Some(on_press) = &self.on_press {
                    shell.publish(on_press(&self.name));
                }

                shell.capture_event();
                shell.request_redraw();
            }
            Interaction::Tracked => {
                shell.capture_event();
                shell.request_redraw();
            }
            Interaction::Ignored => {}
        }

        if state.is_animating() {
            shell.request_redraw();
        }
    }

    /// Composes the [`Action`] for drawing.
    pub fn view(&self, state: &State) -> Composition<'_, E> {
        let arrangement = layout::arrange(self.position, self.distance_to_edge);
        let surface = self.surface();

        let mut label = if arrangement.has_label() {
            self.label(state, arrangement.label_margin)
        } else {
            None
        };

        let mut button = Some(self.button());

        let children = arrangement
            .slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Icon => button.take().map(Child::Button),
                Slot::Label => label.take().map(Child::Label),
            })
            .collect();

        let padding = match self.padding_top_bottom {
            Some(padding) => arrangement.padding.top_bottom(padding),
            None => arrangement.padding,
        };

        Composition {
            surface,
            container: Container {
                padding,
                margin_bottom: state.margin_bottom(),
                margin_right: style::ROW_MARGIN_RIGHT,
                opacity: surface.opacity(&state.press),
            },
            children,
        }
    }

    fn surface(&self) -> touchable::Surface {
        touchable::surface(self.on_press.is_none())
    }

    fn button(&self) -> Button<'_, E> {
        let content = self.icon.as_ref().map(|icon| match icon {
            Icon::Image(handle) => {
                let default = style::Icon::for_handle(handle);

                Content::Image(Image {
                    handle,
                    style: self
                        .icon_style
                        .as_ref()
                        .map_or(default, |adjust| adjust(default)),
                })
            }
            Icon::Element(element) => Content::Element(element),
        });

        Button {
            size: style::BUTTON_SIZE,
            radius: style::BUTTON_RADIUS,
            background: self.color,
            shadow: Shadow::from_elevation(style::BUTTON_ELEVATION),
            content,
        }
    }

    fn label(&self, state: &State, margin: Padding) -> Option<Label<'_>> {
        let (elevation, legacy) = resolve_elevation(self.text_elevation, self.elevation);

        if legacy && !state.warned_legacy_elevation.replace(true) {
            log::warn!(
                target: "fab_menu::action",
                "action {}: `elevation` is deprecated, use `text_elevation` instead",
                self.name
            );
        }

        let text = self.text.as_deref().filter(|text| !text.is_empty())?;

        Some(Label {
            text,
            text_color: self.text_color,
            background: self.text_background,
            elevation,
            shadow: Shadow::from_elevation(elevation),
            margin,
            height: style::LABEL_HEIGHT,
            font_size: style::LABEL_FONT_SIZE,
            line_height: style::LABEL_LINE_HEIGHT,
        })
    }
}

impl<Message, E> std::fmt::Debug for Action<'_, Message, E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("text", &self.text)
            .field("position", &self.position)
            .field("custom_icon_style", &self.icon_style.is_some())
            .field("active", &self.active)
            .field("enabled", &self.on_press.is_some())
            .finish_non_exhaustive()
    }
}

/// A child of an action row.
#[derive(Debug, PartialEq)]
pub enum Child<'a, E> {
    /// The round button holding the icon.
    Button(Button<'a, E>),

    /// The text label.
    Label(Label<'a>),
}

impl<E> Child<'_, E> {
    /// Returns the [`Slot`] filled by the [`Child`].
    pub fn slot(&self) -> Slot {
        match self {
            Child::Button(_) => Slot::Icon,
            Child::Label(_) => Slot::Label,
        }
    }
}

/// An action, composed for drawing.
#[derive(Debug, PartialEq)]
pub struct Composition<'a, E> {
    /// The pressable surface wrapping the row.
    pub surface: touchable::Surface,

    /// The outer container of the row.
    pub container: Container,

    /// The children of the row, in drawing order.
    pub children: Vec<Child<'a, E>>,
}

impl<'a, E> Composition<'a, E> {
    /// Returns the slots of the row, in drawing order.
    pub fn slots(&self) -> Vec<Slot> {
        self.children.iter().map(Child::slot).collect()
    }

    /// Returns the round button of the row.
    pub fn button(&self) -> Option<&Button<'a, E>> {
        self.children.iter().find_map(|child| match child {
            Child::Button(button) => Some(button),
            Child::Label(_) => None,
        })
    }

    /// Returns the label of the row, if any.
    pub fn label(&self) -> Option<&Label<'a>> {
        self.children.iter().find_map(|child| match child {
            Child::Label(label) => Some(label),
            Child::Button(_) => None,
        })
    }
}
