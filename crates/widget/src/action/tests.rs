#![allow(deprecated)]

use super::*;
use crate::core::image;
use crate::core::mouse;
use crate::core::time::{Duration, Instant};
use crate::core::window;
use crate::core::{Color, Event, Point, Rectangle, Shell};

const FRAME: Duration = Duration::from_millis(16);
const BOUNDS: Rectangle = Rectangle::new(Point::new(0.0, 0.0), 120.0, 56.0);

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Pressed(String),
}

/// Collects the warnings of every test in the crate.
mod warnings {
    use std::sync::{Mutex, Once};

    struct Recorder {
        warnings: Mutex<Vec<String>>,
    }

    impl log::Log for Recorder {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record<'_>) {
            if !self.enabled(record.metadata()) || record.target() != "fab_menu::action" {
                return;
            }

            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder {
        warnings: Mutex::new(Vec::new()),
    };

    static INSTALL: Once = Once::new();

    pub fn install() {
        INSTALL.call_once(|| {
            let _ = log::set_logger(&RECORDER);
            log::set_max_level(log::LevelFilter::Warn);
        });
    }

    /// Counts the warnings emitted for the action with the given name.
    pub fn count(name: &str) -> usize {
        let prefix = format!("action {name}:");

        RECORDER
            .warnings
            .lock()
            .map(|warnings| {
                warnings
                    .iter()
                    .filter(|warning| warning.starts_with(&prefix))
                    .count()
            })
            .unwrap_or(0)
    }
}

fn item(name: &str) -> Action<'static, Message, &'static str> {
    Action::new(name).on_press(|name| Message::Pressed(name.to_owned()))
}

fn click(action: &Action<'_, Message, &'static str>, state: &mut State) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);
    let cursor = mouse::Cursor::Available(Point::new(20.0, 20.0));
    let button = mouse::Button::Left;

    for event in [
        Event::Mouse(mouse::Event::ButtonPressed { button }),
        Event::Mouse(mouse::Event::ButtonReleased { button }),
    ] {
        action.update(state, &event, BOUNDS, cursor, &mut shell);
    }

    messages
}

#[test]
fn left_scenario() {
    let action = item("add").position(Position::Left).text("Add").active(false);
    let state = action.state();
    let composition = action.view(&state);

    assert_eq!(composition.slots(), vec![Slot::Icon, Slot::Label]);
    assert_eq!(composition.container.padding.left, 38.0);
    assert_eq!(composition.container.padding.right, ROW_PADDING);
    assert_eq!(composition.container.margin_bottom, 5.0);
    assert_eq!(composition.container.margin_right, style::ROW_MARGIN_RIGHT);
}

#[test]
fn left_scenario_expands_within_bounds() {
    let mut state = item("add").position(Position::Left).text("Add").state();
    let action = item("add").position(Position::Left).text("Add").active(true);

    assert!(action.diff(&mut state));

    let mut samples = Vec::new();

    while state.advance(FRAME) {
        samples.push(action.view(&state).container.margin_bottom);
    }

    assert!(!samples.is_empty());
    assert!(samples.iter().all(|margin| (5.0..=10.0).contains(margin)));
    assert_eq!(action.view(&state).container.margin_bottom, 10.0);
}

#[test]
fn right_scenario_without_text() {
    let action = item("x").position(Position::Right);
    let state = action.state();
    let composition = action.view(&state);

    assert_eq!(composition.slots(), vec![Slot::Icon]);
    assert!(composition.label().is_none());
    assert_eq!(composition.container.padding.right, 38.0);
    assert_eq!(composition.container.padding.left, ROW_PADDING);
}

#[test]
fn right_with_text_puts_label_first() {
    let action = item("x").position(Position::Right).text("Share");
    let state = action.state();
    let composition = action.view(&state);

    assert_eq!(composition.slots(), vec![Slot::Label, Slot::Icon]);
    assert_eq!(composition.label().map(|label| label.margin.right), Some(LABEL_GAP));
    assert_eq!(composition.label().map(|label| label.margin.top), Some(LABEL_MARGIN_TOP));
}

#[test]
fn center_and_missing_positions_never_show_labels() {
    for position in [Some(Position::Center), None, Position::from_name("diagonal")] {
        let action = item("c").position(position).text("Hidden");
        let state = action.state();
        let composition = action.view(&state);

        assert_eq!(composition.slots(), vec![Slot::Icon]);
        assert_eq!(composition.container.padding.left, ROW_PADDING);
        assert_eq!(composition.container.padding.right, ROW_PADDING);
    }
}

#[test]
fn empty_text_emits_no_label() {
    let action = item("e").position(Position::Left).text("");
    let state = action.state();

    assert_eq!(action.view(&state).slots(), vec![Slot::Icon]);
}

#[test]
fn label_carries_its_styling() {
    let background = Color::from_rgb8(0x20, 0x20, 0x20);
    let text_color = Color::from_rgb8(0xee, 0xee, 0xee);

    let action = item("s")
        .position(Position::Left)
        .text("Styled")
        .text_color(text_color)
        .text_background(background)
        .text_elevation(2.0);
    let state = action.state();
    let composition = action.view(&state);
    let label = composition.label().expect("label");

    assert_eq!(label.text, "Styled");
    assert_eq!(label.text_color, text_color);
    assert_eq!(label.background, Some(background));
    assert_eq!(label.elevation, 2.0);
}

#[test]
fn label_defaults() {
    let action = item("d").position(Position::Left).text("Default");
    let state = action.state();
    let composition = action.view(&state);
    let label = composition.label().expect("label");

    assert_eq!(label.text_color, Color::WHITE);
    assert_eq!(label.background, None);
    assert_eq!(label.elevation, DEFAULT_TEXT_ELEVATION);
    assert_eq!(
        composition.button().map(|button| button.background),
        Some(style::DEFAULT_COLOR)
    );
}

#[test]
fn legacy_elevation_scenario() {
    warnings::install();

    let action = item("y").position(Position::Left).text("Y").elevation(9.0);
    let state = action.state();

    let composition = action.view(&state);

    assert_eq!(composition.label().map(|label| label.elevation), Some(9.0));
    assert!(state.warned_legacy_elevation.get());

    for _ in 0..3 {
        let _ = action.view(&state);
    }

    assert_eq!(warnings::count("y"), 1);
}

#[test]
fn legacy_elevation_warns_without_text() {
    warnings::install();

    for position in [Position::Left, Position::Right] {
        let name = format!("bare-{}", position.name());
        let action = item(&name).position(position).elevation(9.0);
        let state = action.state();

        assert!(action.view(&state).label().is_none());
        assert!(state.warned_legacy_elevation.get());
        assert_eq!(warnings::count(&name), 1);
    }
}

#[test]
fn centered_actions_never_resolve_the_label() {
    warnings::install();

    let action = item("centered-legacy").text("C").elevation(9.0);
    let state = action.state();

    let _ = action.view(&state);

    assert!(!state.warned_legacy_elevation.get());
    assert_eq!(warnings::count("centered-legacy"), 0);
}

#[test]
fn legacy_elevation_does_not_touch_the_button() {
    let plain = item("p").position(Position::Left).text("P");
    let legacy = item("p").position(Position::Left).text("P").elevation(20.0);
    let state = plain.state();

    assert_eq!(
        plain.view(&state).button().map(|button| button.shadow),
        legacy.view(&state).button().map(|button| button.shadow),
    );
}

#[test]
fn no_warning_without_legacy_elevation() {
    let action = item("n").position(Position::Left).text("N").text_elevation(1.0);
    let state = action.state();

    let _ = action.view(&state);

    assert!(!state.warned_legacy_elevation.get());
}

#[test]
fn press_publishes_the_name_once_per_tap() {
    let action = item("add").position(Position::Left).text("Add").active(true);
    let mut state = action.state();

    assert_eq!(click(&action, &mut state), vec![Message::Pressed("add".to_owned())]);
    assert_eq!(click(&action, &mut state), vec![Message::Pressed("add".to_owned())]);
}

#[test]
fn press_ignores_other_properties() {
    for position in [Some(Position::Left), Some(Position::Right), None] {
        let action = item("same").position(position).color(Color::BLACK);
        let mut state = action.state();

        assert_eq!(click(&action, &mut state), vec![Message::Pressed("same".to_owned())]);
    }
}

#[test]
fn without_on_press_nothing_is_published() {
    let action: Action<'_, Message, &'static str> = Action::new("mute");
    let mut state = action.state();

    assert!(click(&action, &mut state).is_empty());
    assert!(action.view(&state).surface.is_disabled());
}

#[test]
fn prebuilt_icons_are_passed_verbatim() {
    let action = item("p").icon_element("custom-element");
    let state = action.state();
    let composition = action.view(&state);

    match composition.button().and_then(|button| button.content.as_ref()) {
        Some(style::Content::Element(element)) => assert_eq!(**element, "custom-element"),
        other => panic!("expected a verbatim element, got {other:?}"),
    }
}

fn image_style(action: &Action<'_, Message, &'static str>) -> style::Icon {
    let state = action.state();
    let composition = action.view(&state);

    match composition.button().and_then(|button| button.content.as_ref()) {
        Some(style::Content::Image(image)) => image.style,
        other => panic!("expected an image view, got {other:?}"),
    }
}

#[test]
fn image_icons_get_an_image_view() {
    let action = item("i").icon(image::Handle::from_path("add.png"));
    let state = action.state();
    let composition = action.view(&state);

    match composition.button().and_then(|button| button.content.as_ref()) {
        Some(style::Content::Image(image)) => {
            assert_eq!(image.handle.path(), Some(std::path::Path::new("add.png")));
        }
        other => panic!("expected an image view, got {other:?}"),
    }

    let bundled = image_style(&action);

    assert_eq!(bundled, style::Icon::BUNDLED);
    assert_eq!((bundled.width, bundled.height), (60.0, 60.0));
    assert_eq!(bundled.fit, style::ContentFit::Contain);
    assert_eq!(bundled.margin_top, 3.0);
}

#[test]
fn remote_icons_cover_the_button() {
    let action = item("r").icon(image::Handle::from_url("https://example.com/logo.png"));
    let logo = image_style(&action);

    assert_eq!(logo, style::Icon::LOGO);
    assert_eq!((logo.width, logo.height), (65.0, 65.0));
    assert_eq!(logo.fit, style::ContentFit::Cover);
    assert_eq!(logo.radius, 30.0);
}

#[test]
fn icon_style_adjusts_the_default_box() {
    let action = item("s")
        .icon(image::Handle::from_path("add.png"))
        .icon_style(|icon| style::Icon {
            width: 24.0,
            height: 24.0,
            ..icon
        });
    let icon = image_style(&action);

    assert_eq!((icon.width, icon.height), (24.0, 24.0));
    assert_eq!(icon.fit, style::ContentFit::Contain);
    assert_eq!(icon.margin_top, 3.0);
}

#[test]
fn icon_style_leaves_elements_alone() {
    let action = item("e")
        .icon_element("custom-element")
        .icon_style(|icon| style::Icon { width: 1.0, ..icon });
    let state = action.state();
    let composition = action.view(&state);

    assert!(matches!(
        composition.button().and_then(|button| button.content.as_ref()),
        Some(style::Content::Element(_))
    ));
}

#[test]
fn button_is_a_rounded_square() {
    let action = item("b");
    let state = action.state();
    let composition = action.view(&state);
    let button = composition.button().expect("button");

    assert_eq!(button.size, style::BUTTON_SIZE);
    assert_eq!(button.size, 55.0);
    assert_eq!(button.radius, 30.0);
}

#[cfg(not(target_os = "android"))]
#[test]
fn pressed_actions_fade() {
    let action = item("fade").position(Position::Left);
    let mut state = action.state();
    let mut messages = Vec::new();
    let mut shell = Shell::new(&mut messages);
    let cursor = mouse::Cursor::Available(Point::new(20.0, 20.0));

    action.update(
        &mut state,
        &Event::Mouse(mouse::Event::ButtonPressed {
            button: mouse::Button::Left,
        }),
        BOUNDS,
        cursor,
        &mut shell,
    );

    assert_eq!(action.view(&state).container.opacity, 0.4);
}

#[test]
fn padding_top_bottom_applies_vertically() {
    let action = item("v").position(Position::Left).padding_top_bottom(6.0);
    let state = action.state();
    let padding = action.view(&state).container.padding;

    assert_eq!(padding.top, 6.0);
    assert_eq!(padding.bottom, 6.0);
    assert_eq!(padding.left, 38.0);
}

#[test]
fn padding_top_bottom_defaults_to_the_row_padding() {
    let action = item("v").position(Position::Right);
    let state = action.state();
    let padding = action.view(&state).container.padding;

    assert_eq!(padding.top, ROW_PADDING_TOP_BOTTOM);
    assert_eq!(padding.bottom, ROW_PADDING_TOP_BOTTOM);
}

#[test]
fn repeated_flips_stay_within_bounds() {
    let mut state = item("f").state();
    let mut active = false;

    for round in 0..40 {
        if round % 3 == 0 {
            active = !active;
            let _ = item("f").active(active).diff(&mut state);
        }

        let _ = state.advance(Duration::from_millis(7 * (round % 5 + 1)));

        assert!((0.0..=1.0).contains(&state.value()));
        assert!((5.0..=10.0).contains(&state.margin_bottom()));
    }

    while state.advance(FRAME) {}

    assert_eq!(state.value(), if active { 1.0 } else { 0.0 });
}

#[test]
fn redraw_ticks_drive_the_transition() {
    let mut state = item("t").state();
    let action = item("t").active(true);
    let _ = action.diff(&mut state);

    let mut messages = Vec::new();
    let start = Instant::now();
    let mut frame = 0;

    loop {
        let mut shell = Shell::new(&mut messages);
        let now = start + FRAME * frame;

        action.update(
            &mut state,
            &Event::Window(window::Event::RedrawRequested(now)),
            BOUNDS,
            mouse::Cursor::Unavailable,
            &mut shell,
        );

        if shell.redraw_request() != window::RedrawRequest::NextFrame {
            break;
        }

        frame += 1;
        assert!(frame < 1_000, "transition never settled");
    }

    assert!(messages.is_empty());
    assert_eq!(state.phase(), Phase::Expanded);
}

#[test]
fn retarget_mid_flight_keeps_the_value() {
    let mut state = item("r").state();
    let _ = item("r").active(true).diff(&mut state);

    for _ in 0..4 {
        let _ = state.advance(FRAME);
    }

    let midway = state.value();
    assert!(midway > 0.0 && midway < 1.0);

    assert!(item("r").active(false).diff(&mut state));
    assert_eq!(state.value(), midway);
    assert_eq!(state.phase(), Phase::Transitioning);
}
