//! This demo drives a small menu without a window.
//!
//! The items are loaded from RON, tapped, and then expanded; the bottom
//! margin of each row is printed for every simulated frame.
//!
//! Run with `RUST_LOG=debug` to see the transitions and the deprecation
//! warning of the `legacy` item.
use fab_menu::action::State;
use fab_menu::time::{Duration, Instant};
use fab_menu::{Action, Event, Point, Rectangle, Shell, config, mouse, window};

const MENU: &str = r##"
#![enable(implicit_some)]
(
    distance_to_edge: 30.0,
    padding_top_bottom: 8.0,
    actions: [
        (name: "add", text: "Add", position: "left", icon: "icons/add.png"),
        (name: "share", text: "Share", position: "right", text_background: "#ffffff", text_color: "#444444"),
        (name: "logo", text: "Logo", position: "right", icon_url: "https://example.com/logo.png"),
        (name: "legacy", text: "Legacy", position: "left", elevation: 9.0),
        (name: "center", text: "Hidden", position: "center"),
    ],
)
"##;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
enum Message {
    Pressed(String),
}

struct Item {
    state: State,
    bounds: Rectangle,
}

fn build(
    menu: &config::MenuConfig,
    active: bool,
) -> Result<Vec<Action<'static, Message>>, config::Error> {
    Ok(menu
        .actions()?
        .into_iter()
        .map(|action: Action<'static, Message>| {
            action
                .active(active)
                .on_press(|name| Message::Pressed(name.to_owned()))
        })
        .collect())
}

fn tap(action: &Action<'_, Message>, item: &mut Item, messages: &mut Vec<Message>) {
    let mut shell = Shell::new(messages);
    let center = Point::new(
        item.bounds.x + item.bounds.width / 2.0,
        item.bounds.y + item.bounds.height / 2.0,
    );
    let cursor = mouse::Cursor::Available(center);
    let button = mouse::Button::Left;

    for event in [
        Event::Mouse(mouse::Event::ButtonPressed { button }),
        Event::Mouse(mouse::Event::ButtonReleased { button }),
    ] {
        action.update(&mut item.state, &event, item.bounds, cursor, &mut shell);
    }
}

fn main() -> Result<(), config::Error> {
    env_logger::init();

    let menu = config::from_str(MENU)?;

    let collapsed = build(&menu, false)?;
    let mut items: Vec<Item> = collapsed
        .iter()
        .enumerate()
        .map(|(index, action)| Item {
            state: action.state(),
            bounds: Rectangle::new(Point::new(0.0, index as f32 * 56.0), 160.0, 56.0),
        })
        .collect();

    for (action, item) in collapsed.iter().zip(&items) {
        let composition = action.view(&item.state);

        println!(
            "{:>8}: slots {:?}, padding {:?}, margin {}",
            action.name(),
            composition.slots(),
            composition.container.padding,
            composition.container.margin_bottom,
        );
    }

    let mut messages = Vec::new();

    for (action, item) in collapsed.iter().zip(items.iter_mut()) {
        tap(action, item, &mut messages);
    }

    for message in &messages {
        let Message::Pressed(name) = message;
        println!("pressed {name}");
    }

    let expanded = build(&menu, true)?;

    for (action, item) in expanded.iter().zip(items.iter_mut()) {
        let _ = action.diff(&mut item.state);
    }

    let start = Instant::now();
    let mut frame = 0;

    loop {
        let now = start + FRAME * frame;
        let mut redraw = false;
        let mut published = Vec::new();

        for (action, item) in expanded.iter().zip(items.iter_mut()) {
            let mut shell = Shell::new(&mut published);

            action.update(
                &mut item.state,
                &Event::Window(window::Event::RedrawRequested(now)),
                item.bounds,
                mouse::Cursor::Unavailable,
                &mut shell,
            );

            redraw |= shell.redraw_request() == window::RedrawRequest::NextFrame;
        }

        let margins: Vec<String> = items
            .iter()
            .map(|item| format!("{:.2}", item.state.margin_bottom()))
            .collect();

        println!("frame {frame:>3}: {}", margins.join(" "));

        if !redraw {
            break;
        }

        frame += 1;
    }

    log::info!("menu settled after {frame} frames");

    Ok(())
}
