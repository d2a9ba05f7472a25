//! Describe menu actions in RON files.
//!
//! ```
//! use fab_menu_widget::config;
//!
//! let menu = config::from_str(r##"
//!     #![enable(implicit_some)]
//!     (
//!         distance_to_edge: 24.0,
//!         actions: [
//!             (name: "add", text: "Add", position: "left", color: "#1253bc"),
//!             (name: "share", position: "right"),
//!         ],
//!     )
//! "##)?;
//!
//! let actions = menu.actions::<(), ()>()?;
//!
//! assert_eq!(actions.len(), 2);
//! assert_eq!(actions[0].name(), "add");
//! # Ok::<(), config::Error>(())
//! ```
use crate::action::{self, Action, Position};
use crate::core::image;
use crate::core::Color;

use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

/// An error produced while loading a menu description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file does not exist.
    #[error("menu file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file could not be read.
    #[error("failed to read menu file: {0}")]
    Read(#[from] std::io::Error),

    /// The file is not valid RON, or a value has the wrong shape.
    #[error("failed to parse menu: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The file extension is not supported.
    #[error("unsupported menu format: {0}")]
    UnsupportedFormat(String),

    /// An action has an empty name.
    #[error("action #{index} has an empty name")]
    EmptyName {
        /// The index of the offending action.
        index: usize,
    },
}

/// The description of a single action.
///
/// Colors are hex strings; positions are lowercase names. Unknown positions
/// are kept and lay out like a centered action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// The unique name of the action.
    pub name: String,

    /// The path of the icon image.
    pub icon: Option<PathBuf>,

    /// The URL of a remote icon image; takes precedence over `icon`.
    pub icon_url: Option<String>,

    /// The label text.
    pub text: Option<String>,

    /// The background of the button.
    #[serde(with = "hex")]
    pub color: Option<Color>,

    /// The color of the label text.
    #[serde(with = "hex")]
    pub text_color: Option<Color>,

    /// The background of the label.
    #[serde(with = "hex")]
    pub text_background: Option<Color>,

    /// The elevation of the label.
    pub text_elevation: Option<f32>,

    /// The deprecated elevation of the label.
    pub elevation: Option<f32>,

    /// The side of the menu the action is attached to.
    pub position: Option<String>,

    /// The distance to the edge of the menu; overrides the menu setting.
    pub distance_to_edge: Option<f32>,

    /// The padding above and below the action; overrides the menu setting.
    pub padding_top_bottom: Option<f32>,
}

impl ActionConfig {
    /// Returns the [`Position`] of the action, if its name is known.
    pub fn position(&self) -> Option<Position> {
        let name = self.position.as_deref()?;
        let position = Position::from_name(name);

        if position.is_none() {
            log::debug!("action {}: unknown position {name:?}", self.name);
        }

        position
    }

    /// Builds an [`Action`] from the description.
    #[allow(deprecated)]
    pub fn action<'a, Message, E>(&self) -> Action<'a, Message, E> {
        let mut action = action::action(self.name.as_str()).position(self.position());

        if let Some(icon) = &self.icon {
            action = action.icon(image::Handle::from_path(icon));
        }

        if let Some(url) = &self.icon_url {
            action = action.icon(image::Handle::from_url(url.as_str()));
        }

        if let Some(text) = &self.text {
            action = action.text(text.as_str());
        }

        if let Some(color) = self.color {
            action = action.color(color);
        }

        if let Some(color) = self.text_color {
            action = action.text_color(color);
        }

        if let Some(color) = self.text_background {
            action = action.text_background(color);
        }

        if let Some(elevation) = self.text_elevation {
            action = action.text_elevation(elevation);
        }

        if let Some(elevation) = self.elevation {
            action = action.elevation(elevation);
        }

        if let Some(distance) = self.distance_to_edge {
            action = action.distance_to_edge(distance);
        }

        if let Some(padding) = self.padding_top_bottom {
            action = action.padding_top_bottom(padding);
        }

        action
    }
}

/// The description of a whole menu.
///
/// Menu settings are defaults for every action that does not set its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// The default side of the menu.
    pub position: Option<String>,

    /// The default distance to the edge of the menu.
    pub distance_to_edge: Option<f32>,

    /// The default padding above and below each action.
    pub padding_top_bottom: Option<f32>,

    /// The actions of the menu, in order.
    pub actions: Vec<ActionConfig>,
}

impl MenuConfig {
    /// Returns the action descriptions with the menu defaults applied.
    pub fn resolved(&self) -> Vec<ActionConfig> {
        self.actions
            .iter()
            .map(|action| ActionConfig {
                position: action.position.clone().or_else(|| self.position.clone()),
                distance_to_edge: action.distance_to_edge.or(self.distance_to_edge),
                padding_top_bottom: action.padding_top_bottom.or(self.padding_top_bottom),
                ..action.clone()
            })
            .collect()
    }

    /// Builds every [`Action`] of the menu.
    ///
    /// Fails if an action has an empty name.
    pub fn actions<'a, Message, E>(&self) -> Result<Vec<Action<'a, Message, E>>, Error> {
        self.validate()?;

        Ok(self.resolved().iter().map(ActionConfig::action).collect())
    }

    fn validate(&self) -> Result<(), Error> {
        match self.actions.iter().position(|action| action.name.is_empty()) {
            Some(index) => Err(Error::EmptyName { index }),
            None => Ok(()),
        }
    }
}

/// Parses a [`MenuConfig`] from RON.
pub fn from_str(content: &str) -> Result<MenuConfig, Error> {
    let menu: MenuConfig = ron::from_str(content)?;
    menu.validate()?;

    Ok(menu)
}

/// Loads a [`MenuConfig`] from a `.ron` file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<MenuConfig, Error> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension != "ron" {
        return Err(Error::UnsupportedFormat(extension.to_owned()));
    }

    let content = std::fs::read_to_string(path)?;

    from_str(&content)
}

mod hex {
    use crate::core::Color;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_some(&color.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(hex) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        Color::parse(&hex)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid color `{hex}`")))
    }
}
