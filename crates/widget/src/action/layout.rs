//! Arrange the icon and the label of an action.
use crate::core::Padding;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The margin added to the distance to the edge of the menu.
pub const DEFAULT_MARGIN: f32 = 8.0;

/// The gap between the label and the button, on the side facing the button.
pub const LABEL_GAP: f32 = 14.0;

/// The margin above the label, centering it on the button.
pub const LABEL_MARGIN_TOP: f32 = 18.0;

/// The horizontal padding of the row on every side without edge padding.
pub const ROW_PADDING: f32 = 10.0;

/// The vertical padding of the row unless the menu sets its own.
pub const ROW_PADDING_TOP_BOTTOM: f32 = 8.0;

/// The side of the menu an action is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// The button hugs the left edge and the label follows it.
    Left,

    /// The button hugs the right edge and the label precedes it.
    Right,

    /// The button is centered; no label is shown.
    Center,
}

impl Position {
    /// Parses a [`Position`] from its lowercase name.
    ///
    /// Unknown names produce `None`, which lays out like [`Position::Center`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// Returns the lowercase name of the [`Position`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// A slot of the action row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The round button holding the icon.
    Icon,

    /// The text label.
    Label,
}

/// How the children of an action row are arranged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrangement {
    /// The slots of the row, in drawing order.
    pub slots: &'static [Slot],

    /// The padding of the row.
    pub padding: Padding,

    /// The margin of the label, facing the button.
    pub label_margin: Padding,
}

impl Arrangement {
    /// Returns true if the [`Arrangement`] has room for a label.
    pub fn has_label(&self) -> bool {
        self.slots.contains(&Slot::Label)
    }
}

/// Arranges an action row for the given [`Position`].
///
/// The edge padding is `distance_to_edge + DEFAULT_MARGIN`, applied on the
/// side the action is attached to; the other side keeps [`ROW_PADDING`].
/// A centered action, or one without a position, only shows its button and
/// has no edge padding.
pub fn arrange(position: Option<Position>, distance_to_edge: f32) -> Arrangement {
    let edge = distance_to_edge + DEFAULT_MARGIN;
    let row = Padding::new(ROW_PADDING).top_bottom(ROW_PADDING_TOP_BOTTOM);
    let label = Padding::ZERO.top(LABEL_MARGIN_TOP);

    match position {
        Some(Position::Left) => Arrangement {
            slots: &[Slot::Icon, Slot::Label],
            padding: row.left(edge),
            label_margin: label.left(LABEL_GAP),
        },
        Some(Position::Right) => Arrangement {
            slots: &[Slot::Label, Slot::Icon],
            padding: row.right(edge),
            label_margin: label.right(LABEL_GAP),
        },
        Some(Position::Center) | None => Arrangement {
            slots: &[Slot::Icon],
            padding: row,
            label_margin: Padding::ZERO,
        },
    }
}
