// SPDX-License-Identifier: LGPL-3.0-only

//! Orientation and alignment values for command bars and their menus.

/// Axis along which a command bar lays out its items.
///
/// Menus mirror the orientation of the bar they are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items flow left to right, popups drop down.
    #[default]
    Horizontal,
    /// Items flow top to bottom, popups open to the side.
    Vertical,
}

impl Orientation {
    /// Parse an orientation from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" | "row" => Some(Orientation::Horizontal),
            "vertical" | "column" => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Check if this is the horizontal orientation.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// Which edge of a root popup lines up with the menu item horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Popup left edge on the menu's left edge, extending rightward.
    #[default]
    Left,
    /// Popup right edge on the menu's right edge, extending leftward.
    Right,
}

impl HorizontalAlignment {
    /// Parse a horizontal alignment from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(HorizontalAlignment::Left),
            "right" => Some(HorizontalAlignment::Right),
            _ => None,
        }
    }
}

/// Vertical alignment preference of a popup.
///
/// Stored on the menu for hosts that want it; placement does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Popup aligned to the top of the menu.
    Top,
    /// Popup aligned below the menu.
    #[default]
    Bottom,
}

impl VerticalAlignment {
    /// Parse a vertical alignment from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(VerticalAlignment::Top),
            "bottom" => Some(VerticalAlignment::Bottom),
            _ => None,
        }
    }
}
