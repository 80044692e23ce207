// SPDX-License-Identifier: LGPL-3.0-only

//! Placement and hide-timing configuration.

use crate::error::ConfigError;
use crate::menu::constants::{CHILD_POPUP_OVERLAP, HIDE_GRACE_MS, ITEM_TOP_PADDING, OPEN_DELAY_MS};
use nalgebra::Vector2;
use serde::Deserialize;
use std::time::Duration;

/// Offset applied between a menu and its popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PopupOffset {
    /// Horizontal offset in pixels.
    #[serde(default)]
    pub x: i32,
    /// Vertical offset in pixels.
    #[serde(default)]
    pub y: i32,
}

impl PopupOffset {
    /// Create an offset.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The offset as a vector.
    pub fn to_vector(self) -> Vector2<i32> {
        Vector2::new(self.x, self.y)
    }
}

/// How a deselected submenu is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HidePolicy {
    /// Hide as soon as the menu is deselected.
    #[default]
    Immediate,
    /// Keep the submenu up for a grace period so moving to a sibling does not flicker.
    Delayed,
}

impl HidePolicy {
    /// Parse a hide policy from a string.
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(HidePolicy::Immediate),
            "delayed" => Ok(HidePolicy::Delayed),
            other => Err(ConfigError::InvalidHidePolicy(other.to_string())),
        }
    }
}

/// Menu placement and interaction configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Offset of a top-level (pull-down) popup.
    pub menu_popup_offset: PopupOffset,
    /// Offset of a submenu (pull-right) popup.
    pub submenu_popup_offset: PopupOffset,
    /// Hide policy for deselected submenus.
    pub hide_policy: HidePolicy,
    /// Delay before a hovered submenu opens, in milliseconds.
    pub open_delay_ms: u64,
    /// Extra grace before a deselected submenu hides under [HidePolicy::Delayed], in milliseconds.
    pub hide_grace_ms: u64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            menu_popup_offset: PopupOffset::default(),
            submenu_popup_offset: PopupOffset::new(-CHILD_POPUP_OVERLAP, -ITEM_TOP_PADDING),
            hide_policy: HidePolicy::Immediate,
            open_delay_ms: OPEN_DELAY_MS,
            hide_grace_ms: HIDE_GRACE_MS,
        }
    }
}

impl PlacementConfig {
    /// Parse a configuration from TOML, filling missing fields with defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Set the top-level popup offset.
    pub fn with_menu_popup_offset(mut self, x: i32, y: i32) -> Self {
        self.menu_popup_offset = PopupOffset::new(x, y);
        self
    }

    /// Set the submenu popup offset.
    pub fn with_submenu_popup_offset(mut self, x: i32, y: i32) -> Self {
        self.submenu_popup_offset = PopupOffset::new(x, y);
        self
    }

    /// Set the hide policy.
    pub fn with_hide_policy(mut self, policy: HidePolicy) -> Self {
        self.hide_policy = policy;
        self
    }

    /// Time a deselected submenu stays up under [HidePolicy::Delayed].
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms + self.hide_grace_ms)
    }
}
