// SPDX-License-Identifier: LGPL-3.0-only

//! Errors raised while opening menus, enumerating screens and parsing configuration.

use crate::menu::MenuId;
use thiserror::Error;

/// Errors that can occur while opening or placing a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu has no on-screen bounds yet, so its popup cannot be placed.
    #[error("Menu '{0}' is not realized on screen")]
    NotRealized(String),

    /// A content provider failed while building the popup.
    #[error("Failed to populate menu '{menu}': {source}")]
    Population {
        /// Label of the menu being opened.
        menu: String,
        /// The provider's error.
        #[source]
        source: anyhow::Error,
    },

    /// No menu with this id is attached to the bar.
    #[error("Unknown menu: {0:?}")]
    UnknownMenu(MenuId),
}

/// Errors reported by a screen service.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The display list could not be queried.
    #[error("Display enumeration unavailable: {0}")]
    EnumerationUnavailable(String),
}

/// Errors that can occur when parsing placement configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML configuration.
    #[error("Failed to parse menu configuration: {0}")]
    ParseError(String),

    /// Invalid hide policy name.
    #[error("Invalid hide policy: {0}")]
    InvalidHidePolicy(String),
}
