#![warn(missing_docs)]

//! Core library for cmdbar => See `cmdbar` crate.
//!
//! Contains screen geometry, display enumeration, the menu item model and the
//! popup placement algorithm.

/// Contains the [PlacementConfig](config::PlacementConfig) struct.
pub mod config;

/// Contains the error types.
pub mod error;

/// Contains geometry, direction and orientation types.
pub mod layout;

/// Contains the menu item model and popup metrics.
pub mod menu;

/// Contains the popup placement algorithm.
pub mod placement;

/// Contains display enumeration and usable-area resolution.
pub mod screen;
