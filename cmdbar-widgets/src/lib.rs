// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! Menu widgets for cmdbar => See the `cmdbar` crate for more.
//!
//! Contains the [CommandMenu](menu::CommandMenu) drop-down menu, its
//! [PopupMenu](popup::PopupMenu), lazy population through
//! [ContentProvider](content::ContentProvider) and the
//! [CommandBar](command_bar::CommandBar) that ties them together.

/// Contains the [command_bar::CommandBar] container.
pub mod command_bar;

/// Contains the [content::ContentProvider] trait.
pub mod content;

/// Contains the [hide::HideCoordinator] for delayed submenu hiding.
pub mod hide;

/// Contains the [menu::CommandMenu] widget.
pub mod menu;

/// Contains the [popup::PopupMenu] container.
pub mod popup;
