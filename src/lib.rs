#![warn(missing_docs)]

//! Drop-down command menus with lazy content and screen-aware popup placement.

pub use nalgebra as math;

pub use cmdbar_core as core;
#[cfg(feature = "services")]
pub use cmdbar_services as services;
pub use cmdbar_widgets as widgets;

/// A "prelude" for users of cmdbar.
///
/// Importing this module brings into scope the most common types
/// needed to build and drive a command bar.
///
/// ```rust
/// use cmdbar::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use crate::core::config::{HidePolicy, PlacementConfig, PopupOffset};
    pub use crate::core::error::{ConfigError, MenuError, ScreenError};
    pub use crate::core::layout::*;
    pub use crate::core::menu::{MenuId, MenuItem};
    pub use crate::core::placement::{Nesting, PlacementRequest, PopupPlacer};
    pub use crate::core::screen::{Display, DisplayKind, ScreenService, StaticScreens};

    // Math
    pub use nalgebra::{Point2, Vector2};

    // Widgets
    pub use crate::widgets::command_bar::{CommandBar, HideOrigin, HideOutcome};
    pub use crate::widgets::content::{ContentProvider, Population};
    pub use crate::widgets::hide::HideCoordinator;
    pub use crate::widgets::menu::{CommandMenu, MenuAttachment, OpenOutcome};
    pub use crate::widgets::popup::{MenuContainer, PopupEntry, PopupMenu};
}
