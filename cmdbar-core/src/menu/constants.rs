//! Menu metrics constants
//!
//! Centralized constants used to estimate popup sizes and submenu overlap.

/// Height of each menu entry in pixels
pub const ITEM_HEIGHT: f64 = 24.0;

/// Top and bottom padding for the popup
pub const PADDING: f64 = 4.0;

/// Left and right padding for text in menu items
pub const TEXT_PADDING: f64 = 10.0;

/// Right padding for shortcuts
pub const SHORTCUT_RIGHT_PADDING: f64 = 12.0;

/// Minimum gap between text and shortcut to avoid overlap
pub const MIN_TEXT_SHORTCUT_GAP: f64 = 40.0;

/// Minimum width of the popup
pub const MIN_WIDTH: f64 = 120.0;

/// Maximum width of the popup
pub const MAX_WIDTH: f64 = 400.0;

/// Estimated pixels per character for regular text
pub const TEXT_CHAR_WIDTH: f64 = 7.0;

/// Estimated pixels per character for shortcut text (slightly wider for monospace shortcuts)
pub const SHORTCUT_CHAR_WIDTH: f64 = 8.0;

/// Width reserved for checkmark or submenu indicator
pub const CHECKMARK_ARROW_WIDTH: f64 = 20.0;

/// Top padding offset for items (from popup top)
pub const ITEM_TOP_PADDING: i32 = 4;

/// Small overlap between parent and child popup
pub const CHILD_POPUP_OVERLAP: i32 = 2;

/// Delay before a hovered submenu opens, in milliseconds
pub const OPEN_DELAY_MS: u64 = 400;

/// Extra time a deselected submenu stays visible under the delayed-hide policy, in milliseconds
pub const HIDE_GRACE_MS: u64 = 300;
