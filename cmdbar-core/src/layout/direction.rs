// SPDX-License-Identifier: LGPL-3.0-only

/// Reading direction of a menu and its popup.
///
/// Placement mirrors its horizontal decisions for right-to-left (RTL) menus,
/// so a pull-right submenu becomes a pull-left one in Arabic or Hebrew UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right (LTR) layout direction.
    ///
    /// This is the default for most languages (English, Spanish, etc.).
    #[default]
    Ltr,

    /// Right-to-left (RTL) layout direction.
    ///
    /// Used for languages like Arabic, Hebrew, and Urdu.
    Rtl,

    /// Automatic direction detection.
    ///
    /// Currently resolves to LTR.
    Auto,
}

impl LayoutDirection {
    /// Check if this is RTL direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self.resolve(), LayoutDirection::Rtl)
    }

    /// Check if this is LTR direction.
    pub fn is_ltr(&self) -> bool {
        matches!(self.resolve(), LayoutDirection::Ltr)
    }

    /// Get the resolved direction (Auto becomes Ltr for now).
    pub fn resolve(&self) -> LayoutDirection {
        match self {
            LayoutDirection::Auto => LayoutDirection::Ltr, // TODO: Detect from locale
            other => *other,
        }
    }
}
