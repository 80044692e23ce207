// SPDX-License-Identifier: LGPL-3.0-only

//! Menu identifiers and the action item model.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static NEXT_MENU_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier for a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub u32);

impl MenuId {
    /// Create a menu ID with the given value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Allocate a fresh, process-unique menu ID.
    pub fn next() -> Self {
        Self(NEXT_MENU_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An action entry of a popup menu.
#[derive(Clone)]
pub struct MenuItem {
    /// Display label for the menu item
    pub label: String,
    /// Optional keyboard shortcut text (e.g., "Ctrl+N")
    pub shortcut: Option<String>,
    /// Whether the menu item is enabled/clickable
    pub enabled: bool,
    /// Whether the menu item is checked (for toggle items)
    pub checked: bool,
    /// Callback function to execute when the menu item is activated
    pub action: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl MenuItem {
    /// Create a new menu item with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shortcut: None,
            enabled: true,
            checked: false,
            action: None,
        }
    }

    /// Set the keyboard shortcut
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Set enabled state
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set checked state
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set action callback
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Run the action if the item is enabled. Returns whether anything ran.
    pub fn activate(&self) -> bool {
        match (&self.action, self.enabled) {
            (Some(action), true) => {
                action();
                true
            },
            _ => false,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("shortcut", &self.shortcut)
            .field("enabled", &self.enabled)
            .field("checked", &self.checked)
            .field("action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_menu_ids_are_unique() {
        let a = MenuId::next();
        let b = MenuId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_disabled_item_does_not_activate() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let item = MenuItem::new("Save")
            .with_shortcut("Ctrl+S")
            .with_action(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        assert!(item.activate());
        assert!(!item.clone().with_enabled(false).activate());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
