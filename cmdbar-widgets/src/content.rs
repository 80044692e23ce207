// SPDX-License-Identifier: LGPL-3.0-only

//! Lazy popup population.
//!
//! A [ContentProvider] builds a menu's popup right before it is shown, so menus
//! that are never opened never pay for their contents. Providers run on every
//! open: clear the popup first when rebuilding it, or it grows each time.
//!
//! ```rust
//! use cmdbar_widgets::menu::CommandMenu;
//! use cmdbar_widgets::popup::PopupMenu;
//!
//! let menu = CommandMenu::new("Recent").with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
//!     popup.clear();
//!     popup.add("notes.txt");
//!     popup.add("todo.md");
//!     Ok(())
//! });
//! ```

use crate::popup::PopupMenu;
use cmdbar_core::error::MenuError;

/// Builds or refreshes a popup's entries before it is shown.
pub trait ContentProvider {
    /// Fill `popup`. Errors abort the open and reach the caller unchanged.
    fn populate(&mut self, popup: &mut PopupMenu) -> anyhow::Result<()>;
}

impl<F> ContentProvider for F
where
    F: FnMut(&mut PopupMenu) -> anyhow::Result<()>,
{
    fn populate(&mut self, popup: &mut PopupMenu) -> anyhow::Result<()> {
        self(popup)
    }
}

/// Result of running a menu's content providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    /// The popup has entries and may be shown.
    Ready,
    /// A provider left the popup empty; the open is cancelled.
    Empty,
}

/// Run the legacy creator, then the content provider, stopping as soon as one
/// leaves the popup empty.
pub(crate) fn populate(
    label: &str,
    legacy: Option<&mut (dyn ContentProvider + 'static)>,
    provider: Option<&mut (dyn ContentProvider + 'static)>,
    popup: &mut PopupMenu,
) -> Result<Population, MenuError> {
    for step in [legacy, provider].into_iter().flatten() {
        step.populate(popup).map_err(|source| MenuError::Population {
            menu: label.to_string(),
            source,
        })?;
        if popup.is_empty() {
            log::debug!("Menu '{}' has no entries after population, not opening", label);
            return Ok(Population::Empty);
        }
    }
    Ok(Population::Ready)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_empty_legacy_result_skips_provider() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut legacy = |_: &mut PopupMenu| -> anyhow::Result<()> { Ok(()) };
        let mut provider = move |popup: &mut PopupMenu| -> anyhow::Result<()> {
            counter.set(counter.get() + 1);
            popup.add("never shown");
            Ok(())
        };
        let mut popup = PopupMenu::new();

        let result = populate("File", Some(&mut legacy), Some(&mut provider), &mut popup).unwrap();
        assert_eq!(result, Population::Empty);
        assert_eq!(calls.get(), 0);
        assert!(popup.is_empty());
    }

    #[test]
    fn test_provider_error_is_propagated() {
        let mut provider = |popup: &mut PopupMenu| -> anyhow::Result<()> {
            popup.add("partial");
            Err(anyhow::anyhow!("backend offline"))
        };
        let mut popup = PopupMenu::new();

        let err = populate("Tools", None, Some(&mut provider), &mut popup).unwrap_err();
        assert!(matches!(err, MenuError::Population { ref menu, .. } if menu == "Tools"));
        assert!(err.to_string().contains("backend offline"));
    }

    #[test]
    fn test_no_providers_is_ready() {
        let mut popup = PopupMenu::new();
        popup.add("static");
        assert_eq!(populate("Edit", None, None, &mut popup).unwrap(), Population::Ready);
    }
}
