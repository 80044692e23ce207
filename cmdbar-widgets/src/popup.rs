// SPDX-License-Identifier: LGPL-3.0-only

//! The popup container owned by each [CommandMenu].

use crate::menu::CommandMenu;
use cmdbar_core::layout::{LayoutDirection, Orientation};
use cmdbar_core::menu::{estimate_popup_size, EntryExtent, MenuId, MenuItem};
use nalgebra::{Point2, Vector2};

/// Something menus can be attached to.
///
/// Whether a menu is top-level is decided from this capability when it is
/// attached, never by inspecting the container later.
pub trait MenuContainer {
    /// Whether menus attached here are nested submenus.
    fn is_popup_container(&self) -> bool;

    /// Layout orientation the attached menus should mirror.
    fn orientation(&self) -> Orientation;

    /// Reading direction the attached menus inherit.
    fn direction(&self) -> LayoutDirection;
}

/// One entry of a popup menu.
#[derive(Debug)]
pub enum PopupEntry {
    /// An action item.
    Item(MenuItem),
    /// A separator line between items.
    Separator,
    /// A nested pull-right menu.
    Submenu(Box<CommandMenu>),
}

impl PopupEntry {
    fn extent(&self) -> EntryExtent<'_> {
        match self {
            PopupEntry::Item(item) => EntryExtent::Item {
                label: &item.label,
                shortcut: item.shortcut.as_deref(),
                indicator: item.checked,
            },
            PopupEntry::Separator => EntryExtent::Separator,
            PopupEntry::Submenu(menu) => EntryExtent::Item {
                label: menu.label(),
                shortcut: None,
                indicator: true,
            },
        }
    }
}

/// The popup of a menu: its entries, preferred size and visibility.
#[derive(Debug, Default)]
pub struct PopupMenu {
    entries: Vec<PopupEntry>,
    visible: bool,
    location: Option<Point2<i32>>,
    measured_size: Option<Vector2<i32>>,
    direction: LayoutDirection,
}

impl PopupMenu {
    /// Create an empty, hidden popup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action item.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.add_item(item);
        self
    }

    /// Add a separator.
    pub fn with_separator(mut self) -> Self {
        self.add_separator();
        self
    }

    /// Add a nested submenu.
    pub fn with_submenu(mut self, menu: CommandMenu) -> Self {
        self.add_submenu(menu);
        self
    }

    /// Add an action item.
    pub fn add_item(&mut self, item: MenuItem) {
        self.entries.push(PopupEntry::Item(item));
    }

    /// Add a plain item with just a label.
    pub fn add(&mut self, label: impl Into<String>) {
        self.add_item(MenuItem::new(label));
    }

    /// Add a separator.
    pub fn add_separator(&mut self) {
        self.entries.push(PopupEntry::Separator);
    }

    /// Add a nested submenu, attaching it as a pull-right menu.
    pub fn add_submenu(&mut self, mut menu: CommandMenu) -> MenuId {
        menu.attach_to(&*self);
        let id = menu.id();
        self.entries.push(PopupEntry::Submenu(Box::new(menu)));
        id
    }

    /// Remove the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<PopupEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries, separators included.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the popup has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[PopupEntry] {
        &self.entries
    }

    /// Action items in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            PopupEntry::Item(item) => Some(item),
            _ => None,
        })
    }

    /// Report the size measured by the host, or `None` to fall back to the estimate.
    pub fn set_preferred_size(&mut self, size: Option<Vector2<i32>>) {
        self.measured_size = size;
    }

    /// Preferred size of the popup.
    pub fn preferred_size(&self) -> Vector2<i32> {
        self.measured_size
            .unwrap_or_else(|| estimate_popup_size(self.entries.iter().map(PopupEntry::extent)))
    }

    /// Reading direction of the popup, inherited by its submenus.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Set the reading direction of the popup and every nested submenu.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
        for entry in &mut self.entries {
            if let PopupEntry::Submenu(menu) = entry {
                menu.set_direction(direction);
            }
        }
    }

    /// Whether the popup is showing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Screen location the popup was last shown at.
    pub fn location(&self) -> Option<Point2<i32>> {
        self.location
    }

    /// Show or hide the popup.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn show_at(&mut self, location: Point2<i32>) {
        self.location = Some(location);
        self.visible = true;
    }

    /// Hide this popup and every nested submenu popup.
    pub(crate) fn hide_tree(&mut self) {
        self.visible = false;
        for entry in &mut self.entries {
            if let PopupEntry::Submenu(menu) = entry {
                menu.popup_mut().hide_tree();
            }
        }
    }

    /// Find a nested submenu by id.
    pub fn find_menu(&self, id: MenuId) -> Option<&CommandMenu> {
        self.entries.iter().find_map(|entry| match entry {
            PopupEntry::Submenu(menu) if menu.id() == id => Some(&**menu),
            PopupEntry::Submenu(menu) => menu.popup().find_menu(id),
            _ => None,
        })
    }

    /// Find a nested submenu by id (mutable).
    pub fn find_menu_mut(&mut self, id: MenuId) -> Option<&mut CommandMenu> {
        self.entries.iter_mut().find_map(|entry| match entry {
            PopupEntry::Submenu(menu) => {
                if menu.id() == id {
                    Some(&mut **menu)
                } else {
                    menu.popup_mut().find_menu_mut(id)
                }
            },
            _ => None,
        })
    }
}

impl MenuContainer for PopupMenu {
    fn is_popup_container(&self) -> bool {
        true
    }

    fn orientation(&self) -> Orientation {
        Orientation::Vertical
    }

    fn direction(&self) -> LayoutDirection {
        self.direction
    }
}
