// SPDX-License-Identifier: LGPL-3.0-only

//! A bar of [CommandMenu]s.
//!
//! The bar owns its menus, the [PopupPlacer] used to position their popups and the
//! [HideCoordinator] that defers submenu hiding. The host forwards menu events to
//! [CommandBar::open_menu], [CommandBar::deselect_menu] and
//! [CommandBar::clear_selected_path], and drives pending hides with
//! [CommandBar::tick] or by awaiting [CommandBar::hide_timer].

use crate::hide::HideCoordinator;
use crate::menu::{CommandMenu, OpenOutcome};
use crate::popup::MenuContainer;
use cmdbar_core::config::{HidePolicy, PlacementConfig};
use cmdbar_core::error::MenuError;
use cmdbar_core::layout::{LayoutDirection, Orientation};
use cmdbar_core::menu::MenuId;
use cmdbar_core::placement::PopupPlacer;
use cmdbar_core::screen::ScreenService;
use std::time::Instant;

/// Who asked for a menu to be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideOrigin {
    /// The user moved away from the menu. May be deferred.
    Deselected,
    /// The selected path is being cleared programmatically. Always immediate.
    ClearPath,
}

/// What happened to a menu asked to hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideOutcome {
    /// The popup was hidden.
    Hidden,
    /// The popup stays up until the pending hide fires or is cancelled.
    Deferred,
}

/// A horizontal or vertical bar of command menus.
#[derive(Debug)]
pub struct CommandBar {
    orientation: Orientation,
    direction: LayoutDirection,
    menus: Vec<CommandMenu>,
    config: PlacementConfig,
    placer: PopupPlacer,
    hide: HideCoordinator,
}

impl CommandBar {
    /// Create an empty horizontal bar with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PlacementConfig::default())
    }

    /// Create an empty horizontal bar with the given configuration.
    pub fn with_config(config: PlacementConfig) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            direction: LayoutDirection::Ltr,
            menus: Vec::new(),
            config,
            placer: PopupPlacer::new(config),
            hide: HideCoordinator::new(config.hide_delay()),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Replace the configuration. A pending hide is kept.
    pub fn set_config(&mut self, config: PlacementConfig) {
        self.config = config;
        self.placer = PopupPlacer::new(config);
        self.hide.set_delay(config.hide_delay());
    }

    /// Set the bar orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Set the bar orientation and pass it on to every menu on the bar.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        for menu in &mut self.menus {
            menu.set_orientation(orientation);
        }
    }

    /// Set the reading direction.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.set_direction(direction);
        self
    }

    /// Reading direction of the bar, inherited by every menu and submenu on it.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Set the reading direction and pass it on to every menu and submenu on the bar.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
        for menu in &mut self.menus {
            menu.set_direction(direction);
        }
    }

    /// Add a menu to the bar.
    pub fn with_menu(mut self, menu: CommandMenu) -> Self {
        self.add_menu(menu);
        self
    }

    /// Add a menu to the bar, attaching it as a top-level menu.
    pub fn add_menu(&mut self, mut menu: CommandMenu) -> MenuId {
        menu.attach_to(&*self);
        let id = menu.id();
        self.menus.push(menu);
        id
    }

    /// Remove a top-level menu, hiding its popup first.
    pub fn remove_menu(&mut self, id: MenuId) -> Option<CommandMenu> {
        let index = self.menus.iter().position(|menu| menu.id() == id)?;
        let mut menu = self.menus.remove(index);
        menu.set_popup_visible_immediately(false);
        menu.detach();
        if self.hide.pending() == Some(id) {
            self.hide.cancel();
        }
        Some(menu)
    }

    /// Top-level menus in bar order.
    pub fn menus(&self) -> &[CommandMenu] {
        &self.menus
    }

    /// Find a menu by id, searching submenus too.
    pub fn menu(&self, id: MenuId) -> Option<&CommandMenu> {
        self.menus.iter().find_map(|menu| {
            if menu.id() == id {
                Some(menu)
            } else {
                menu.popup().find_menu(id)
            }
        })
    }

    /// Find a menu by id, searching submenus too (mutable).
    pub fn menu_mut(&mut self, id: MenuId) -> Option<&mut CommandMenu> {
        find_menu_mut(&mut self.menus, id)
    }

    /// Populate, place and show a menu's popup.
    ///
    /// A pending hide for another menu fires right away; one for this menu is
    /// cancelled so the popup simply stays up.
    pub fn open_menu(
        &mut self,
        id: MenuId,
        screens: &dyn ScreenService,
    ) -> Result<OpenOutcome, MenuError> {
        if let Some(pending) = self.hide.cancel_for(id) {
            hide_now(&mut self.menus, pending);
        }
        let menu = find_menu_mut(&mut self.menus, id).ok_or(MenuError::UnknownMenu(id))?;
        menu.open(&self.placer, screens)
    }

    /// Hide a menu's popup, deferring it when allowed.
    ///
    /// Only submenus deselected by the user under [HidePolicy::Delayed] are
    /// deferred. Top-level menus and [HideOrigin::ClearPath] always hide at once.
    pub fn deselect_menu(
        &mut self,
        id: MenuId,
        origin: HideOrigin,
        now: Instant,
    ) -> Result<HideOutcome, MenuError> {
        let delayed = self.config.hide_policy == HidePolicy::Delayed;
        let menu = find_menu_mut(&mut self.menus, id).ok_or(MenuError::UnknownMenu(id))?;

        if delayed && origin == HideOrigin::Deselected && !menu.is_top_level() && menu.is_popup_visible()
        {
            if let Some(previous) = self.hide.schedule(id, now) {
                hide_now(&mut self.menus, previous);
            }
            return Ok(HideOutcome::Deferred);
        }

        menu.set_popup_visible_immediately(false);
        if self.hide.pending() == Some(id) {
            self.hide.cancel();
        }
        Ok(HideOutcome::Hidden)
    }

    /// Hide every open popup on the bar and drop any pending hide.
    pub fn clear_selected_path(&mut self) {
        self.hide.cancel();
        for menu in &mut self.menus {
            menu.set_popup_visible_immediately(false);
        }
        log::debug!("Cleared selected menu path");
    }

    /// Hide the bar's menus. Same as [clear_selected_path](Self::clear_selected_path).
    pub fn hide_menu(&mut self) {
        self.clear_selected_path();
    }

    /// Fire the pending hide if its deadline has passed, returning the hidden menu.
    pub fn tick(&mut self, now: Instant) -> Option<MenuId> {
        let id = self.hide.poll(now)?;
        hide_now(&mut self.menus, id);
        Some(id)
    }

    /// The bar's hide coordinator.
    pub fn hide_coordinator(&self) -> &HideCoordinator {
        &self.hide
    }

    /// A timer for the pending hide. Await it, then call [tick](Self::tick).
    pub fn hide_timer(&self) -> Option<smol::Timer> {
        self.hide.timer()
    }
}

impl Default for CommandBar {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuContainer for CommandBar {
    fn is_popup_container(&self) -> bool {
        false
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn direction(&self) -> LayoutDirection {
        self.direction
    }
}

fn find_menu_mut(menus: &mut [CommandMenu], id: MenuId) -> Option<&mut CommandMenu> {
    menus.iter_mut().find_map(|menu| {
        if menu.id() == id {
            Some(menu)
        } else {
            menu.popup_mut().find_menu_mut(id)
        }
    })
}

fn hide_now(menus: &mut [CommandMenu], id: MenuId) {
    match find_menu_mut(menus, id) {
        Some(menu) => {
            log::debug!("Hiding menu '{}'", menu.label());
            menu.set_popup_visible_immediately(false);
        },
        None => log::warn!("Pending hide for unknown menu {:?}", id),
    }
}
