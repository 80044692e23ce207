// SPDX-License-Identifier: LGPL-3.0-only

//! A drop-down/pull-right menu for use inside a [CommandBar](crate::command_bar::CommandBar).
//!
//! Compared to a plain menu button it adds two things:
//! - lazy population through a [ContentProvider], run right before the popup shows,
//! - popup alignment control: the popup can line up with the menu's right edge
//!   instead of its left edge.

use crate::content::{self, ContentProvider, Population};
use crate::popup::{MenuContainer, PopupMenu};
use cmdbar_core::error::MenuError;
use cmdbar_core::layout::{
    HorizontalAlignment, LayoutDirection, Orientation, ScreenRect, VerticalAlignment,
};
use cmdbar_core::menu::MenuId;
use cmdbar_core::placement::{Nesting, PlacementRequest, PopupPlacer};
use cmdbar_core::screen::ScreenService;
use nalgebra::{Point2, Vector2};
use std::fmt;

/// What a menu is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuAttachment {
    /// Not attached to anything yet.
    #[default]
    Detached,
    /// Attached to a bar or another non-popup container.
    Bar,
    /// Nested inside another menu's popup.
    Popup,
}

/// Result of an open attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The popup is showing.
    Shown {
        /// Popup offset from the menu's top-left corner.
        offset: Vector2<i32>,
        /// Popup top-left corner on screen.
        location: Point2<i32>,
    },
    /// The popup had no entries, so nothing was shown.
    Cancelled,
}

/// A menu whose popup is built lazily and placed with the screen layout in mind.
pub struct CommandMenu {
    id: MenuId,
    label: String,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    orientation: Orientation,
    direction: LayoutDirection,
    attachment: MenuAttachment,
    bounds: Option<ScreenRect>,
    opaque: bool,
    popup: PopupMenu,
    legacy_creator: Option<Box<dyn ContentProvider>>,
    content_provider: Option<Box<dyn ContentProvider>>,
}

impl fmt::Debug for CommandMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandMenu")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("horizontal_alignment", &self.horizontal_alignment)
            .field("orientation", &self.orientation)
            .field("direction", &self.direction)
            .field("attachment", &self.attachment)
            .field("bounds", &self.bounds)
            .field("popup", &self.popup)
            .field("legacy_creator", &self.legacy_creator.is_some())
            .field("content_provider", &self.content_provider.is_some())
            .finish()
    }
}

impl CommandMenu {
    /// Create a detached menu with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: MenuId::next(),
            label: label.into(),
            horizontal_alignment: HorizontalAlignment::Left,
            vertical_alignment: VerticalAlignment::Bottom,
            orientation: Orientation::Horizontal,
            direction: LayoutDirection::Ltr,
            attachment: MenuAttachment::Detached,
            bounds: None,
            opaque: true,
            popup: PopupMenu::new(),
            legacy_creator: None,
            content_provider: None,
        }
    }

    /// Unique id of this menu.
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// The menu's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Change the menu's label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set the content provider that builds the popup before each open.
    pub fn with_content_provider(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.set_content_provider(provider);
        self
    }

    /// Set the content provider that builds the popup before each open.
    pub fn set_content_provider(&mut self, provider: impl ContentProvider + 'static) {
        self.content_provider = Some(Box::new(provider));
    }

    /// Remove the content provider.
    pub fn clear_content_provider(&mut self) {
        self.content_provider = None;
    }

    /// Whether a content provider is set.
    pub fn has_content_provider(&self) -> bool {
        self.content_provider.is_some()
    }

    /// Set the legacy menu creator, which runs before the content provider.
    #[deprecated(note = "use `set_content_provider` instead")]
    pub fn set_menu_creator(&mut self, creator: impl ContentProvider + 'static) {
        self.legacy_creator = Some(Box::new(creator));
    }

    /// Whether a legacy menu creator is set.
    pub fn has_menu_creator(&self) -> bool {
        self.legacy_creator.is_some()
    }

    /// Set the horizontal popup alignment preference.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Horizontal popup alignment preference.
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// Set the horizontal popup alignment preference.
    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.horizontal_alignment = alignment;
    }

    /// Vertical popup alignment preference.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Set the vertical popup alignment preference.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
    }

    /// Set the reading direction.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.set_direction(direction);
        self
    }

    /// Reading direction.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Set the reading direction of this menu and every submenu in its popup.
    ///
    /// Attaching the menu to a container overwrites it with the container's direction.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
        self.popup.set_direction(direction);
    }

    /// Orientation mirrored from the owning bar.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            log::debug!(
                "Menu '{}' orientation {:?} -> {:?}",
                self.label,
                self.orientation,
                orientation
            );
            self.orientation = orientation;
        }
    }

    /// Menus can be laid out horizontally.
    pub fn supports_horizontal_orientation(&self) -> bool {
        true
    }

    /// Menus can be laid out vertically.
    pub fn supports_vertical_orientation(&self) -> bool {
        true
    }

    /// Attach this menu to a container.
    ///
    /// Popup containers make it a submenu; anything else makes it top-level.
    /// The menu also takes over the container's orientation and reading direction.
    pub fn attach_to(&mut self, container: &dyn MenuContainer) {
        self.attachment = if container.is_popup_container() {
            MenuAttachment::Popup
        } else {
            MenuAttachment::Bar
        };
        self.set_orientation(container.orientation());
        self.set_direction(container.direction());
    }

    /// Detach this menu from its container.
    pub fn detach(&mut self) {
        self.attachment = MenuAttachment::Detached;
    }

    /// What this menu is attached to.
    pub fn attachment(&self) -> MenuAttachment {
        self.attachment
    }

    /// Whether this is a top-level menu: detached, or attached to a non-popup container.
    pub fn is_top_level(&self) -> bool {
        self.attachment != MenuAttachment::Popup
    }

    /// Top-level menus paint no background of their own so they blend into the bar.
    pub fn is_opaque(&self) -> bool {
        if self.is_top_level() {
            false
        } else {
            self.opaque
        }
    }

    /// The configured opacity, ignoring the top-level override.
    pub fn original_is_opaque(&self) -> bool {
        self.opaque
    }

    /// Set the configured opacity.
    pub fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
    }

    /// Record where the host laid the menu out on screen.
    pub fn realize(&mut self, bounds: ScreenRect) {
        self.bounds = Some(bounds);
    }

    /// Forget the on-screen bounds, e.g. when the bar is hidden.
    pub fn unrealize(&mut self) {
        self.bounds = None;
    }

    /// On-screen bounds, if realized.
    pub fn bounds(&self) -> Option<ScreenRect> {
        self.bounds
    }

    /// The popup.
    pub fn popup(&self) -> &PopupMenu {
        &self.popup
    }

    /// The popup (mutable).
    pub fn popup_mut(&mut self) -> &mut PopupMenu {
        &mut self.popup
    }

    /// Whether the popup is showing.
    pub fn is_popup_visible(&self) -> bool {
        self.popup.is_visible()
    }

    /// Run the content providers against the popup.
    pub fn populate(&mut self) -> Result<Population, MenuError> {
        content::populate(
            &self.label,
            self.legacy_creator.as_deref_mut(),
            self.content_provider.as_deref_mut(),
            &mut self.popup,
        )
    }

    /// Describe the current state as a placement request.
    pub fn placement_request(&self) -> Result<PlacementRequest, MenuError> {
        let menu_bounds = self
            .bounds
            .ok_or_else(|| MenuError::NotRealized(self.label.clone()))?;
        Ok(PlacementRequest {
            menu_bounds,
            popup_size: self.popup.preferred_size(),
            nesting: if self.is_top_level() {
                Nesting::Root
            } else {
                Nesting::Submenu
            },
            orientation: self.orientation,
            direction: self.direction,
            alignment: self.horizontal_alignment,
        })
    }

    /// Offset of the popup from the menu's top-left corner.
    pub fn popup_offset(
        &self,
        placer: &PopupPlacer,
        screens: &dyn ScreenService,
    ) -> Result<Vector2<i32>, MenuError> {
        let request = self.placement_request()?;
        Ok(placer.compute_offset(&request, screens))
    }

    /// Populate the popup, place it and show it.
    ///
    /// Returns [OpenOutcome::Cancelled] when population leaves the popup empty.
    /// On any error the popup and its submenus are hidden.
    pub fn open(
        &mut self,
        placer: &PopupPlacer,
        screens: &dyn ScreenService,
    ) -> Result<OpenOutcome, MenuError> {
        let population = self.populate();
        if !matches!(population, Ok(Population::Ready)) || self.popup.is_empty() {
            self.popup.hide_tree();
            return population.map(|_| OpenOutcome::Cancelled);
        }

        let request = match self.placement_request() {
            Ok(request) => request,
            Err(e) => {
                self.popup.hide_tree();
                return Err(e);
            },
        };
        let offset = placer.compute_offset(&request, screens);
        let location = request.menu_bounds.translate(offset).origin;
        self.popup.show_at(location);
        log::debug!("Opened menu '{}' at {:?}", self.label, location);

        Ok(OpenOutcome::Shown { offset, location })
    }

    /// Show or hide the popup at its last location. Showing an empty popup is ignored.
    pub fn set_popup_visible(&mut self, visible: bool) {
        if visible && self.popup.is_empty() {
            return;
        }
        self.set_popup_visible_immediately(visible);
    }

    /// Show or hide the popup without any checks. Hiding also hides nested submenus.
    pub fn set_popup_visible_immediately(&mut self, visible: bool) {
        if visible {
            self.popup.set_visible(true);
        } else {
            self.popup.hide_tree();
        }
    }
}

impl MenuContainer for CommandMenu {
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

#[cfg(test)]
mod tests {
    use super::*;
    use cmdbar_core::config::PlacementConfig;
    use cmdbar_core::screen::StaticScreens;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Bar;

    impl MenuContainer for Bar {
        fn is_popup_container(&self) -> bool {
            false
        }

        fn orientation(&self) -> Orientation {
            Orientation::Vertical
        }

        fn direction(&self) -> LayoutDirection {
            LayoutDirection::Ltr
        }
    }

    fn realized(label: &str) -> CommandMenu {
        let mut menu = CommandMenu::new(label);
        menu.attach_to(&Bar);
        menu.set_orientation(Orientation::Horizontal);
        menu.realize(ScreenRect::new(10, 10, 100, 30));
        menu
    }

    #[test]
    fn test_detached_menu_is_top_level_and_transparent() {
        let mut menu = CommandMenu::new("File");
        assert!(menu.is_top_level());
        assert!(!menu.is_opaque());
        assert!(menu.original_is_opaque());

        let popup = PopupMenu::new();
        menu.attach_to(&popup);
        assert!(!menu.is_top_level());
        assert!(menu.is_opaque());
    }

    #[test]
    fn test_attach_mirrors_container_orientation() {
        let mut menu = CommandMenu::new("View");
        menu.attach_to(&Bar);
        assert_eq!(menu.attachment(), MenuAttachment::Bar);
        assert_eq!(menu.orientation(), Orientation::Vertical);
        menu.detach();
        assert_eq!(menu.attachment(), MenuAttachment::Detached);
    }

    #[test]
    fn test_empty_provider_never_shows_popup() {
        let mut menu = realized("Empty").with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
            popup.clear();
            Ok(())
        });

        let outcome = menu.open(&PopupPlacer::default(), &StaticScreens::default()).unwrap();
        assert_eq!(outcome, OpenOutcome::Cancelled);
        assert_eq!(menu.popup().entry_count(), 0);
        assert!(!menu.is_popup_visible());

        menu.set_popup_visible(true);
        assert!(!menu.is_popup_visible());
    }

    #[test]
    fn test_open_places_popup_below_menu() {
        let mut menu = realized("File").with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
            popup.clear();
            popup.add("New");
            popup.add("Open");
            Ok(())
        });
        menu.popup_mut().set_preferred_size(Some(Vector2::new(200, 400)));

        let outcome = menu.open(&PopupPlacer::default(), &StaticScreens::default()).unwrap();
        assert_eq!(
            outcome,
            OpenOutcome::Shown {
                offset: Vector2::new(0, 30),
                location: Point2::new(10, 40),
            }
        );
        assert!(menu.is_popup_visible());
        assert_eq!(menu.popup().location(), Some(Point2::new(10, 40)));
    }

    #[test]
    fn test_provider_runs_on_every_open() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut menu = realized("Recent").with_content_provider(move |popup: &mut PopupMenu| -> anyhow::Result<()> {
            counter.set(counter.get() + 1);
            popup.clear();
            popup.add(format!("item {}", counter.get()));
            Ok(())
        });
        let placer = PopupPlacer::new(PlacementConfig::default());
        let screens = StaticScreens::default();

        menu.open(&placer, &screens).unwrap();
        menu.set_popup_visible(false);
        menu.open(&placer, &screens).unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(menu.popup().entry_count(), 1);
        assert_eq!(menu.popup().items().next().map(|i| i.label.as_str()), Some("item 2"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_creator_runs_before_provider() {
        let order = Rc::new(Cell::new(0));
        let legacy_order = order.clone();
        let mut menu = realized("Mixed");
        menu.set_menu_creator(move |popup: &mut PopupMenu| -> anyhow::Result<()> {
            legacy_order.set(1);
            popup.clear();
            popup.add("legacy");
            Ok(())
        });
        let provider_order = order.clone();
        menu.set_content_provider(move |popup: &mut PopupMenu| -> anyhow::Result<()> {
            assert_eq!(provider_order.get(), 1);
            provider_order.set(2);
            popup.add("modern");
            Ok(())
        });

        menu.open(&PopupPlacer::default(), &StaticScreens::default()).unwrap();
        assert_eq!(order.get(), 2);
        assert_eq!(menu.popup().entry_count(), 2);
    }

    #[test]
    fn test_open_unrealized_menu_is_an_error() {
        let mut menu = CommandMenu::new("Ghost").with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
            popup.add("item");
            Ok(())
        });
        let err = menu
            .open(&PopupPlacer::default(), &StaticScreens::default())
            .unwrap_err();
        assert!(matches!(err, MenuError::NotRealized(ref label) if label == "Ghost"));
        assert!(!menu.is_popup_visible());
    }

    #[test]
    fn test_failed_provider_leaves_popup_hidden() {
        let mut menu = realized("Broken").with_content_provider(|_: &mut PopupMenu| -> anyhow::Result<()> {
            anyhow::bail!("no data")
        });
        let result = menu.open(&PopupPlacer::default(), &StaticScreens::default());
        assert!(matches!(result, Err(MenuError::Population { .. })));
        assert!(!menu.is_popup_visible());
    }

    #[test]
    fn test_failed_reopen_hides_visible_popup() {
        let fail = Rc::new(Cell::new(false));
        let should_fail = fail.clone();
        let mut menu = realized("Flaky").with_content_provider(move |popup: &mut PopupMenu| -> anyhow::Result<()> {
            popup.clear();
            popup.add("partial");
            if should_fail.get() {
                anyhow::bail!("lost connection");
            }
            popup.add("complete");
            Ok(())
        });
        let placer = PopupPlacer::default();
        let screens = StaticScreens::default();

        assert!(matches!(menu.open(&placer, &screens), Ok(OpenOutcome::Shown { .. })));
        assert!(menu.is_popup_visible());

        fail.set(true);
        assert!(matches!(menu.open(&placer, &screens), Err(MenuError::Population { .. })));
        assert!(!menu.is_popup_visible());
    }

    #[test]
    fn test_attach_inherits_container_direction() {
        let mut parent = CommandMenu::new("Edit").with_direction(LayoutDirection::Rtl);
        let id = parent.popup_mut().add_submenu(CommandMenu::new("Insert"));
        assert_eq!(parent.popup().find_menu(id).map(|m| m.direction()), Some(LayoutDirection::Rtl));

        parent.attach_to(&Bar);
        assert_eq!(parent.direction(), LayoutDirection::Ltr);
        assert_eq!(parent.popup().find_menu(id).map(|m| m.direction()), Some(LayoutDirection::Ltr));
    }

    #[test]
    fn test_submenu_request_uses_submenu_nesting() {
        let mut parent = CommandMenu::new("File");
        let id = parent.popup_mut().add_submenu(CommandMenu::new("Recent"));
        let submenu = parent.popup_mut().find_menu_mut(id).unwrap();
        submenu.realize(ScreenRect::new(100, 100, 150, 24));
        let request = submenu.placement_request().unwrap();
        assert_eq!(request.nesting, Nesting::Submenu);
    }
}
