// SPDX-License-Identifier: LGPL-3.0-only

//! Screen-aware popup placement.
//!
//! [PopupPlacer] computes where a menu's popup opens relative to the menu's own
//! top-left corner. It prefers a side determined by nesting, orientation, text
//! direction and alignment, and flips to the opposite side only when the popup
//! would leave the usable screen area *and* the opposite side has strictly more
//! room.

use crate::config::PlacementConfig;
use crate::layout::{HorizontalAlignment, LayoutDirection, Orientation, ScreenRect};
use crate::screen::{ScreenLayout, ScreenService};
use nalgebra::{Point2, Vector2};

/// Whether a menu hangs off a bar or off another popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nesting {
    /// A top-level (pull-down) menu.
    Root,
    /// A submenu (pull-right) nested inside another popup.
    Submenu,
}

/// Inputs of a single placement computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    /// On-screen bounds of the menu item.
    pub menu_bounds: ScreenRect,
    /// Preferred size of the popup.
    pub popup_size: Vector2<i32>,
    /// Root menu or submenu.
    pub nesting: Nesting,
    /// Orientation of the owning bar.
    pub orientation: Orientation,
    /// Reading direction of the menu.
    pub direction: LayoutDirection,
    /// Horizontal alignment preference.
    pub alignment: HorizontalAlignment,
}

/// Computes popup offsets from the current screen geometry.
#[derive(Debug, Clone, Copy)]
pub struct PopupPlacer {
    config: PlacementConfig,
}

impl PopupPlacer {
    /// Create a placer using the offsets of `config`.
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    /// The configuration this placer reads its offsets from.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Compute the popup offset relative to the menu's top-left corner.
    ///
    /// Add the result to the menu's screen position to get the popup's screen position.
    pub fn compute_offset(&self, request: &PlacementRequest, screens: &dyn ScreenService) -> Vector2<i32> {
        let screen = ScreenLayout::resolve(screens, request.menu_bounds.origin);
        self.offset_within(request, &screen)
    }

    /// Compute the popup offset against an already resolved screen layout.
    pub fn offset_within(&self, request: &PlacementRequest, screen: &ScreenLayout) -> Vector2<i32> {
        let frame = Frame {
            usable: screen.usable,
            position: screen.position,
            menu: request.menu_bounds.size,
            popup: request.popup_size,
        };

        let offset = match request.nesting {
            Nesting::Submenu => {
                let offset = self.config.submenu_popup_offset.to_vector();
                Vector2::new(
                    submenu_x(&frame, offset.x, request.direction),
                    submenu_y(&frame, offset.y),
                )
            },
            Nesting::Root => {
                let offset = self.config.menu_popup_offset.to_vector();
                match request.orientation {
                    Orientation::Horizontal => Vector2::new(
                        root_horizontal_x(&frame, offset.x, request.direction, request.alignment),
                        root_horizontal_y(&frame, offset.y),
                    ),
                    // RTL is not mirrored for vertical bars.
                    Orientation::Vertical => Vector2::new(
                        root_vertical_x(&frame, offset.x),
                        root_vertical_y(&frame, offset.y),
                    ),
                }
            },
        };

        log::debug!(
            "Placed {:?} popup {}x{} at offset ({}, {})",
            request.nesting,
            request.popup_size.x,
            request.popup_size.y,
            offset.x,
            offset.y
        );
        offset
    }
}

impl Default for PopupPlacer {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}

/// Geometry shared by every placement rule, in the usable-area frame.
struct Frame {
    usable: ScreenRect,
    position: Point2<i32>,
    menu: Vector2<i32>,
    popup: Vector2<i32>,
}

impl Frame {
    fn overflows_right(&self, x: i32) -> bool {
        self.position.x + x + self.popup.x >= self.usable.right()
    }

    fn overflows_left(&self, x: i32) -> bool {
        self.position.x + x < self.usable.x()
    }

    fn overflows_bottom(&self, y: i32) -> bool {
        self.position.y + y + self.popup.y >= self.usable.bottom()
    }

    fn overflows_top(&self, y: i32) -> bool {
        self.position.y + y < self.usable.y()
    }

    /// Strictly more free space left of the menu than right of it.
    fn more_room_left(&self) -> bool {
        self.usable.width() - self.menu.x < 2 * (self.position.x - self.usable.x())
    }

    /// Strictly more free space right of the menu than left of it.
    fn more_room_right(&self) -> bool {
        self.usable.width() - self.menu.x > 2 * (self.position.x - self.usable.x())
    }

    /// Strictly more free space above the menu than below it.
    fn more_room_above(&self) -> bool {
        self.usable.height() - self.menu.y < 2 * (self.position.y - self.usable.y())
    }

    /// Strictly more free space below the menu than above it.
    fn more_room_below(&self) -> bool {
        self.usable.height() - self.menu.y > 2 * (self.position.y - self.usable.y())
    }
}

fn submenu_x(frame: &Frame, offset: i32, direction: LayoutDirection) -> i32 {
    let right_side = frame.menu.x + offset;
    let left_side = -offset - frame.popup.x;

    if direction.is_rtl() {
        if frame.overflows_left(left_side) && frame.more_room_right() {
            log::debug!("Submenu popup flipped to the right");
            return right_side;
        }
        left_side
    } else {
        if frame.overflows_right(right_side) && frame.more_room_left() {
            log::debug!("Submenu popup flipped to the left");
            return left_side;
        }
        right_side
    }
}

fn submenu_y(frame: &Frame, offset: i32) -> i32 {
    let top_aligned = offset;
    if frame.overflows_bottom(top_aligned) && frame.more_room_above() {
        log::debug!("Submenu popup flipped to bottom alignment");
        return frame.menu.y - offset - frame.popup.y;
    }
    top_aligned
}

fn root_horizontal_x(
    frame: &Frame,
    offset: i32,
    direction: LayoutDirection,
    alignment: HorizontalAlignment,
) -> i32 {
    if direction.is_rtl() {
        let right_aligned = frame.menu.x - offset - frame.popup.x;
        if frame.overflows_left(right_aligned) && frame.more_room_right() {
            log::debug!("RTL popup flipped to extend rightward");
            return offset;
        }
        return right_aligned;
    }

    match alignment {
        HorizontalAlignment::Left => {
            if frame.overflows_right(offset) && frame.more_room_left() {
                log::debug!("Left-aligned popup flipped to right alignment");
                return frame.menu.x - offset - frame.popup.x;
            }
            offset
        },
        HorizontalAlignment::Right => {
            let right_aligned = frame.menu.x + offset - frame.popup.x;
            if frame.overflows_left(right_aligned) {
                return frame.usable.x() - frame.position.x;
            }
            right_aligned
        },
    }
}

fn root_horizontal_y(frame: &Frame, offset: i32) -> i32 {
    let drop_down = frame.menu.y + offset;
    if frame.overflows_bottom(drop_down) && frame.more_room_above() {
        log::debug!("Popup flipped to drop up");
        return -offset - frame.popup.y;
    }
    drop_down
}

fn root_vertical_x(frame: &Frame, offset: i32) -> i32 {
    let extend_left = -offset - frame.popup.x;
    if frame.overflows_left(extend_left) && frame.more_room_right() {
        log::debug!("Vertical bar popup flipped to the right");
        return frame.menu.x + offset;
    }
    extend_left
}

fn root_vertical_y(frame: &Frame, offset: i32) -> i32 {
    let drop_up = -offset - frame.popup.y;
    if frame.overflows_top(drop_up) && frame.more_room_below() {
        log::debug!("Vertical bar popup flipped to drop down");
        return frame.menu.y + offset;
    }
    drop_up
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Insets;
    use crate::screen::{Display, StaticScreens};

    fn request(menu: ScreenRect, popup: (i32, i32)) -> PlacementRequest {
        PlacementRequest {
            menu_bounds: menu,
            popup_size: Vector2::new(popup.0, popup.1),
            nesting: Nesting::Root,
            orientation: Orientation::Horizontal,
            direction: LayoutDirection::Ltr,
            alignment: HorizontalAlignment::Left,
        }
    }

    fn placer() -> PopupPlacer {
        PopupPlacer::new(
            PlacementConfig::default()
                .with_menu_popup_offset(1, 2)
                .with_submenu_popup_offset(-3, -5),
        )
    }

    fn screen(width: i32, height: i32) -> StaticScreens {
        StaticScreens::single(ScreenRect::new(0, 0, width, height))
    }

    #[test]
    fn test_root_drop_down_on_full_hd() {
        let default_placer = PopupPlacer::new(PlacementConfig::default());
        let req = request(ScreenRect::new(10, 10, 100, 30), (200, 400));
        let offset = default_placer.compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset, Vector2::new(0, 30));

        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset, Vector2::new(1, 32));
    }

    #[test]
    fn test_root_narrow_screen_keeps_left_alignment_when_left_is_tighter() {
        // Overflows on the right, but 10px of room on the left versus 140px on the right.
        let req = request(ScreenRect::new(10, 10, 100, 30), (245, 400));
        let offset = placer().compute_offset(&req, &screen(250, 1080));
        assert_eq!(offset.x, 1);
    }

    #[test]
    fn test_root_flips_to_right_alignment_near_right_edge() {
        let req = request(ScreenRect::new(1800, 0, 100, 30), (200, 400));
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, 100 - 1 - 200);
    }

    #[test]
    fn test_root_right_alignment_clamps_to_left_edge() {
        let mut req = request(ScreenRect::new(20, 0, 100, 30), (300, 400));
        req.alignment = HorizontalAlignment::Right;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, -20);

        req.menu_bounds = ScreenRect::new(500, 0, 100, 30);
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, 100 + 1 - 300);
    }

    #[test]
    fn test_root_drops_up_near_bottom_edge() {
        let req = request(ScreenRect::new(10, 1000, 100, 30), (200, 400));
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.y, -2 - 400);
    }

    #[test]
    fn test_root_rtl_extends_leftward_and_flips_at_left_edge() {
        let mut req = request(ScreenRect::new(800, 0, 100, 30), (200, 400));
        req.direction = LayoutDirection::Rtl;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, 100 - 1 - 200);

        req.menu_bounds = ScreenRect::new(10, 0, 100, 30);
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, 1);
    }

    #[test]
    fn test_root_vertical_extends_left_and_drops_up() {
        let mut req = request(ScreenRect::new(1800, 600, 40, 40), (200, 300));
        req.orientation = Orientation::Vertical;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset, Vector2::new(-1 - 200, -2 - 300));
    }

    #[test]
    fn test_root_vertical_flips_at_top_left_corner() {
        let mut req = request(ScreenRect::new(0, 10, 40, 40), (200, 300));
        req.orientation = Orientation::Vertical;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset, Vector2::new(40 + 1, 40 + 2));
    }

    #[test]
    fn test_root_vertical_ignores_rtl() {
        let mut req = request(ScreenRect::new(0, 10, 40, 40), (200, 300));
        req.orientation = Orientation::Vertical;
        let ltr = placer().compute_offset(&req, &screen(1920, 1080));
        req.direction = LayoutDirection::Rtl;
        let rtl = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(ltr, rtl);
    }

    #[test]
    fn test_submenu_uses_submenu_offsets_only() {
        let mut req = request(ScreenRect::new(100, 100, 150, 24), (200, 300));
        req.nesting = Nesting::Submenu;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset, Vector2::new(150 - 3, -5));
    }

    #[test]
    fn test_submenu_flips_left_and_bottom_aligns_near_corner() {
        let mut req = request(ScreenRect::new(1700, 900, 150, 24), (200, 300));
        req.nesting = Nesting::Submenu;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset, Vector2::new(3 - 200, 24 + 5 - 300));
    }

    #[test]
    fn test_submenu_rtl_prefers_left_and_flips_right() {
        let mut req = request(ScreenRect::new(1000, 100, 150, 24), (200, 300));
        req.nesting = Nesting::Submenu;
        req.direction = LayoutDirection::Rtl;
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, 3 - 200);

        req.menu_bounds = ScreenRect::new(50, 100, 150, 24);
        let offset = placer().compute_offset(&req, &screen(1920, 1080));
        assert_eq!(offset.x, 150 - 3);
    }

    #[test]
    fn test_overflow_without_more_room_does_not_flip() {
        // Popup wider than either side: stays on the preferred side.
        let mut req = request(ScreenRect::new(400, 100, 100, 24), (700, 300));
        req.nesting = Nesting::Submenu;
        let offset = placer().compute_offset(&req, &screen(1000, 1080));
        assert_eq!(offset.x, 100 - 3);
    }

    #[test]
    fn test_secondary_monitor_with_taskbar() {
        let screens = StaticScreens::new()
            .with_display(Display::raster(1, ScreenRect::new(0, 0, 1920, 1080)), Insets::default())
            .with_display(
                Display::raster(2, ScreenRect::new(1920, 0, 1280, 1024)),
                Insets::new(0, 0, 48, 0),
            );
        // Bottom of the second monitor minus the taskbar is 976.
        let req = request(ScreenRect::new(2000, 700, 100, 30), (200, 300));
        let offset = placer().compute_offset(&req, &screens);
        assert_eq!(offset.y, -2 - 300);

        // The same menu on the taller first monitor still drops down.
        let req = request(ScreenRect::new(80, 700, 100, 30), (200, 300));
        let offset = placer().compute_offset(&req, &screens);
        assert_eq!(offset.y, 30 + 2);
    }

    #[test]
    fn test_compute_offset_is_idempotent() {
        let req = request(ScreenRect::new(1800, 1000, 100, 30), (200, 400));
        let screens = screen(1920, 1080);
        let placer = placer();
        assert_eq!(
            placer.compute_offset(&req, &screens),
            placer.compute_offset(&req, &screens)
        );
    }
}
