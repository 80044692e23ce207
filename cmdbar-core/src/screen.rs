// SPDX-License-Identifier: LGPL-3.0-only

//! Display enumeration and usable-area resolution.
//!
//! The host toolkit implements [ScreenService] on top of its platform layer.
//! [StaticScreens] is an in-memory implementation for headless hosts and tests.

use crate::error::ScreenError;
use crate::layout::{Insets, ScreenRect};
use nalgebra::{Point2, Vector2};

/// Kind of graphics device a display belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    /// A physical monitor.
    RasterScreen,
    /// A printer device.
    Printer,
    /// An off-screen image buffer.
    ImageBuffer,
}

/// A display device attached to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    /// Platform identifier of the display.
    pub id: u32,
    /// Full device bounds in the virtual screen space.
    pub bounds: ScreenRect,
    /// What kind of device this is.
    pub kind: DisplayKind,
}

impl Display {
    /// Create a raster screen with the given id and bounds.
    pub fn raster(id: u32, bounds: ScreenRect) -> Self {
        Self {
            id,
            bounds,
            kind: DisplayKind::RasterScreen,
        }
    }
}

/// Access to the attached displays.
pub trait ScreenService {
    /// Enumerate all attached display devices.
    fn displays(&self) -> Result<Vec<Display>, ScreenError>;

    /// The display used when no enumerated display contains the menu.
    fn default_display(&self) -> Display;

    /// Space reserved by system UI on the given display.
    fn insets(&self, display: &Display) -> Insets;
}

/// The screen area a popup may occupy, resolved for one menu position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The display the menu sits on.
    pub display: Display,
    /// Full device bounds.
    pub device_bounds: ScreenRect,
    /// Device bounds shrunk by the reserved insets.
    ///
    /// The origin stays at the device origin; the menu position is shifted into
    /// the same frame instead (see [ScreenLayout::position]).
    pub usable: ScreenRect,
    /// Menu position with the top/left insets removed.
    pub position: Point2<i32>,
}

impl ScreenLayout {
    /// Resolve the screen layout for a menu whose top-left corner is at `position`.
    ///
    /// Picks the first raster screen containing `position`, falling back to the
    /// default display when none matches or enumeration fails.
    pub fn resolve(screens: &dyn ScreenService, position: Point2<i32>) -> Self {
        let display = match screens.displays() {
            Ok(displays) => displays
                .into_iter()
                .filter(|display| display.kind == DisplayKind::RasterScreen)
                .find(|display| display.bounds.contains(position)),
            Err(e) => {
                log::warn!("{}; using the default display", e);
                None
            },
        }
        .unwrap_or_else(|| screens.default_display());

        let insets = screens.insets(&display);
        let device_bounds = display.bounds;
        let usable = ScreenRect::from_parts(
            device_bounds.origin,
            Vector2::new(
                device_bounds.width() - insets.horizontal(),
                device_bounds.height() - insets.vertical(),
            ),
        );
        let position = Point2::new(
            position.x - insets.left.abs(),
            position.y - insets.top.abs(),
        );

        log::debug!(
            "Resolved display {} for menu at {:?}: usable {:?}",
            display.id,
            position,
            usable
        );

        Self {
            display,
            device_bounds,
            usable,
            position,
        }
    }
}

/// A fixed set of displays, for hosts without a live display server and for tests.
#[derive(Debug, Clone)]
pub struct StaticScreens {
    displays: Vec<(Display, Insets)>,
    default_index: usize,
    available: bool,
}

impl StaticScreens {
    /// Create a screen set with a single raster display.
    pub fn single(bounds: ScreenRect) -> Self {
        Self {
            displays: vec![(Display::raster(0, bounds), Insets::default())],
            default_index: 0,
            available: true,
        }
    }

    /// Create an empty screen set; add displays with [StaticScreens::with_display].
    ///
    /// The first display added becomes the default.
    pub fn new() -> Self {
        Self {
            displays: Vec::new(),
            default_index: 0,
            available: true,
        }
    }

    /// Add a display with its reserved insets.
    pub fn with_display(mut self, display: Display, insets: Insets) -> Self {
        self.displays.push((display, insets));
        self
    }

    /// Set the insets of the display with the given id.
    pub fn with_insets(mut self, id: u32, insets: Insets) -> Self {
        if let Some(entry) = self.displays.iter_mut().find(|(d, _)| d.id == id) {
            entry.1 = insets;
        }
        self
    }

    /// Choose which display is the default, by id.
    pub fn with_default(mut self, id: u32) -> Self {
        if let Some(index) = self.displays.iter().position(|(d, _)| d.id == id) {
            self.default_index = index;
        }
        self
    }

    /// Make enumeration fail, as on platforms without multi-display support.
    pub fn without_enumeration(mut self) -> Self {
        self.available = false;
        self
    }
}

impl Default for StaticScreens {
    fn default() -> Self {
        Self::single(ScreenRect::new(0, 0, 1920, 1080))
    }
}

impl ScreenService for StaticScreens {
    fn displays(&self) -> Result<Vec<Display>, ScreenError> {
        if !self.available {
            return Err(ScreenError::EnumerationUnavailable(
                "static screen set has enumeration disabled".to_string(),
            ));
        }
        Ok(self.displays.iter().map(|(display, _)| *display).collect())
    }

    fn default_display(&self) -> Display {
        self.displays
            .get(self.default_index)
            .map(|(display, _)| *display)
            .unwrap_or_else(|| Display::raster(0, ScreenRect::new(0, 0, 1920, 1080)))
    }

    fn insets(&self, display: &Display) -> Insets {
        self.displays
            .iter()
            .find(|(d, _)| d.id == display.id)
            .map(|(_, insets)| *insets)
            .unwrap_or_default()
    }
}
