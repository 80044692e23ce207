// SPDX-License-Identifier: LGPL-3.0-only

mod direction;
mod geometry;
mod orientation;

pub use direction::LayoutDirection;
pub use geometry::{Insets, ScreenRect};
pub use orientation::{HorizontalAlignment, Orientation, VerticalAlignment};
