// SPDX-License-Identifier: LGPL-3.0-only

//! Menu item model and popup metrics.

pub mod constants;
mod item;
mod metrics;

pub use item::{MenuId, MenuItem};
pub use metrics::{estimate_popup_size, EntryExtent};
