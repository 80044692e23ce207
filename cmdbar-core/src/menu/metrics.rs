// SPDX-License-Identifier: LGPL-3.0-only

use super::constants::*;
use nalgebra::Vector2;

/// What the size estimate needs to know about one popup entry.
#[derive(Debug, Clone, Copy)]
pub enum EntryExtent<'a> {
    /// A labelled entry, optionally with a shortcut and a checkmark/submenu indicator.
    Item {
        /// Entry label.
        label: &'a str,
        /// Shortcut text, right-aligned.
        shortcut: Option<&'a str>,
        /// Whether a checkmark or submenu arrow is drawn.
        indicator: bool,
    },
    /// A separator line.
    Separator,
}

/// Estimate the preferred size of a popup from its entries.
///
/// Uses character-width estimates rather than shaped text, so hosts with a real
/// text measurer should report the measured size instead.
pub fn estimate_popup_size<'a>(entries: impl IntoIterator<Item = EntryExtent<'a>>) -> Vector2<i32> {
    let mut count = 0usize;
    let mut max_total_width: f64 = MIN_WIDTH;

    for entry in entries {
        count += 1;
        if let EntryExtent::Item {
            label,
            shortcut,
            indicator,
        } = entry
        {
            let text_width = label.chars().count() as f64 * TEXT_CHAR_WIDTH;
            let shortcut_width = shortcut
                .map(|s| s.chars().count() as f64 * SHORTCUT_CHAR_WIDTH)
                .unwrap_or(0.0);

            let mut total_width = text_width
                + TEXT_PADDING * 2.0
                + MIN_TEXT_SHORTCUT_GAP
                + shortcut_width
                + SHORTCUT_RIGHT_PADDING;
            if indicator {
                total_width += CHECKMARK_ARROW_WIDTH;
            }

            max_total_width = max_total_width.max(total_width);
        }
    }

    let height = (count as f64 * ITEM_HEIGHT) + PADDING * 2.0;
    let width = max_total_width.min(MAX_WIDTH);
    Vector2::new(width.ceil() as i32, height.ceil() as i32)
}
