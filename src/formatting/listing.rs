// src/formatting/listing.rs
//! "List of figures" style listings of a whole registry.

use super::render::render;
use crate::config::CaptionerConfig;
use crate::constants::CHARS_PER_LISTING_LINE;
use crate::registry::CaptionEntry;
use crate::types::DisplayMode;

/// Renders one plain full-caption line per entry, in registration order.
///
/// Link markup is never emitted here: a listing is a table of contents, not a
/// place to define anchors a second time.
pub fn render_listing<'a>(
    entries: impl IntoIterator<Item = &'a CaptionEntry>,
    config: &CaptionerConfig,
) -> String {
    let plain = config.without_links();
    let entries = entries.into_iter();
    let mut listing = String::with_capacity(entries.size_hint().0 * CHARS_PER_LISTING_LINE);
    for entry in entries {
        listing.push_str(&render(entry, DisplayMode::Full, &plain));
        listing.push('\n');
    }
    listing
}
