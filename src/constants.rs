// src/constants.rs
//! Defaults and fixed vocabulary of the numbering engine.

// ---------------------------------------------------------------------------
// Configuration defaults
// ---------------------------------------------------------------------------

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "Figure";

/// Separator placed between the levels of a multi-level number (`2.1`).
pub const DEFAULT_INFIX: &str = ".";

/// A flat `1, 2, 3` sequence.
pub const DEFAULT_LEVELS: usize = 1;

// ---------------------------------------------------------------------------
// Rendering vocabulary
// ---------------------------------------------------------------------------

/// Placed between the number and the caption text in the full view.
pub const CAPTION_SEPARATOR: &str = ": ";

/// Letters in the alphabetic level domains.
pub const ALPHABET_LEN: u32 = 26;

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per listing line, used to pre-allocate the listing.
pub const CHARS_PER_LISTING_LINE: usize = 64;
