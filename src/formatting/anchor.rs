// src/formatting/anchor.rs
//! Link targets for cross-references.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile whitespace regex - this is a bug in the code")
});

/// Builds the anchor token for a caption: prefix and number with all whitespace removed.
///
/// `("Figure ", "1.2")` becomes `Figure1.2`.
pub fn anchor_token(prefix: &str, display_number: &str) -> String {
    let joined = format!("{}{}", prefix, display_number);
    WHITESPACE.replace_all(&joined, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_strips_whitespace() {
        assert_eq!(anchor_token("Figure ", "1.2"), "Figure1.2");
        assert_eq!(anchor_token("Supplementary  Table\t", "A"), "SupplementaryTableA");
        assert_eq!(anchor_token("", "3"), "3");
    }
}
