// src/types/display.rs
//! Display selectors and host output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which view of a caption to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// `Figure 1: caption`
    #[default]
    Full,
    /// `Figure 1`
    Cite,
    /// `1`
    Num,
    /// Register or fill in the caption, render nothing.
    Suppressed,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Cite => "cite",
            Self::Num => "num",
            Self::Suppressed => "suppressed",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display request as it arrives at the API boundary.
///
/// Unrecognized selectors are not an error: the call still registers and
/// reports a warning, so the raw text is carried through to the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySelector {
    Mode(DisplayMode),
    Unrecognized(String),
}

impl DisplaySelector {
    /// Parses the legacy textual selectors, including their one-letter abbreviations.
    pub fn parse(selector: &str) -> Self {
        match selector.trim() {
            "full" | "f" => Self::Mode(DisplayMode::Full),
            "cite" | "c" => Self::Mode(DisplayMode::Cite),
            "num" | "n" => Self::Mode(DisplayMode::Num),
            "suppressed" => Self::Mode(DisplayMode::Suppressed),
            other if other.eq_ignore_ascii_case("false") => Self::Mode(DisplayMode::Suppressed),
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The legacy boolean form: `false` suppresses output, `true` is the default view.
    pub fn from_flag(show: bool) -> Self {
        if show {
            Self::Mode(DisplayMode::Full)
        } else {
            Self::Mode(DisplayMode::Suppressed)
        }
    }
}

impl Default for DisplaySelector {
    fn default() -> Self {
        Self::Mode(DisplayMode::Full)
    }
}

impl From<DisplayMode> for DisplaySelector {
    fn from(mode: DisplayMode) -> Self {
        Self::Mode(mode)
    }
}

/// The kind of document the host renderer is producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// No link markup is ever produced.
    #[default]
    Plain,
    /// Hypertext: anchors and `href` links.
    Html,
    /// Fixed layout: `\label` / `\ref` cross-reference directives.
    Latex,
}

impl OutputFormat {
    /// Maps a host renderer tag onto a format. Unknown or empty tags are plain text.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "html" | "html4" | "html5" | "markdown_html" => Self::Html,
            "latex" | "tex" | "pdf" | "beamer" => Self::Latex,
            _ => Self::Plain,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}
