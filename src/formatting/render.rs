// src/formatting/render.rs
//! Renders a registered entry into one of the display views.
//!
//! Three link styles exist. Plain text is used unless links are enabled and
//! the host format supports them. In hypertext the full view drops an anchor
//! in front of the caption and the other views link to it. In fixed-layout
//! output the host numbers captions itself, so the full view emits a
//! `\label` next to the caption text and the other views emit `\ref`.

use super::anchor::anchor_token;
use crate::config::CaptionerConfig;
use crate::constants::CAPTION_SEPARATOR;
use crate::registry::CaptionEntry;
use crate::types::{DisplayMode, OutputFormat};

/// Renders `entry` in `mode`. `Suppressed` renders as the empty string.
pub fn render(entry: &CaptionEntry, mode: DisplayMode, config: &CaptionerConfig) -> String {
    let view = CaptionView::new(entry, config);
    let style = if config.links_enabled() {
        config.output_format()
    } else {
        OutputFormat::Plain
    };

    match (mode, style) {
        (DisplayMode::Suppressed, _) => String::new(),
        (DisplayMode::Full, OutputFormat::Plain) => view.full(),
        (DisplayMode::Cite, OutputFormat::Plain) => view.cite(),
        (DisplayMode::Num, OutputFormat::Plain) => view.number.clone(),
        (DisplayMode::Full, OutputFormat::Html) => {
            format!(r#"<a name="{}"></a>{}"#, view.anchor, view.full())
        }
        (DisplayMode::Cite, OutputFormat::Html) => {
            format!(r##"<a href="#{}">{}</a>"##, view.anchor, view.cite())
        }
        (DisplayMode::Num, OutputFormat::Html) => {
            format!(r##"<a href="#{}">{}</a>"##, view.anchor, view.number)
        }
        (DisplayMode::Full, OutputFormat::Latex) => {
            format!(r"{}\label{{{}}}", entry.caption, view.anchor)
        }
        (DisplayMode::Cite, OutputFormat::Latex) => {
            format!(r"{}\ref{{{}}}", config.prefix(), view.anchor)
        }
        (DisplayMode::Num, OutputFormat::Latex) => format!(r"\ref{{{}}}", view.anchor),
    }
}

/// The pieces every view is assembled from.
struct CaptionView<'a> {
    prefix: &'a str,
    caption: &'a str,
    number: String,
    anchor: String,
}

impl<'a> CaptionView<'a> {
    fn new(entry: &'a CaptionEntry, config: &'a CaptionerConfig) -> Self {
        let number = entry.number.join(config.infix());
        let anchor = anchor_token(config.prefix(), &number);
        Self {
            prefix: config.prefix(),
            caption: &entry.caption,
            number,
            anchor,
        }
    }

    fn cite(&self) -> String {
        format!("{}{}", self.prefix, self.number)
    }

    fn full(&self) -> String {
        format!("{}{}{}", self.cite(), CAPTION_SEPARATOR, self.caption)
    }
}
