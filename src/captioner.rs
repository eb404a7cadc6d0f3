// src/captioner.rs
//! The captioner handle: registration and rendering behind one call.
//!
//! ```
//! use captioner::{Captioner, CaptionerConfig};
//!
//! let mut figures = Captioner::new(CaptionerConfig::default());
//! let full = figures.full("scatter", "Height against weight").unwrap();
//! assert_eq!(full.text(), "Figure 1: Height against weight");
//! assert_eq!(figures.cite("scatter").unwrap().text(), "Figure 1");
//! ```

use crate::config::CaptionerConfig;
use crate::error::CaptionError;
use crate::formatting::{render, render_listing};
use crate::registry::{CaptionEntry, ObjectRegistry};
use crate::types::{Diagnostic, DisplayMode, DisplaySelector};
use std::fmt;

/// One call against a captioner.
///
/// `cite` and `num` are the legacy boolean selectors. They are resolved here
/// and never reach the registry or the formatter: `cite` wins over `num`,
/// and either wins over `display`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionRequest {
    pub name: String,
    pub caption: String,
    pub display: DisplaySelector,
    pub level: Option<usize>,
    pub cite: bool,
    pub num: bool,
}

impl CaptionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn display(mut self, display: impl Into<DisplaySelector>) -> Self {
        self.display = display.into();
        self
    }

    /// Selects the view by its legacy name (`"full"`, `"c"`, ...).
    pub fn display_str(mut self, selector: &str) -> Self {
        self.display = DisplaySelector::parse(selector);
        self
    }

    /// Bump level for a new registration. `0` means "not given", as with a `false` level.
    pub fn level(mut self, level: usize) -> Self {
        self.level = (level > 0).then_some(level);
        self
    }

    #[deprecated(note = "use `display(DisplayMode::Cite)`")]
    pub fn cite_flag(mut self, cite: bool) -> Self {
        self.cite = cite;
        self
    }

    #[deprecated(note = "use `display(DisplayMode::Num)`")]
    pub fn num_flag(mut self, num: bool) -> Self {
        self.num = num;
        self
    }

    /// Resolves the legacy flags into a single selector, collecting deprecation notices.
    fn effective_display(&self, diagnostics: &mut Vec<Diagnostic>) -> DisplaySelector {
        if self.cite {
            diagnostics.push(Diagnostic::deprecated_flag("cite", "cite"));
            return DisplayMode::Cite.into();
        }
        if self.num {
            diagnostics.push(Diagnostic::deprecated_flag("num", "num"));
            return DisplayMode::Num.into();
        }
        self.display.clone()
    }
}

/// What a caption call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionOutput {
    text: String,
    visible: bool,
    diagnostics: Vec<Diagnostic>,
}

impl CaptionOutput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// `false` for suppressed calls and unknown display modes.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for CaptionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A numbering sequence: one prefix, one registry, one configuration.
#[derive(Debug, Clone)]
pub struct Captioner {
    config: CaptionerConfig,
    registry: ObjectRegistry,
}

impl Captioner {
    pub fn new(config: CaptionerConfig) -> Self {
        Self {
            config,
            registry: ObjectRegistry::new(),
        }
    }

    pub fn config(&self) -> &CaptionerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Looks up a registered entry without registering anything.
    pub fn get(&self, name: &str) -> Option<&CaptionEntry> {
        self.registry.get(name)
    }

    /// Registers or looks up `request.name` and renders the requested view.
    ///
    /// Fails only with `InvalidLevel`, in which case nothing is registered.
    /// An unknown display mode still registers the object; the output is then
    /// invisible and carries a warning.
    pub fn caption(&mut self, request: &CaptionRequest) -> Result<CaptionOutput, CaptionError> {
        let mut diagnostics = Vec::new();
        let display = request.effective_display(&mut diagnostics);

        let entry = self.registry.resolve(
            &request.name,
            &request.caption,
            request.level,
            &self.config,
        )?;

        let (text, visible) = match display {
            DisplaySelector::Mode(DisplayMode::Suppressed) => (String::new(), false),
            DisplaySelector::Mode(mode) => (render(entry, mode, &self.config), true),
            DisplaySelector::Unrecognized(selector) => {
                diagnostics.push(
                    Diagnostic::invalid_display_mode(&selector)
                        .with_context(format!("object '{}'", request.name)),
                );
                (String::new(), false)
            }
        };

        for diagnostic in &diagnostics {
            diagnostic.emit();
        }

        Ok(CaptionOutput {
            text,
            visible,
            diagnostics,
        })
    }

    /// `Figure 1: caption`, registering `name` if needed.
    pub fn full(&mut self, name: &str, caption: &str) -> Result<CaptionOutput, CaptionError> {
        self.caption(&CaptionRequest::new(name).caption(caption))
    }

    /// `Figure 1`, registering `name` if this is a forward citation.
    pub fn cite(&mut self, name: &str) -> Result<CaptionOutput, CaptionError> {
        self.caption(&CaptionRequest::new(name).display(DisplayMode::Cite))
    }

    /// `1`, registering `name` if needed.
    pub fn num(&mut self, name: &str) -> Result<CaptionOutput, CaptionError> {
        self.caption(&CaptionRequest::new(name).display(DisplayMode::Num))
    }

    /// Registers `name` (or fills in its caption) without rendering anything.
    pub fn register(&mut self, name: &str, caption: &str) -> Result<(), CaptionError> {
        self.caption(
            &CaptionRequest::new(name)
                .caption(caption)
                .display(DisplayMode::Suppressed),
        )
        .map(|_| ())
    }

    /// Registers `name` with a bump at `level` and renders the full view.
    pub fn bump(
        &mut self,
        name: &str,
        caption: &str,
        level: usize,
    ) -> Result<CaptionOutput, CaptionError> {
        self.caption(&CaptionRequest::new(name).caption(caption).level(level))
    }

    /// Every registered caption, one plain line each, in registration order.
    pub fn listing(&self) -> String {
        render_listing(self.registry.entries(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiagnosticLevel;

    #[test]
    fn test_level_zero_means_default() {
        assert_eq!(CaptionRequest::new("x").level(0).level, None);
        assert_eq!(CaptionRequest::new("x").level(2).level, Some(2));
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_flags_take_precedence() {
        let mut captioner = Captioner::new(CaptionerConfig::default());
        captioner.full("a", "Alpha").unwrap();

        let cited = captioner
            .caption(
                &CaptionRequest::new("a")
                    .display(DisplayMode::Num)
                    .cite_flag(true)
                    .num_flag(true),
            )
            .unwrap();
        assert_eq!(cited.text(), "Figure 1");
        assert_eq!(cited.diagnostics().len(), 1);
        assert_eq!(cited.diagnostics()[0].level, DiagnosticLevel::Deprecation);

        let numbered = captioner
            .caption(&CaptionRequest::new("a").num_flag(true))
            .unwrap();
        assert_eq!(numbered.text(), "1");
    }

    #[test]
    fn test_suppressed_has_no_diagnostics() {
        let mut captioner = Captioner::new(CaptionerConfig::default());
        let out = captioner
            .caption(&CaptionRequest::new("a").display_str("false"))
            .unwrap();
        assert!(!out.is_visible());
        assert!(out.diagnostics().is_empty());
        assert!(captioner.get("a").is_some());
    }

    #[test]
    fn test_unknown_display_warns_and_registers() {
        let mut captioner = Captioner::new(CaptionerConfig::default());
        let out = captioner
            .caption(&CaptionRequest::new("a").caption("Alpha").display_str("caption"))
            .unwrap();
        assert_eq!(out.text(), "");
        assert!(!out.is_visible());
        assert_eq!(out.diagnostics()[0].level, DiagnosticLevel::Warning);
        assert_eq!(captioner.get("a").unwrap().caption, "Alpha");
    }
}
