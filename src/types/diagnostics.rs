// src/types/diagnostics.rs
//! Non-fatal diagnostics raised while serving a caption call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A diagnostic surfaced to the caller alongside the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// A legacy parameter was used; behavior is unchanged.
    Deprecation,
    /// The call could not produce visible output.
    Warning,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub(crate) fn deprecated_flag(flag: &str, replacement: &str) -> Self {
        Self::new(
            DiagnosticLevel::Deprecation,
            format!(
                "the `{}` flag is deprecated; use display = \"{}\" instead",
                flag, replacement
            ),
        )
    }

    pub(crate) fn invalid_display_mode(selector: &str) -> Self {
        Self::new(
            DiagnosticLevel::Warning,
            format!("invalid display mode `{}`; nothing rendered", selector),
        )
    }

    /// Forwards the diagnostic to the `log` facade.
    pub(crate) fn emit(&self) {
        log::warn!("{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.level, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}
