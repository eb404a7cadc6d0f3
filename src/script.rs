// src/script.rs
//! Caption scripts: a JSON list of calls replayed against one captioner.
//!
//! Each call uses the loose legacy shape, where `display` may be a string or
//! `false` and `level` may be a number or `false`:
//!
//! ```json
//! [
//!   {"name": "iris", "caption": "Sepal widths"},
//!   {"name": "iris", "display": "cite"},
//!   {"name": "cars", "caption": "Stopping distance", "level": 1},
//!   {"name": "hidden", "display": false}
//! ]
//! ```

use crate::captioner::{CaptionOutput, CaptionRequest, Captioner};
use crate::error::CaptionError;
use crate::types::{Diagnostic, DisplaySelector};
use serde::{Deserialize, Serialize};

/// `display` as written in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayField {
    Flag(bool),
    Text(String),
}

impl From<&DisplayField> for DisplaySelector {
    fn from(field: &DisplayField) -> Self {
        match field {
            DisplayField::Flag(show) => DisplaySelector::from_flag(*show),
            DisplayField::Text(text) => DisplaySelector::parse(text),
        }
    }
}

/// `level` as written in a script. `false` and `0` both mean "deepest level";
/// `true` is the legacy spelling of level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelField {
    Flag(bool),
    Level(usize),
}

impl LevelField {
    fn as_level(self) -> Option<usize> {
        match self {
            LevelField::Flag(false) | LevelField::Level(0) => None,
            LevelField::Flag(true) => Some(1),
            LevelField::Level(level) => Some(level),
        }
    }
}

/// One call in a caption script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionCall {
    pub name: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub display: Option<DisplayField>,
    #[serde(default)]
    pub level: Option<LevelField>,
    #[serde(default)]
    pub cite: bool,
    #[serde(default)]
    pub num: bool,
}

impl From<&CaptionCall> for CaptionRequest {
    fn from(call: &CaptionCall) -> Self {
        CaptionRequest {
            name: call.name.clone(),
            caption: call.caption.clone(),
            display: call
                .display
                .as_ref()
                .map(DisplaySelector::from)
                .unwrap_or_default(),
            level: call.level.and_then(LevelField::as_level),
            cite: call.cite,
            num: call.num,
        }
    }
}

/// Parses a script from JSON text.
pub fn parse_script(json: &str) -> Result<Vec<CaptionCall>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default)]
pub struct ScriptReport {
    /// Visible output, one item per call that rendered something.
    pub lines: Vec<String>,
    /// Calls that rendered nothing (suppressed or unknown display mode).
    pub silent_calls: usize,
    /// Diagnostics from every call, in call order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScriptReport {
    fn record(&mut self, output: CaptionOutput) {
        self.diagnostics.extend(output.diagnostics().iter().cloned());
        if output.is_visible() {
            self.lines.push(output.into_text());
        } else {
            self.silent_calls += 1;
        }
    }
}

/// Replays `calls` in order. The first failing call aborts the run.
pub fn run_script(
    captioner: &mut Captioner,
    calls: &[CaptionCall],
) -> Result<ScriptReport, CaptionError> {
    let mut report = ScriptReport::default();
    for (position, call) in calls.iter().enumerate() {
        let output = captioner.caption(&call.into()).map_err(|e| {
            log::error!("Call #{} ('{}') failed: {}", position + 1, call.name, e);
            e
        })?;
        report.record(output);
    }
    log::info!(
        "Replayed {} call(s): {} registered, {} rendered",
        calls.len(),
        captioner.registry().len(),
        report.lines.len()
    );
    Ok(report)
}
