// src/lib.rs
//! captioner library — stable figure and table numbers for documents.
//!
//! A [`Captioner`] hands out one number per object name, in registration
//! order, and renders it as a full caption, a citation or a bare number,
//! optionally as a hypertext or LaTeX cross-reference.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `CaptionError`, `ValidationError`
//! - **Configuration** — `CaptionerConfig`, `CaptionerOptions`
//! - **Numbering** — `SequenceNumber`, `LevelType`, `LevelValue`, `increment`
//! - **Registry** — `ObjectRegistry`, `CaptionEntry`
//! - **Formatting** — `render`, `render_listing`, `anchor_token`
//! - **Handles** — `Captioner`, `SharedCaptioner`, `CaptionRequest`
//! - **Scripts** — `CaptionCall`, `run_script`

pub mod captioner;
pub mod config;
mod constants;
pub mod error;
pub mod formatting;
pub mod numbering;
pub mod registry;
pub mod script;
pub mod shared;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, CaptionError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CaptionerConfig, CaptionerConfigBuilder, CaptionerOptions};

// --- Numbering ---
pub use crate::numbering::{increment, initial, SequenceNumber};
pub use crate::types::{LevelType, LevelValue};

// --- Registry ---
pub use crate::registry::{CaptionEntry, ObjectRegistry};

// --- Formatting ---
pub use crate::formatting::{anchor_token, render, render_listing};
pub use crate::types::{Diagnostic, DiagnosticLevel, DisplayMode, DisplaySelector, OutputFormat};

// --- Handles ---
pub use crate::captioner::{CaptionOutput, CaptionRequest, Captioner};
pub use crate::shared::SharedCaptioner;

// --- Scripts ---
pub use crate::script::{parse_script, run_script, CaptionCall, ScriptReport};
