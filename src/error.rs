// src/error.rs
//! Error types for caption numbering and the command-line front end.
//!
//! Only two things can go wrong inside the engine: the configuration is
//! invalid, or a call asks for a bump at a level the configuration does not
//! have. Everything else (unknown display modes, legacy flags) is reported
//! as a [`Diagnostic`](crate::types::Diagnostic) and never fails the call.

use thiserror::Error;

/// Errors raised by the numbering engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptionError {
    #[error("Invalid captioner configuration: {0}")]
    InvalidConfig(#[from] crate::types::ValidationError),

    #[error("Invalid level {requested}: captioner is configured with {levels} level(s)")]
    InvalidLevel { requested: usize, levels: usize },
}

/// Errors raised by the `captioner` binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Caption(#[from] CaptionError),

    #[error("Script file not found at {path}: {source}")]
    ScriptNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Options file not found at {path}: {source}")]
    ConfigNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError {
            message: "JSON serialization failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logging(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[test]
    fn test_error_messages() {
        let err = CaptionError::InvalidLevel {
            requested: 3,
            levels: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid level 3: captioner is configured with 2 level(s)"
        );

        let err: CaptionError = ValidationError::ZeroLevels(0).into();
        assert_eq!(
            err.to_string(),
            "Invalid captioner configuration: Level count must be at least 1, got 0"
        );
    }

    #[test]
    fn test_missing_files_name_their_role() {
        let missing = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let script = AppError::ScriptNotFound {
            path: "calls.json".to_string(),
            source: missing(),
        };
        let options = AppError::ConfigNotFound {
            path: "options.json".to_string(),
            source: missing(),
        };
        assert_eq!(script.to_string(), "Script file not found at calls.json: gone");
        assert_eq!(options.to_string(), "Options file not found at options.json: gone");
    }
}
