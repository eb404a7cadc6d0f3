use thiserror::Error;

mod diagnostics;
mod display;
mod level;

pub use diagnostics::*;
pub use display::*;
pub use level::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown level type: {0} (expected one of n, c, C)")]
    UnknownLevelType(String),

    #[error("Level count must be at least 1, got {0}")]
    ZeroLevels(usize),

    #[error("Malformed captioner options: {0}")]
    MalformedOptions(String),
}
