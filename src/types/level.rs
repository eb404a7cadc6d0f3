// src/types/level.rs
//! Level kinds and the values a single level of a caption number can take.

use super::ValidationError;
use crate::constants::ALPHABET_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How one level of a caption number is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelType {
    /// 1, 2, 3, ...
    #[default]
    Numeric,
    /// a, b, ..., z, aa, ab, ...
    LowerAlpha,
    /// A, B, ..., Z, AA, AB, ...
    UpperAlpha,
}

impl LevelType {
    /// Short tag used in configuration files and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Numeric => "n",
            Self::LowerAlpha => "c",
            Self::UpperAlpha => "C",
        }
    }

    /// The first value of this level's domain.
    pub fn first(self) -> LevelValue {
        LevelValue::new(self, 1)
    }
}

impl FromStr for LevelType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case matters for the single-letter tags, so only the long forms are folded.
        match s {
            "n" => return Ok(Self::Numeric),
            "c" => return Ok(Self::LowerAlpha),
            "C" => return Ok(Self::UpperAlpha),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "number" => Ok(Self::Numeric),
            "lower" | "lower_alpha" | "lowercase" => Ok(Self::LowerAlpha),
            "upper" | "upper_alpha" | "uppercase" => Ok(Self::UpperAlpha),
            _ => Err(ValidationError::UnknownLevelType(s.to_string())),
        }
    }
}

impl fmt::Display for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One level of a caption number: its kind plus a 1-based position in the kind's domain.
///
/// Alphabetic values are stored by ordinal and only turned into letters when
/// rendered, so advancing past `z` is just `ordinal + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelValue {
    kind: LevelType,
    ordinal: u32,
}

impl LevelValue {
    pub(crate) fn new(kind: LevelType, ordinal: u32) -> Self {
        debug_assert!(ordinal >= 1, "level ordinals start at 1");
        Self { kind, ordinal }
    }

    pub fn kind(&self) -> LevelType {
        self.kind
    }

    /// Position in the domain, starting at 1 (`1`, `a` and `A` are all ordinal 1).
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// The next value in this level's domain.
    pub fn succ(&self) -> Self {
        Self::new(self.kind, self.ordinal + 1)
    }
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LevelType::Numeric => write!(f, "{}", self.ordinal),
            LevelType::LowerAlpha => f.write_str(&ordinal_to_letters(self.ordinal, b'a')),
            LevelType::UpperAlpha => f.write_str(&ordinal_to_letters(self.ordinal, b'A')),
        }
    }
}

/// Bijective base-26: 1 → a, 26 → z, 27 → aa, 702 → zz, 703 → aaa.
fn ordinal_to_letters(ordinal: u32, base: u8) -> String {
    let mut remaining = ordinal;
    let mut letters = Vec::new();
    while remaining > 0 {
        let digit = (remaining - 1) % ALPHABET_LEN;
        letters.push(base + digit as u8);
        remaining = (remaining - 1) / ALPHABET_LEN;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}
