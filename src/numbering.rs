// src/numbering.rs
//! Type-aware sequence numbers and the increment/bump algebra over them.
//!
//! A [`SequenceNumber`] has one [`LevelValue`] per configured level. Levels
//! are addressed 1-based: level 1 is the outermost (chapter) level and level
//! `levels` the deepest. Bumping at level `k` keeps levels `1..k`, advances
//! level `k` and resets everything deeper:
//!
//! ```text
//! [1, 3]  --bump 2-->  [1, 4]
//! [1, 3]  --bump 1-->  [2, 1]
//! [1, c]  --bump 1-->  [2, a]
//! ```

use crate::error::CaptionError;
use crate::types::{LevelType, LevelValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A caption number: one value per level, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceNumber(Vec<LevelValue>);

impl SequenceNumber {
    pub fn levels(&self) -> &[LevelValue] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Renders the levels joined by `infix` (`2.1`, `3-b`).
    pub fn join(&self, infix: &str) -> String {
        self.0
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(infix)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(crate::constants::DEFAULT_INFIX))
    }
}

/// The first number of a fresh sequence: every level at the start of its domain.
pub fn initial(types: &[LevelType]) -> SequenceNumber {
    SequenceNumber(types.iter().map(|kind| kind.first()).collect())
}

/// Checks that `bump_level` addresses a level of a `levels`-deep number.
pub fn check_level(bump_level: usize, levels: usize) -> Result<(), CaptionError> {
    if bump_level == 0 || bump_level > levels {
        return Err(CaptionError::InvalidLevel {
            requested: bump_level,
            levels,
        });
    }
    Ok(())
}

/// Computes the number that follows `previous` when bumping at `bump_level`.
pub fn increment(
    previous: &SequenceNumber,
    bump_level: usize,
) -> Result<SequenceNumber, CaptionError> {
    check_level(bump_level, previous.depth())?;

    let bump_index = bump_level - 1;
    let next = previous
        .0
        .iter()
        .enumerate()
        .map(|(index, value)| match index.cmp(&bump_index) {
            std::cmp::Ordering::Less => *value,
            std::cmp::Ordering::Equal => value.succ(),
            std::cmp::Ordering::Greater => value.kind().first(),
        })
        .collect();

    Ok(SequenceNumber(next))
}
