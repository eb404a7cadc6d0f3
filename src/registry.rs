// src/registry.rs
//! The registry of captioned objects.
//!
//! Objects are keyed by name and kept in registration order. The first call
//! naming an object fixes its number for the rest of the registry's life;
//! later calls may only fill in a caption that was left empty.
//!
//! # Invariant
//!
//! For every `i > 0`, `entries[i].number` is `increment(entries[i - 1].number, b)`
//! for some bump level `b`. Numbers are never reassigned and entries are
//! never removed.

use crate::config::CaptionerConfig;
use crate::error::CaptionError;
use crate::numbering::{self, SequenceNumber};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A registered object and the number it was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionEntry {
    pub name: String,
    pub caption: String,
    pub number: SequenceNumber,
    /// Position in registration order, starting at 0.
    pub index: usize,
}

/// Insertion-ordered, name-keyed arena of [`CaptionEntry`].
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    entries: IndexMap<String, CaptionEntry>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `name`, registering it first if it is new.
    ///
    /// `requested_level` selects the bump level for a new entry and defaults
    /// to the deepest level. It is validated before anything is touched, so
    /// an `InvalidLevel` error leaves the registry unchanged.
    pub fn resolve(
        &mut self,
        name: &str,
        caption: &str,
        requested_level: Option<usize>,
        config: &CaptionerConfig,
    ) -> Result<&CaptionEntry, CaptionError> {
        let bump_level = requested_level.unwrap_or(config.levels());
        numbering::check_level(bump_level, config.levels())?;

        if let Some(index) = self.entries.get_index_of(name) {
            let entry = &mut self.entries[index];
            if entry.caption.is_empty() && !caption.is_empty() {
                log::debug!("Filling caption for '{}' ({})", name, entry.number);
                entry.caption = caption.to_string();
            }
            return Ok(&self.entries[index]);
        }

        let number = match self.entries.last() {
            Some((_, previous)) => numbering::increment(&previous.number, bump_level)?,
            None => numbering::initial(config.types()),
        };
        let index = self.entries.len();
        log::debug!(
            "Registered '{}' as {}{}",
            name,
            config.prefix(),
            number.join(config.infix())
        );

        let entry = CaptionEntry {
            name: name.to_string(),
            caption: caption.to_string(),
            number,
            index,
        };
        self.entries.insert(name.to_string(), entry);
        Ok(&self.entries[index])
    }

    pub fn get(&self, name: &str) -> Option<&CaptionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently registered entry.
    pub fn last(&self) -> Option<&CaptionEntry> {
        self.entries.last().map(|(_, entry)| entry)
    }

    /// All entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &CaptionEntry> {
        self.entries.values()
    }
}
