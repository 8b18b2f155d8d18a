use std::collections::HashSet;

use crate::error::ModelError;
use crate::note_set::{KEY_SLOT_COUNT, NoteSet};

/// Canonical note names, index-aligned with key slots.
pub const DEFAULT_NOTE_NAMES: [&str; KEY_SLOT_COUNT] = [
    "C4", "C#4", "D4", "D#4", "E4", "F4", "F#4", "G4", "G#4", "A4", "A#4", "B4", "C5", "C#5", "D5",
];

/// Ordered table of note names used to resolve notation tokens to slots.
///
/// Holds exactly [`KEY_SLOT_COUNT`] unique names, so lookup by exact string
/// equality is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNameTable {
    names: Vec<String>,
}

impl NoteNameTable {
    pub fn new<I, S>(names: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != KEY_SLOT_COUNT {
            return Err(ModelError::NoteNameCount {
                expected: KEY_SLOT_COUNT,
                actual: names.len(),
            });
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateNoteName(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Slot index of `token`, or `None` when no name matches exactly.
    pub fn lookup(&self, token: &str) -> Option<usize> {
        self.names.iter().position(|n| n == token)
    }

    pub fn name(&self, slot: usize) -> Option<&str> {
        self.names.get(slot).map(String::as_str)
    }

    /// Names of every sounding slot in `set`, in slot order.
    pub fn names_in<'a>(&'a self, set: &NoteSet) -> Vec<&'a str> {
        set.iter().filter_map(|slot| self.name(slot)).collect()
    }
}

impl Default for NoteNameTable {
    fn default() -> Self {
        Self {
            names: DEFAULT_NOTE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
