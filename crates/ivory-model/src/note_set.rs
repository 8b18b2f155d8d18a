use std::fmt;

use crate::error::ModelError;

/// Number of playable key slots on the piano.
pub const KEY_SLOT_COUNT: usize = 15;

/// Raw per-slot boolean states as sampled from a device.
pub type KeyStates = [bool; KEY_SLOT_COUNT];

/// Fixed-size set of key slots that sound at the same time.
///
/// `NoteSet` is `Copy`; every accessor that hands one out returns an
/// independent value, never a view into the owner's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoteSet {
    slots: KeyStates,
}

impl NoteSet {
    pub const fn new() -> Self {
        Self {
            slots: [false; KEY_SLOT_COUNT],
        }
    }

    pub const fn from_states(slots: KeyStates) -> Self {
        Self { slots }
    }

    /// Build a set from slot indices. Fails on the first index outside
    /// `0..KEY_SLOT_COUNT`.
    pub fn from_slots<I>(slots: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new();
        for slot in slots {
            set.try_insert(slot)?;
        }
        Ok(set)
    }

    /// Whether the slot is set. Out-of-range slots read as `false`.
    pub fn contains(&self, slot: usize) -> bool {
        self.slots.get(slot).copied().unwrap_or(false)
    }

    /// Mark a slot as sounding.
    pub fn try_insert(&mut self, slot: usize) -> Result<(), ModelError> {
        match self.slots.get_mut(slot) {
            Some(s) => {
                *s = true;
                Ok(())
            }
            None => Err(ModelError::SlotOutOfRange(slot)),
        }
    }

    /// Reset every slot to `false`.
    pub fn clear(&mut self) {
        self.slots.fill(false);
    }

    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|&s| s)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|&&s| s).count()
    }

    /// Indices of the sounding slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
    }

    /// Copy of the underlying boolean array.
    pub fn states(&self) -> KeyStates {
        self.slots
    }
}

impl From<KeyStates> for NoteSet {
    fn from(slots: KeyStates) -> Self {
        Self::from_states(slots)
    }
}

impl From<NoteSet> for KeyStates {
    fn from(set: NoteSet) -> Self {
        set.slots
    }
}

/// Renders one character per slot: `1` for set, `0` for unset.
impl fmt::Display for NoteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.slots {
            f.write_str(if s { "1" } else { "0" })?;
        }
        Ok(())
    }
}
