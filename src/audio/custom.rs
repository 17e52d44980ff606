use heapless::{String, Vec};

use super::AudioError;

/// Song numbers at and above this address the custom slots.
pub const CUSTOM_SONG_BASE: i32 = 16;
pub const CUSTOM_SLOT_COUNT: usize = 5;
/// Interleaved values per slot (frequency, duration, frequency, ...).
pub const MAX_CUSTOM_NOTES: usize = 200;
pub const CUSTOM_NAME_LEN: usize = 20;

/// Read-only view of user-loaded melodies.
///
/// The player never writes through this. Notes are interleaved: index `2n`
/// is the frequency of pair `n` and `2n + 1` its duration in ms.
pub trait CustomMelodySource {
    fn is_loaded(&self, slot: usize) -> bool;
    /// Number of (frequency, duration) pairs.
    fn note_count(&self, slot: usize) -> usize;
    fn note_at(&self, slot: usize, index: usize) -> u16;
}

#[derive(Clone, Debug, Default)]
pub struct CustomMelodySlot {
    name: String<CUSTOM_NAME_LEN>,
    notes: Vec<u16, MAX_CUSTOM_NOTES>,
    loaded: bool,
}

impl CustomMelodySlot {
    pub const fn new() -> Self {
        CustomMelodySlot {
            name: String::new(),
            notes: Vec::new(),
            loaded: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn note_count(&self) -> usize {
        self.notes.len() / 2
    }

    pub fn notes(&self) -> &[u16] {
        &self.notes
    }

    /// (frequency, duration) of pair `n`.
    pub fn note(&self, n: usize) -> Option<(u16, u16)> {
        let freq = *self.notes.get(2 * n)?;
        let duration = *self.notes.get(2 * n + 1)?;
        Some((freq, duration))
    }
}

/// Owner of the custom melody slots.
///
/// Slot `n` is sung as song number `CUSTOM_SONG_BASE + n`.
#[derive(Clone, Debug, Default)]
pub struct CustomMelodies {
    slots: [CustomMelodySlot; CUSTOM_SLOT_COUNT],
}

impl CustomMelodies {
    pub const fn new() -> Self {
        CustomMelodies {
            slots: [
                CustomMelodySlot::new(),
                CustomMelodySlot::new(),
                CustomMelodySlot::new(),
                CustomMelodySlot::new(),
                CustomMelodySlot::new(),
            ],
        }
    }

    /// Replaces the contents of `slot` and marks it loaded.
    ///
    /// Leaves the slot untouched on error.
    pub fn load(&mut self, slot: usize, name: &str, notes: &[u16]) -> Result<(), AudioError> {
        if slot >= CUSTOM_SLOT_COUNT {
            return Err(AudioError::SlotOutOfRange);
        }
        if notes.len() % 2 != 0 {
            return Err(AudioError::IncompleteNote);
        }

        let name: String<CUSTOM_NAME_LEN> =
            String::try_from(name).map_err(|_| AudioError::NameTooLong)?;
        let notes: Vec<u16, MAX_CUSTOM_NOTES> =
            Vec::from_slice(notes).map_err(|_| AudioError::TooManyNotes)?;

        let target = &mut self.slots[slot];
        target.name = name;
        target.notes = notes;
        target.loaded = true;

        debug!("custom slot {} loaded with {} notes", slot, target.note_count());

        Ok(())
    }

    pub fn clear(&mut self, slot: usize) -> Result<(), AudioError> {
        let target = self.slots.get_mut(slot).ok_or(AudioError::SlotOutOfRange)?;
        *target = CustomMelodySlot::new();

        Ok(())
    }

    pub fn slot(&self, slot: usize) -> Option<&CustomMelodySlot> {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> &[CustomMelodySlot] {
        &self.slots
    }
}

impl CustomMelodySource for CustomMelodies {
    fn is_loaded(&self, slot: usize) -> bool {
        self.slot(slot).is_some_and(|s| s.is_loaded())
    }

    fn note_count(&self, slot: usize) -> usize {
        self.slot(slot).map_or(0, |s| s.note_count())
    }

    fn note_at(&self, slot: usize, index: usize) -> u16 {
        self.slot(slot)
            .and_then(|s| s.notes.get(index))
            .copied()
            .unwrap_or(0)
    }
}
