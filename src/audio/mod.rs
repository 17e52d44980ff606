pub mod custom;
pub mod note;
pub mod pitches;
pub mod songs;
pub mod tone_player;

pub const BEEP_FREQ: u16 = pitches::C5;
pub const BEEP_DURATION_MS: u32 = 100;
pub const BEEP_PAUSE_MS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    UnplayablePitch,
    SlotOutOfRange,
    NameTooLong,
    TooManyNotes,
    IncompleteNote,
}

/// Requests a transport hands to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCommand {
    Sing(i32),
    Beep,
    Tone { freq: u16, duration: u32 },
}
