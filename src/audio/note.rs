/// A single sound or silence event. A `freq` of 0 is a rest.
///
/// Durations are in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub freq: u16,
    pub duration: u32,
}

impl Tone {
    pub const fn new(freq: u16, duration: u32) -> Self {
        Tone { freq, duration }
    }

    pub const fn rest(duration: u32) -> Self {
        Tone { freq: 0, duration }
    }

    pub const fn is_rest(&self) -> bool {
        self.freq == 0
    }
}

pub type Song = [Tone];

/// Total time a song keeps the caller blocked.
pub fn song_duration_ms(song: &Song) -> u32 {
    song.iter().map(|tone| tone.duration).sum()
}
