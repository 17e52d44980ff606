use num_traits::clamp;

#[cfg(feature = "stm32")]
pub mod buzzer;

pub const BUZZER_MIN_FREQ: u16 = 35;
pub const BUZZER_MAX_FREQ: u16 = 7000;

/// A square-wave generator bound to a single output pin.
///
/// `play_tone` starts (or retunes) a continuous wave and returns immediately.
/// The wave keeps sounding until `stop_tone` is called.
pub trait PlayTone {
    fn play_tone(&mut self, tone: u16);
    fn stop_tone(&mut self);
    fn can_play_tone(&self, tone: u16) -> bool;
}

/// Frequency window a resonator can reproduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneLimits {
    pub min_freq: u16,
    pub max_freq: u16,
}

impl ToneLimits {
    pub const DEFAULT: ToneLimits = ToneLimits {
        min_freq: BUZZER_MIN_FREQ,
        max_freq: BUZZER_MAX_FREQ,
    };

    pub const fn new(min_freq: u16, max_freq: u16) -> Self {
        ToneLimits { min_freq, max_freq }
    }

    // exclusive on both ends
    pub fn contains(&self, freq: u16) -> bool {
        self.min_freq < freq && freq < self.max_freq
    }

    pub fn clamp(&self, freq: u16) -> u16 {
        clamp(freq, self.min_freq, self.max_freq)
    }
}

impl Default for ToneLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
