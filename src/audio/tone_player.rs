use embassy_time::Delay;
use embedded_hal::delay::DelayNs;

use crate::drivers::audio::PlayTone;

use super::custom::{CustomMelodySource, CUSTOM_SLOT_COUNT, CUSTOM_SONG_BASE, MAX_CUSTOM_NOTES};
use super::note::Song;
use super::songs::song_for;
use super::{AudioCommand, AudioError, BEEP_DURATION_MS, BEEP_FREQ, BEEP_PAUSE_MS};

/// Blocking melody player.
///
/// Every call returns only once the last tone has finished, so the time spent
/// in `sing` is the sum of the song's durations. There is no way to interrupt
/// a song once started.
pub struct TonePlayer<D: PlayTone, T: DelayNs = Delay> {
    audio_driver: D,
    delay: T,
}

impl<D: PlayTone> TonePlayer<D, Delay> {
    pub fn new(audio_driver: D) -> Self {
        Self::new_with_delay(audio_driver, Delay)
    }
}

impl<D: PlayTone, T: DelayNs> TonePlayer<D, T> {
    pub fn new_with_delay(audio_driver: D, delay: T) -> Self {
        TonePlayer {
            audio_driver,
            delay,
        }
    }

    pub fn release(self) -> (D, T) {
        (self.audio_driver, self.delay)
    }

    /// Sounds `freq` for `duration` ms, or stays silent for `duration` if
    /// `freq` is 0. The output is always stopped afterwards.
    pub fn play_tone(&mut self, freq: u16, duration: u32) {
        if freq > 0 {
            self.audio_driver.play_tone(freq);
        }
        self.delay.delay_ms(duration);
        self.audio_driver.stop_tone();
    }

    /// Waits without touching the output.
    pub fn rest(&mut self, duration: u32) {
        self.delay.delay_ms(duration);
    }

    pub fn beep(&mut self) {
        self.play_tone(BEEP_FREQ, BEEP_DURATION_MS);
        self.rest(BEEP_PAUSE_MS);
    }

    pub fn play_song(&mut self, song: &Song) {
        for tone in song.iter() {
            self.play_tone(tone.freq, tone.duration);
        }
    }

    /// Plays custom slot `slot` if it is loaded and holds at least one note.
    pub fn play_custom<C: CustomMelodySource + ?Sized>(&mut self, slot: usize, custom: &C) {
        if slot >= CUSTOM_SLOT_COUNT {
            return;
        }

        let note_count = custom.note_count(slot);
        if !custom.is_loaded(slot) || note_count == 0 {
            debug!("custom slot {} empty, nothing to play", slot);
            return;
        }

        for n in 0..note_count.min(MAX_CUSTOM_NOTES / 2) {
            let freq = custom.note_at(slot, 2 * n);
            let duration = custom.note_at(slot, 2 * n + 1);
            self.play_tone(freq, duration.into());
        }
    }

    /// Plays song `song_number`.
    ///
    /// 0..=15 are the built-in songs, 16..=20 the custom slots 0..=4. Any
    /// other number is ignored.
    pub fn sing<C: CustomMelodySource + ?Sized>(&mut self, song_number: i32, custom: &C) {
        trace!("sing {}", song_number);

        let custom_end = CUSTOM_SONG_BASE + CUSTOM_SLOT_COUNT as i32;
        if (CUSTOM_SONG_BASE..custom_end).contains(&song_number) {
            self.play_custom((song_number - CUSTOM_SONG_BASE) as usize, custom);
            return;
        }

        match song_for(song_number) {
            Some(song) => self.play_song(song),
            None => debug!("no song {}", song_number),
        }
    }

    pub fn execute<C: CustomMelodySource + ?Sized>(&mut self, command: AudioCommand, custom: &C) {
        match command {
            AudioCommand::Sing(song_number) => self.sing(song_number, custom),
            AudioCommand::Beep => self.beep(),
            AudioCommand::Tone { freq, duration } => self.play_tone(freq, duration),
        }
    }

    /// Checks every pitched tone of `song` against the output's range.
    ///
    /// Playback does not call this, out of range tones are left to the driver.
    pub fn check_song(&self, song: &Song) -> Result<(), AudioError> {
        let unplayable = song
            .iter()
            .filter(|tone| !tone.is_rest())
            .any(|tone| !self.audio_driver.can_play_tone(tone.freq));

        if unplayable {
            return Err(AudioError::UnplayablePitch);
        }

        Ok(())
    }
}
