#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use embedded_hal::delay::DelayNs;
use ninja_buzzer::{
    audio::tone_player::TonePlayer,
    drivers::audio::{PlayTone, ToneLimits},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Start(u16),
    Delay(u32),
    Stop,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub struct RecordingOutput {
    log: EventLog,
    limits: ToneLimits,
}

impl PlayTone for RecordingOutput {
    fn play_tone(&mut self, tone: u16) {
        self.log.borrow_mut().push(Event::Start(tone));
    }

    fn stop_tone(&mut self) {
        self.log.borrow_mut().push(Event::Stop);
    }

    fn can_play_tone(&self, tone: u16) -> bool {
        self.limits.contains(tone)
    }
}

pub struct RecordingDelay {
    log: EventLog,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

pub fn recording_player() -> (TonePlayer<RecordingOutput, RecordingDelay>, EventLog) {
    recording_player_with_limits(ToneLimits::DEFAULT)
}

pub fn recording_player_with_limits(
    limits: ToneLimits,
) -> (TonePlayer<RecordingOutput, RecordingDelay>, EventLog) {
    let log = EventLog::default();
    let output = RecordingOutput {
        log: log.clone(),
        limits,
    };
    let delay = RecordingDelay { log: log.clone() };

    (TonePlayer::new_with_delay(output, delay), log)
}

/// The event sequence `play_tone(freq, duration)` must produce.
pub fn tone_events(freq: u16, duration: u32) -> Vec<Event> {
    let mut events = Vec::new();
    if freq > 0 {
        events.push(Event::Start(freq));
    }
    events.push(Event::Delay(duration));
    events.push(Event::Stop);
    events
}

pub fn song_events(pairs: &[(u16, u32)]) -> Vec<Event> {
    pairs
        .iter()
        .flat_map(|&(freq, duration)| tone_events(freq, duration))
        .collect()
}

/// Recovers the (frequency, duration) pairs a sequence of events encodes.
pub fn played_pairs(events: &[Event]) -> Vec<(u16, u32)> {
    let mut pairs = Vec::new();
    let mut pending = 0;
    for event in events {
        match *event {
            Event::Start(freq) => pending = freq,
            Event::Delay(duration) => {
                pairs.push((pending, duration));
                pending = 0;
            }
            Event::Stop => {}
        }
    }
    pairs
}
