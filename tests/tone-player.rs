mod common;

use common::{recording_player, recording_player_with_limits, tone_events, Event};
use ninja_buzzer::{
    audio::{
        custom::CustomMelodies,
        note::Tone,
        songs::{BUTTON_PUSHED_SONG, SLEEPING_SONG},
        AudioCommand, AudioError,
    },
    drivers::audio::ToneLimits,
};

#[test]
fn tone_starts_waits_then_stops() {
    let (mut player, log) = recording_player();

    player.play_tone(440, 250);

    assert_eq!(
        *log.borrow(),
        vec![Event::Start(440), Event::Delay(250), Event::Stop]
    );
}

#[test]
fn zero_frequency_is_silence_but_still_stops() {
    let (mut player, log) = recording_player();

    player.play_tone(0, 30);

    assert_eq!(*log.borrow(), vec![Event::Delay(30), Event::Stop]);
}

#[test]
fn zero_duration_still_pays_the_stop() {
    let (mut player, log) = recording_player();

    player.play_tone(1000, 0);
    player.play_tone(0, 0);

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Start(1000),
            Event::Delay(0),
            Event::Stop,
            Event::Delay(0),
            Event::Stop,
        ]
    );
}

#[test]
fn beep_is_c5_then_a_silent_pause() {
    let (mut player, log) = recording_player();

    player.beep();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Start(523),
            Event::Delay(100),
            Event::Stop,
            Event::Delay(50),
        ]
    );
}

#[test]
fn rest_does_not_touch_the_output() {
    let (mut player, log) = recording_player();

    player.rest(75);

    assert_eq!(*log.borrow(), vec![Event::Delay(75)]);
}

#[test]
fn play_song_keeps_order() {
    let (mut player, log) = recording_player();

    player.play_song(&[Tone::new(300, 10), Tone::rest(20), Tone::new(200, 30)]);

    let mut expected = tone_events(300, 10);
    expected.extend(tone_events(0, 20));
    expected.extend(tone_events(200, 30));
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn execute_dispatches_each_command() {
    let (mut player, log) = recording_player();
    let custom = CustomMelodies::new();

    player.execute(AudioCommand::Tone { freq: 880, duration: 40 }, &custom);
    player.execute(AudioCommand::Beep, &custom);
    player.execute(AudioCommand::Sing(99), &custom);

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Start(880),
            Event::Delay(40),
            Event::Stop,
            Event::Start(523),
            Event::Delay(100),
            Event::Stop,
            Event::Delay(50),
        ]
    );
}

#[test]
fn execute_sing_plays_builtin_song() {
    let (mut player, log) = recording_player();
    let custom = CustomMelodies::new();

    player.execute(AudioCommand::Sing(2), &custom);

    let expected: Vec<Event> = BUTTON_PUSHED_SONG
        .iter()
        .flat_map(|tone| tone_events(tone.freq, tone.duration))
        .collect();
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn check_song_accepts_playable_songs() {
    let (player, _) = recording_player();

    assert_eq!(player.check_song(&BUTTON_PUSHED_SONG), Ok(()));
}

#[test]
fn check_song_flags_pitches_outside_the_range() {
    let (player, log) = recording_player_with_limits(ToneLimits::new(150, 5000));

    // SLEEPING opens on 100 Hz
    assert_eq!(
        player.check_song(&SLEEPING_SONG),
        Err(AudioError::UnplayablePitch)
    );
    assert!(log.borrow().is_empty());
}

#[test]
fn check_song_ignores_rests() {
    let (player, _) = recording_player_with_limits(ToneLimits::new(150, 5000));

    assert_eq!(
        player.check_song(&[Tone::rest(10), Tone::new(440, 10)]),
        Ok(())
    );
}

#[test]
fn tone_limits_clamp_and_contain() {
    let limits = ToneLimits::DEFAULT;

    assert_eq!(limits.clamp(10), 35);
    assert_eq!(limits.clamp(9000), 7000);
    assert_eq!(limits.clamp(440), 440);

    assert!(limits.contains(440));
    assert!(!limits.contains(35));
    assert!(!limits.contains(7000));
    assert!(!limits.contains(0));
}

#[test]
fn release_returns_the_parts() {
    let (mut player, log) = recording_player();
    player.play_tone(440, 1);

    let (_output, _delay) = player.release();

    assert_eq!(log.borrow().len(), 3);
}
