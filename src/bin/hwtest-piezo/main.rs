#![no_std]
#![no_main]

use embassy_stm32::{
    gpio::OutputType,
    time::khz,
    timer::{
        simple_pwm::{PwmPin, SimplePwm},
        Channel,
    },
};
use embassy_time::Timer;

use defmt_rtt as _;
// provide embedded panic probe
use panic_probe as _;

use ninja_buzzer::{
    audio::{
        custom::{CustomMelodies, CUSTOM_SONG_BASE},
        pitches::{A5, C5, E5, G5},
        songs::SongId,
        tone_player::TonePlayer,
    },
    drivers::audio::buzzer::Buzzer,
};

const SCALE_TEST_MELODY: [u16; 10] = [C5, 120, E5, 120, G5, 120, A5, 240, 0, 60];

#[embassy_executor::main]
async fn main(_spawner: embassy_executor::Spawner) {
    let p = embassy_stm32::init(Default::default());

    defmt::info!("embassy HAL configured.");

    let ch2 = PwmPin::new_ch2(p.PE6, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM15,
        None,
        Some(ch2),
        None,
        None,
        khz(2),
        Default::default(),
    );

    let audio_driver = Buzzer::new(pwm, Channel::Ch2);
    defmt::info!("buzzer limits {}", audio_driver.limits());

    let mut tone_player = TonePlayer::new(audio_driver);

    let mut custom = CustomMelodies::new();
    if let Err(err) = custom.load(0, "scale", &SCALE_TEST_MELODY) {
        defmt::error!("failed to load test melody: {}", err);
    }

    tone_player.beep();

    for song_id in SongId::ALL {
        if tone_player.check_song(song_id.song()).is_err() {
            defmt::warn!("song {} uses a pitch outside of the buzzer range", song_id);
        }

        defmt::info!("playing song {}", song_id);
        tone_player.sing(song_id.index().into(), &custom);

        Timer::after_millis(500).await;
    }

    defmt::info!("playing custom slot 0");
    tone_player.sing(CUSTOM_SONG_BASE, &custom);

    // must stay silent
    tone_player.sing(CUSTOM_SONG_BASE + 1, &custom);
    tone_player.sing(-1, &custom);

    tone_player.beep();

    defmt::info!("piezo test done.");

    loop {
        Timer::after_millis(10).await;
    }
}
