use embassy_stm32::{
    time::hz,
    timer::{simple_pwm::SimplePwm, Channel, GeneralInstance4Channel},
};

use super::{PlayTone, ToneLimits};

/// Piezo buzzer driven by one channel of a general purpose timer.
///
/// The output pin is claimed and configured when the `SimplePwm` is built
/// (`PwmPin::new_chN(pin, OutputType::PushPull)`), so by the time a `Buzzer`
/// exists the pin is already an output. The channel starts disabled.
pub struct Buzzer<'d, T: GeneralInstance4Channel> {
    pwm: SimplePwm<'d, T>,
    channel: Channel,

    limits: ToneLimits,
}

impl<'d, T: GeneralInstance4Channel> Buzzer<'d, T> {
    pub fn new(pwm: SimplePwm<'d, T>, channel: Channel) -> Self {
        Self::new_with_limits(pwm, channel, ToneLimits::DEFAULT)
    }

    pub fn new_with_limits(pwm: SimplePwm<'d, T>, channel: Channel, limits: ToneLimits) -> Self {
        let mut buzzer = Buzzer {
            pwm,
            channel,
            limits,
        };

        buzzer.pwm.channel(channel).disable();

        buzzer
    }

    pub fn limits(&self) -> ToneLimits {
        self.limits
    }
}

impl<'d, T: GeneralInstance4Channel> PlayTone for Buzzer<'d, T> {
    fn play_tone(&mut self, freq: u16) {
        if freq == 0 {
            self.stop_tone();
            return;
        }

        let freq = self.limits.clamp(freq);
        self.pwm.set_frequency(hz(freq.into()));

        // duty is relative to ARR, which moves with the frequency
        let mut ch = self.pwm.channel(self.channel);
        ch.set_duty_cycle_percent(50);
        ch.enable();
    }

    fn stop_tone(&mut self) {
        self.pwm.channel(self.channel).disable();
    }

    fn can_play_tone(&self, freq: u16) -> bool {
        self.limits.contains(freq)
    }
}
