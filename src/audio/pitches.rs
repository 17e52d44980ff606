// Equal-tempered pitches (A4 = 440 Hz), rounded to the nearest Hz.

pub const C5: u16 = 523;
pub const D5: u16 = 587;
pub const E5: u16 = 659;
pub const F5: u16 = 698;
pub const G5: u16 = 784;
pub const GS5: u16 = 831;
pub const A5: u16 = 880;
pub const B5: u16 = 988;

pub const C6: u16 = 1047;
pub const D6: u16 = 1175;
pub const E6: u16 = 1319;
pub const G6: u16 = 1568;
pub const A6: u16 = 1760;

pub const C7: u16 = 2093;
pub const E7: u16 = 2637;
pub const G7: u16 = 3136;
