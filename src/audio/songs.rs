use super::note::{Song, Tone};
use super::pitches::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SongId {
    Connection = 0,
    Disconnection,
    ButtonPushed,
    Battle,
    Fury,
    Ninja,
    Surprise,
    OhOoh,
    OhOoh2,
    Cuddly,
    Sleeping,
    Happy,
    SuperHappy,
    HappyShort,
    Sad,
    Confused,
}

impl SongId {
    pub const ALL: [SongId; 16] = [
        SongId::Connection,
        SongId::Disconnection,
        SongId::ButtonPushed,
        SongId::Battle,
        SongId::Fury,
        SongId::Ninja,
        SongId::Surprise,
        SongId::OhOoh,
        SongId::OhOoh2,
        SongId::Cuddly,
        SongId::Sleeping,
        SongId::Happy,
        SongId::SuperHappy,
        SongId::HappyShort,
        SongId::Sad,
        SongId::Confused,
    ];

    pub fn from_index(index: i32) -> Option<SongId> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn song(self) -> &'static Song {
        match self {
            SongId::Connection => &CONNECTION_SONG,
            SongId::Disconnection => &DISCONNECTION_SONG,
            SongId::ButtonPushed => &BUTTON_PUSHED_SONG,
            SongId::Battle => &BATTLE_SONG,
            SongId::Fury => &FURY_SONG,
            SongId::Ninja => &NINJA_SONG,
            SongId::Surprise => &SURPRISE_SONG,
            SongId::OhOoh => &OHOOH_SONG,
            SongId::OhOoh2 => &OHOOH2_SONG,
            SongId::Cuddly => &CUDDLY_SONG,
            SongId::Sleeping => &SLEEPING_SONG,
            SongId::Happy => &HAPPY_SONG,
            SongId::SuperHappy => &SUPER_HAPPY_SONG,
            SongId::HappyShort => &HAPPY_SHORT_SONG,
            SongId::Sad => &SAD_SONG,
            SongId::Confused => &CONFUSED_SONG,
        }
    }
}

/// Built-in song for a song number, `None` outside 0..=15.
pub fn song_for(song_number: i32) -> Option<&'static Song> {
    SongId::from_index(song_number).map(SongId::song)
}

pub const CONNECTION_SONG: [Tone; 7] = [
    Tone::new(E5, 50),
    Tone::new(E6, 55),
    Tone::new(A6, 60),
    Tone::new(E6, 50),
    Tone::new(E5, 50),
    Tone::rest(30),
    Tone::new(E6, 55),
];

pub const DISCONNECTION_SONG: [Tone; 6] = [
    Tone::new(E5, 50),
    Tone::new(A6, 55),
    Tone::new(E6, 50),
    Tone::new(A6, 55),
    Tone::new(E5, 50),
    Tone::rest(30),
];

pub const BUTTON_PUSHED_SONG: [Tone; 4] = [
    Tone::new(E6, 50),
    Tone::new(G6, 50),
    Tone::new(E7, 50),
    Tone::rest(30),
];

pub const BATTLE_SONG: [Tone; 8] = [
    Tone::new(E5, 100),
    Tone::new(E5, 100),
    Tone::new(E5, 100),
    Tone::new(C5, 100),
    Tone::new(E5, 150),
    Tone::new(G5, 150),
    Tone::new(C5, 150),
    Tone::rest(30),
];

pub const FURY_SONG: [Tone; 9] = [
    Tone::new(D6, 80),
    Tone::new(D6, 80),
    Tone::new(D6, 80),
    Tone::new(A5, 100),
    Tone::new(GS5, 100),
    Tone::new(G5, 100),
    Tone::new(F5, 100),
    Tone::new(D5, 150),
    Tone::rest(30),
];

pub const NINJA_SONG: [Tone; 11] = [
    Tone::new(E6, 50),
    Tone::rest(50),
    Tone::new(E6, 50),
    Tone::rest(50),
    Tone::new(E6, 50),
    Tone::rest(50),
    Tone::new(C6, 100),
    Tone::new(E6, 100),
    Tone::new(G6, 100),
    Tone::new(C7, 150),
    Tone::rest(30),
];

pub const SURPRISE_SONG: [Tone; 4] = [
    Tone::new(800, 80),
    Tone::new(2150, 80),
    Tone::new(1050, 80),
    Tone::rest(30),
];

pub const OHOOH_SONG: [Tone; 4] = [
    Tone::new(880, 250),
    Tone::new(1760, 250),
    Tone::new(880, 250),
    Tone::rest(30),
];

pub const OHOOH2_SONG: [Tone; 4] = [
    Tone::new(1050, 150),
    Tone::new(1250, 150),
    Tone::new(1050, 150),
    Tone::rest(30),
];

pub const CUDDLY_SONG: [Tone; 4] = [
    Tone::new(700, 250),
    Tone::new(900, 250),
    Tone::new(1100, 300),
    Tone::rest(30),
];

pub const SLEEPING_SONG: [Tone; 4] = [
    Tone::new(100, 500),
    Tone::new(200, 500),
    Tone::new(300, 500),
    Tone::rest(30),
];

pub const HAPPY_SONG: [Tone; 8] = [
    Tone::new(E5, 50),
    Tone::new(G5, 50),
    Tone::new(A5, 50),
    Tone::new(B5, 50),
    Tone::new(E6, 50),
    Tone::new(G6, 50),
    Tone::new(A6, 50),
    Tone::rest(30),
];

pub const SUPER_HAPPY_SONG: [Tone; 7] = [
    Tone::new(C6, 60),
    Tone::new(E6, 60),
    Tone::new(G6, 60),
    Tone::new(C7, 60),
    Tone::new(E7, 60),
    Tone::new(G7, 60),
    Tone::rest(30),
];

pub const HAPPY_SHORT_SONG: [Tone; 4] = [
    Tone::new(E5, 80),
    Tone::new(G5, 80),
    Tone::new(A5, 80),
    Tone::rest(30),
];

// 669, not E5 (659)
pub const SAD_SONG: [Tone; 4] = [
    Tone::new(880, 200),
    Tone::new(669, 200),
    Tone::new(587, 200),
    Tone::rest(30),
];

pub const CONFUSED_SONG: [Tone; 6] = [
    Tone::new(1000, 60),
    Tone::new(1044, 60),
    Tone::new(1000, 60),
    Tone::new(1044, 60),
    Tone::new(1000, 60),
    Tone::rest(30),
];
