#![no_std]

// must stay first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod audio;
pub mod drivers;
