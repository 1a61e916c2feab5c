//! Note pitches and lengths used by the built-in melodies
#![allow(missing_docs)]

pub const HALF: u32 = 400;
pub const QUARTER: u32 = 200;
pub const EIGHTH: u32 = 100;
pub const DOTTED_QUARTER: u32 = 300;

pub const GS4: u16 = 415;
pub const A4: u16 = 440;
pub const B4: u16 = 494;
pub const C5: u16 = 523;
pub const D5: u16 = 587;
pub const E5: u16 = 659;
pub const F5: u16 = 698;
pub const G5: u16 = 784;
pub const GS5: u16 = 831;
pub const A5: u16 = 880;
