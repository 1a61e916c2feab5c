//! The sound effects and melodies the game plays
use super::notes::*;
use super::Tone;

/// menu and settings feedback
pub const BUTTON_SOUND: Tone = Tone::new(700, 50.0, 5, 50);
/// every advance and joystick step
pub const MOVE_SOUND: Tone = Tone::new(580, 25.0, 5, 80);
/// a falling whistle when a snake is taken
pub const SNAKE_SOUND: Tone = Tone::new(780, 50.0, -5, 500);

/// played when a ladder is climbed
pub static LADDER_MELODY: [Tone; 3] = [
    Tone::new(380, 30.0, 5, 400),
    Tone::rest(100),
    Tone::new(650, 45.0, -20, 50),
];

/// played once a winner is decided
pub static GAME_OVER_MELODY: [Tone; 17] = [
    Tone::note(E5, HALF),
    Tone::note(C5, HALF),
    Tone::note(D5, HALF),
    Tone::note(B4, HALF),
    Tone::note(C5, HALF),
    Tone::note(A4, HALF),
    Tone::note(GS4, HALF),
    Tone::note(B4, QUARTER),
    Tone::rest(QUARTER),
    Tone::note(E5, HALF),
    Tone::note(C5, HALF),
    Tone::note(D5, HALF),
    Tone::note(B4, HALF),
    Tone::note(C5, QUARTER),
    Tone::note(E5, QUARTER),
    Tone::note(A5, HALF),
    Tone::note(GS5, HALF),
];

/// played on the title screen
pub static START_MELODY: [Tone; 38] = [
    Tone::note(E5, QUARTER),
    Tone::note(B4, EIGHTH),
    Tone::note(C5, EIGHTH),
    Tone::note(D5, QUARTER),
    Tone::note(C5, EIGHTH),
    Tone::note(B4, EIGHTH),
    Tone::note(A4, QUARTER),
    Tone::note(A4, EIGHTH),
    Tone::note(C5, EIGHTH),
    Tone::note(E5, QUARTER),
    Tone::note(D5, EIGHTH),
    Tone::note(C5, EIGHTH),
    Tone::note(B4, DOTTED_QUARTER),
    Tone::note(C5, EIGHTH),
    Tone::note(D5, QUARTER),
    Tone::note(E5, QUARTER),
    Tone::note(C5, QUARTER),
    Tone::note(A4, QUARTER),
    Tone::note(A4, EIGHTH),
    Tone::note(A4, QUARTER),
    Tone::note(B4, EIGHTH),
    Tone::note(C5, EIGHTH),
    Tone::note(D5, DOTTED_QUARTER),
    Tone::note(F5, EIGHTH),
    Tone::note(A5, QUARTER),
    Tone::note(G5, EIGHTH),
    Tone::note(F5, EIGHTH),
    Tone::note(E5, DOTTED_QUARTER),
    Tone::note(C5, EIGHTH),
    Tone::note(E5, QUARTER),
    Tone::note(D5, EIGHTH),
    Tone::note(C5, EIGHTH),
    Tone::note(B4, QUARTER),
    Tone::note(B4, EIGHTH),
    Tone::note(C5, EIGHTH),
    Tone::note(D5, QUARTER),
    Tone::note(E5, QUARTER),
    Tone::note(C5, QUARTER),
];
