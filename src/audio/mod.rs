//! Square wave sound effects and melodies.
//!
//! [ToneEngine] owns what is playing; it is advanced once per scheduler tick
//! and talks to the buzzer through [crate::types::ToneOutput].

mod engine;
pub mod notes;
pub mod presets;
mod tone;

pub use engine::{ToneEngine, SLIDE_INTERVAL};
pub use tone::{duty_cycle_to_pulse_width, freq_to_clock_period, Pwm, Tone, PWM_CLOCK_HZ};
