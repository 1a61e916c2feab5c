/// ticks of the PWM counter per second
pub const PWM_CLOCK_HZ: u32 = 1_000_000;

/// A single sound: a square wave that may slide in pitch
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tone {
    /// starting pitch in Hz; 0 is silence
    pub frequency: u16,
    /// percentage of each period the output is high
    pub duty_cycle: f32,
    /// Hz added to the pitch every slide interval, may be negative
    pub slide: i16,
    /// how long the tone sounds, in milliseconds
    pub duration: u32,
}

impl Tone {
    #[allow(missing_docs)]
    pub const fn new(frequency: u16, duty_cycle: f32, slide: i16, duration: u32) -> Self {
        Tone {
            frequency,
            duty_cycle,
            slide,
            duration,
        }
    }

    /// a steady square wave at 50% duty
    pub const fn note(frequency: u16, duration: u32) -> Self {
        Self::new(frequency, 50.0, 0, duration)
    }

    /// silence that still occupies a slot in a melody
    pub const fn rest(duration: u32) -> Self {
        Self::new(0, 0.0, 0, duration)
    }
}

/// Oscillator settings derived from a pitch and duty cycle
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pwm {
    #[allow(missing_docs)]
    pub frequency: u16,
    #[allow(missing_docs)]
    pub duty_cycle: f32,
    /// counter ticks per period
    pub clock_period: u32,
    /// counter ticks the output stays high
    pub pulse_width: u32,
}

impl Pwm {
    /// settings for `frequency` Hz at `duty_cycle` percent
    pub fn new(frequency: u16, duty_cycle: f32) -> Self {
        let clock_period = freq_to_clock_period(frequency);
        Pwm {
            frequency,
            duty_cycle,
            clock_period,
            pulse_width: duty_cycle_to_pulse_width(duty_cycle, clock_period),
        }
    }

    /// the same period with the output held low
    pub fn silent(frequency: u16) -> Self {
        Self::new(frequency, 0.0)
    }

    /// true when this setting makes no sound
    pub fn is_silent(&self) -> bool {
        self.pulse_width == 0
    }
}

/// Counter ticks in one period of `frequency`; 0 Hz gives a zero period
pub fn freq_to_clock_period(frequency: u16) -> u32 {
    if frequency == 0 {
        0
    } else {
        PWM_CLOCK_HZ / frequency as u32
    }
}

/// Counter ticks the output is high for `duty_cycle` percent of `clock_period`
pub fn duty_cycle_to_pulse_width(duty_cycle: f32, clock_period: u32) -> u32 {
    (duty_cycle * clock_period as f32 / 100.0) as u32
}
