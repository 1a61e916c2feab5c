use tracing::trace;

use super::{Pwm, Tone};
use crate::types::{Tick, ToneOutput};

/// milliseconds between pitch slide steps
pub const SLIDE_INTERVAL: Tick = 5;

#[derive(Debug, Copy, Clone)]
struct ActiveTone {
    frequency: u16,
    duty_cycle: f32,
    slide: i16,
    duration: u32,
    started: Tick,
    last_slide: Tick,
}

impl ActiveTone {
    fn start(tone: Tone, now: Tick) -> Self {
        ActiveTone {
            frequency: tone.frequency,
            duty_cycle: tone.duty_cycle,
            slide: tone.slide,
            duration: tone.duration,
            started: now,
            last_slide: now,
        }
    }

    fn is_playing(&self, now: Tick) -> bool {
        now.wrapping_sub(self.started) < self.duration
    }

    fn apply_slide(&mut self, now: Tick) {
        if now.wrapping_sub(self.last_slide) >= SLIDE_INTERVAL {
            let next = self.frequency as i32 + self.slide as i32;
            self.frequency = next.clamp(0, u16::MAX as i32) as u16;
            self.last_slide = now;
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct MelodyCursor {
    tones: &'static [Tone],
    index: usize,
}

/// Plays tones and melodies through a [ToneOutput], one update per tick.
///
/// A new tone replaces whatever tone is sounding. A melody keeps its place
/// when a tone interrupts it and carries on with its next note once that tone
/// has finished.
#[derive(Debug, Copy, Clone, Default)]
pub struct ToneEngine {
    tone: Option<ActiveTone>,
    melody: Option<MelodyCursor>,
    muted: bool,
    halted: bool,
}

impl ToneEngine {
    /// a silent engine; the oscillator is assumed to be running until the first update halts it
    pub fn new(muted: bool) -> Self {
        ToneEngine {
            tone: None,
            melody: None,
            muted,
            halted: false,
        }
    }

    /// start `tone` now, superseding any tone already sounding
    pub fn play_sound(&mut self, tone: Tone, now: Tick) {
        self.tone = Some(ActiveTone::start(tone, now));
    }

    /// Start a melody from its first note. Later notes follow on the update
    /// after each note ends.
    pub fn play_melody(&mut self, tones: &'static [Tone], now: Tick) {
        match tones.first() {
            Some(first) => {
                self.melody = Some(MelodyCursor { tones, index: 0 });
                self.play_sound(*first, now);
            }
            None => self.melody = None,
        }
    }

    /// drop the current tone and any melody
    pub fn stop(&mut self) {
        self.tone = None;
        self.melody = None;
    }

    #[allow(missing_docs)]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// mute or unmute; a muted engine keeps time but emits silence
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// flip the mute flag, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// true while a tone is sounding
    pub fn is_tone_playing(&self, now: Tick) -> bool {
        self.tone.map_or(false, |t| t.is_playing(now))
    }

    /// true while a melody still has notes to play
    pub fn is_melody_playing(&self) -> bool {
        self.melody.is_some()
    }

    /// Advance the engine by one tick and program the oscillator.
    ///
    /// A sounding tone slides and is emitted (silently when muted). Otherwise
    /// an unmuted melody moves on to its next note. With nothing left to play
    /// the oscillator is halted, once.
    pub fn update<O: ToneOutput>(&mut self, now: Tick, output: &mut O) {
        if let Some(tone) = self.tone.as_mut().filter(|t| t.is_playing(now)) {
            tone.apply_slide(now);
            let pwm = if self.muted {
                Pwm::silent(tone.frequency)
            } else {
                Pwm::new(tone.frequency, tone.duty_cycle)
            };
            output.emit_tone(pwm);
            self.halted = false;
            return;
        }

        if !self.muted {
            if let Some(next) = self.next_melody_note() {
                trace!(frequency = next.frequency, "next melody note");
                self.play_sound(next, now);
                output.emit_tone(Pwm::new(next.frequency, next.duty_cycle));
                self.halted = false;
                return;
            }
        }

        if !self.halted {
            output.halt_oscillator();
            self.halted = true;
        }
    }

    fn next_melody_note(&mut self) -> Option<Tone> {
        let cursor = self.melody.as_mut()?;
        cursor.index += 1;
        match cursor.tones.get(cursor.index) {
            Some(tone) => Some(*tone),
            None => {
                self.melody = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::presets::{LADDER_MELODY, MOVE_SOUND, SNAKE_SOUND};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Emit(Pwm),
        Halt,
    }

    #[derive(Debug, Default)]
    struct RecordingOutput {
        events: Vec<Event>,
    }

    impl ToneOutput for RecordingOutput {
        fn emit_tone(&mut self, pwm: Pwm) {
            self.events.push(Event::Emit(pwm));
        }

        fn halt_oscillator(&mut self) {
            self.events.push(Event::Halt);
        }
    }

    fn run(engine: &mut ToneEngine, from: Tick, to: Tick, out: &mut RecordingOutput) {
        for now in from..to {
            engine.update(now, out);
        }
    }

    fn emitted_frequencies(out: &RecordingOutput) -> Vec<u16> {
        out.events
            .iter()
            .filter_map(|e| match e {
                Event::Emit(pwm) => Some(pwm.frequency),
                Event::Halt => None,
            })
            .collect()
    }

    #[test]
    fn test_tone_plays_for_its_duration_then_halts_once() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_sound(MOVE_SOUND, 0);
        run(&mut engine, 0, 100, &mut out);

        let emits = out.events.iter().filter(|e| matches!(e, Event::Emit(_))).count();
        assert_eq!(emits, MOVE_SOUND.duration as usize);
        assert_eq!(out.events.iter().filter(|e| **e == Event::Halt).count(), 1);
        assert_eq!(out.events.last(), Some(&Event::Halt));
    }

    #[test]
    fn test_slide_steps_every_interval() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_sound(SNAKE_SOUND, 1000);
        run(&mut engine, 1000, 1011, &mut out);

        let freqs = emitted_frequencies(&out);
        assert_eq!(freqs[0], 780);
        assert_eq!(freqs[4], 780);
        assert_eq!(freqs[5], 775);
        assert_eq!(freqs[10], 770);
    }

    #[test]
    fn test_negative_slide_floors_at_zero() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_sound(Tone::new(10, 50.0, -5, 100), 0);
        run(&mut engine, 0, 100, &mut out);

        let freqs = emitted_frequencies(&out);
        assert_eq!(*freqs.last().unwrap(), 0);
        match out.events[50] {
            Event::Emit(pwm) => {
                assert_eq!(pwm.clock_period, 0);
                assert!(pwm.is_silent());
            }
            Event::Halt => panic!("tone stopped early"),
        }
    }

    #[test]
    fn test_positive_slide_saturates() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_sound(Tone::new(u16::MAX - 3, 50.0, 5, 20), 0);
        run(&mut engine, 0, 20, &mut out);
        assert_eq!(*emitted_frequencies(&out).last().unwrap(), u16::MAX);
    }

    #[test]
    fn test_muted_tone_emits_silence_and_keeps_sliding() {
        let mut engine = ToneEngine::new(true);
        let mut out = RecordingOutput::default();
        engine.play_sound(SNAKE_SOUND, 0);
        run(&mut engine, 0, 11, &mut out);

        assert_eq!(out.events.len(), 11);
        for event in &out.events {
            match event {
                Event::Emit(pwm) => assert_eq!(pwm.pulse_width, 0),
                Event::Halt => panic!("muted tone should still be driven"),
            }
        }
        assert_eq!(emitted_frequencies(&out)[10], 770);
    }

    #[test]
    fn test_melody_plays_in_order() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_melody(&LADDER_MELODY, 0);
        assert!(engine.is_melody_playing());
        run(&mut engine, 0, 700, &mut out);

        let freqs = emitted_frequencies(&out);
        assert_eq!(freqs[0], 380);
        assert_eq!(freqs[399], 380 + 5 * 79);
        let rest = freqs.iter().position(|f| *f == 0).unwrap();
        assert_eq!(rest, 400);
        assert_eq!(freqs[rest + 100], 650);
        assert!(!engine.is_melody_playing());
        assert_eq!(out.events.last(), Some(&Event::Halt));
    }

    #[test]
    fn test_melody_note_boundaries() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_melody(&LADDER_MELODY, 0);

        // first note sounds for 400 ms, the rest starts on the next update
        run(&mut engine, 0, 400, &mut out);
        assert!(engine.is_tone_playing(399));
        engine.update(400, &mut out);
        assert_eq!(out.events.last(), Some(&Event::Emit(Pwm::new(0, 0.0))));

        run(&mut engine, 401, 500, &mut out);
        engine.update(500, &mut out);
        assert_eq!(out.events.last(), Some(&Event::Emit(Pwm::new(650, 45.0))));

        run(&mut engine, 501, 550, &mut out);
        engine.update(550, &mut out);
        assert_eq!(out.events.last(), Some(&Event::Halt));
        assert!(!engine.is_melody_playing());
    }

    #[test]
    fn test_sound_interrupts_melody_which_then_resumes() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_melody(&LADDER_MELODY, 0);
        run(&mut engine, 0, 10, &mut out);

        engine.play_sound(MOVE_SOUND, 10);
        run(&mut engine, 10, 90, &mut out);
        engine.update(90, &mut out);
        // the melody moves on to its rest
        assert_eq!(out.events.last(), Some(&Event::Emit(Pwm::new(0, 0.0))));
    }

    #[test]
    fn test_muted_melody_waits() {
        let mut engine = ToneEngine::new(false);
        let mut out = RecordingOutput::default();
        engine.play_melody(&LADDER_MELODY, 0);
        run(&mut engine, 0, 400, &mut out);

        engine.set_muted(true);
        out.events.clear();
        run(&mut engine, 400, 450, &mut out);
        assert_eq!(out.events, vec![Event::Halt]);
        assert!(engine.is_melody_playing());

        engine.set_muted(false);
        engine.update(450, &mut out);
        assert_eq!(out.events.last(), Some(&Event::Emit(Pwm::new(0, 0.0))));
    }

    #[test]
    fn test_toggle_mute_and_stop() {
        let mut engine = ToneEngine::new(false);
        assert!(engine.toggle_mute());
        assert!(engine.is_muted());
        engine.play_melody(&LADDER_MELODY, 0);
        engine.stop();
        assert!(!engine.is_melody_playing());
        assert!(!engine.is_tone_playing(0));
    }
}
