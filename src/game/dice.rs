use rand::Rng;

/// The die: a face that cycles while rolling, and a random result once stopped
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dice {
    rolling: bool,
    face: u8,
    finished: bool,
}

impl Dice {
    /// a die at rest showing 1
    pub fn new() -> Self {
        Dice {
            rolling: false,
            face: 1,
            finished: false,
        }
    }

    /// whether the face is currently cycling
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// the face currently displayed
    pub fn face(&self) -> u8 {
        self.face
    }

    /// Start or stop rolling, returning whether the die now rolls. Stopping
    /// leaves a finished roll to be collected with [Dice::take_finished].
    pub fn toggle(&mut self) -> bool {
        if self.rolling {
            self.finished = true;
        }
        self.rolling = !self.rolling;
        self.rolling
    }

    /// true exactly once after each stop
    pub fn take_finished(&mut self) -> bool {
        std::mem::replace(&mut self.finished, false)
    }

    /// show the next face, 6 wrapping to 1
    pub fn advance_face(&mut self) -> u8 {
        self.face = self.face % 6 + 1;
        self.face
    }

    /// settle on a random face from 1 to 6
    pub fn roll<R: Rng>(&mut self, rng: &mut R) -> u8 {
        self.face = rng.gen_range(1..=6);
        self.face
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}
