use crate::types::Tick;

/// A periodic deadline checked against the shared clock.
///
/// Firing stores the current time rather than advancing by one period, so a
/// late poll never triggers a burst of catch-up work.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timer {
    period: Tick,
    last: Tick,
}

impl Timer {
    /// a timer that first comes due `period` after `now`
    pub const fn new(period: Tick, now: Tick) -> Self {
        Timer { period, last: now }
    }

    #[allow(missing_docs)]
    pub fn period(&self) -> Tick {
        self.period
    }

    #[allow(missing_docs)]
    pub fn set_period(&mut self, period: Tick) {
        self.period = period;
    }

    /// whether a full period has passed since the timer last fired
    pub fn is_due(&self, now: Tick) -> bool {
        self.is_due_after(now, 0)
    }

    /// whether a full period plus `extra` has passed since the timer last fired
    pub fn is_due_after(&self, now: Tick, extra: Tick) -> bool {
        now.wrapping_sub(self.last) >= self.period.saturating_add(extra)
    }

    /// restart the period from `now`
    pub fn reset(&mut self, now: Tick) {
        self.last = now;
    }

    /// if due, restart from `now` and return true
    pub fn fire(&mut self, now: Tick) -> bool {
        if self.is_due(now) {
            self.reset(now);
            true
        } else {
            false
        }
    }
}
