//! Interval alternation rules.
//!
//! Work is always followed by a break and a break by work. Every
//! `long_break_every`-th completed work interval earns a long break instead of a
//! short one. Whether a break is long is derived from the completed counter each
//! time it is needed; it is never stored.

use std::time::Duration;

/// Kind of the interval currently loaded in the countdown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    #[default]
    Work,
    Break,
}

/// Configured interval durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub work: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    /// Completed work intervals between long breaks. Zero disables long breaks.
    pub long_break_every: u32,
}

impl Default for Schedule {
    /// The classic 25 / 5 / 15 minute cycle with a long break every 4th interval.
    fn default() -> Self {
        Self {
            work: Duration::from_secs(25 * 60),
            short_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            long_break_every: 4,
        }
    }
}

impl Schedule {
    /// Returns `true` when a break following `completed` work intervals is long.
    ///
    /// Zero completed intervals never earns a long break.
    pub fn is_long_break(&self, completed: u32) -> bool {
        self.long_break_every > 0 && completed > 0 && completed % self.long_break_every == 0
    }

    /// Full duration of an interval of `kind` given the completed counter.
    pub fn duration_for(&self, kind: IntervalKind, completed: u32) -> Duration {
        match kind {
            IntervalKind::Work => self.work,
            IntervalKind::Break if self.is_long_break(completed) => self.long_break,
            IntervalKind::Break => self.short_break,
        }
    }

    /// Decides the interval that follows `prior`.
    ///
    /// `completed` must already include the interval that just finished.
    pub fn next_interval(&self, prior: IntervalKind, completed: u32) -> (IntervalKind, Duration) {
        let next = match prior {
            IntervalKind::Work => IntervalKind::Break,
            IntervalKind::Break => IntervalKind::Work,
        };
        (next, self.duration_for(next, completed))
    }

    /// Returns a copy with every interval raised to at least `floor`.
    pub fn at_least(self, floor: Duration) -> Self {
        Self {
            work: self.work.max(floor),
            short_break: self.short_break.max(floor),
            long_break: self.long_break.max(floor),
            long_break_every: self.long_break_every,
        }
    }
}
