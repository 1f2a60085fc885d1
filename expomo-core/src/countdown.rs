//! Single-interval countdown driven by externally delivered ticks.
//!
//! The countdown owns no clock. The event loop delivers one `tick()` per elapsed
//! second and the countdown decides whether that tick counts. Ticks that arrive
//! while stopped are dropped on the floor, so pausing never queues decrements.

use std::time::Duration;

/// Result of delivering one tick to a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown was stopped or already expired; nothing changed.
    Ignored,
    /// One unit was subtracted and time remains.
    Decremented,
    /// This tick brought the remaining duration to zero.
    TimedOut,
}

/// A pausable countdown over a single interval.
///
/// Once expired, the countdown stays inert until [`Countdown::reset`] loads a
/// new duration: `start()` refuses to run it and further ticks are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    running: bool,
}

impl Countdown {
    /// Amount subtracted by each accepted tick.
    pub const RESOLUTION: Duration = Duration::from_secs(1);

    /// Creates a stopped countdown holding `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    pub fn start(&mut self) {
        if self.running || self.is_expired() {
            return;
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Replaces the countdown with a fresh, stopped one holding `duration`.
    ///
    /// The old value is discarded entirely rather than patched so no partial
    /// second from the previous interval leaks into the next one.
    pub fn reset(&mut self, duration: Duration) {
        *self = Self::new(duration);
    }

    /// Applies one elapsed unit of time.
    ///
    /// Returns [`Tick::TimedOut`] exactly once per armed countdown: on the tick that
    /// reaches zero. The countdown stops itself at that point.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(Self::RESOLUTION);
        if self.remaining.is_zero() {
            self.running = false;
            Tick::TimedOut
        } else {
            Tick::Decremented
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// The duration this countdown was armed with.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the interval already elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        1.0 - self.remaining.as_secs_f64() / self.duration.as_secs_f64()
    }
}

/// Formats a duration as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
