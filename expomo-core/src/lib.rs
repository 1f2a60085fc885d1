//! expomo-core: the pomodoro timer engine.
//!
//! Pure state and rules, no terminal or OS access:
//!
//! - [`countdown`]: a tick-driven, pausable single-interval countdown.
//! - [`schedule`]: which interval follows which, and for how long.
//! - [`session`]: the user-facing state machine tying the two together.
//! - [`notify`]: the seam through which finished intervals are announced.

pub mod countdown;
pub mod error;
pub mod notify;
pub mod schedule;
pub mod session;

pub use countdown::{format_clock, Countdown, Tick};
pub use error::SessionError;
pub use notify::Notifier;
pub use schedule::{IntervalKind, Schedule};
pub use session::{Command, Flow, IntervalCompleted, SessionState, TimerSession};
