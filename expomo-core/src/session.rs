//! The pomodoro session state machine.
//!
//! `TimerSession` is the single mutable aggregate. User intent arrives as a
//! [`Command`] through [`TimerSession::apply`]; elapsed time arrives through
//! [`TimerSession::tick`]. Both run on the event-loop thread, so nothing here is
//! shared or locked.
//!
//! # Transitions
//!
//! ```text
//! CollectingTarget --SetTarget/Start--> Running <--Pause/Resume--> Paused
//! Running --timeout--> IntervalStopped --Start--> Running
//! IntervalStopped --Back--> CollectingTarget
//! Running/Paused --Reset--> Paused
//! ```
//!
//! A command that does not apply to the current state is ignored.

use std::time::Duration;

use tracing::{debug, info};

use crate::countdown::{Countdown, Tick};
use crate::error::SessionError;
use crate::notify::Notifier;
use crate::schedule::{IntervalKind, Schedule};

/// Title attached to every interval-finished notification.
pub const NOTIFICATION_TITLE: &str = "ExPomo";

/// User-facing mode of the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the user to type the expected number of work intervals.
    #[default]
    CollectingTarget,
    /// The countdown is decrementing.
    Running,
    /// The countdown is armed but halted mid-interval.
    Paused,
    /// An interval just finished; the next one is loaded and waiting.
    IntervalStopped,
}

/// A discrete instruction produced by the input adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Appends text to the target buffer.
    SetTargetInput(String),
    /// Removes the last character from the target buffer.
    TargetBackspace,
    /// Commits the target buffer and starts the session.
    SetTarget,
    Start,
    Pause,
    Resume,
    /// Reloads the current interval at full length, paused.
    Reset,
    /// Returns from between-interval to target entry.
    Back,
    Quit,
}

/// Whether the caller should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Emitted by [`TimerSession::tick`] when an interval runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalCompleted {
    /// The kind of interval that just finished.
    pub finished: IntervalKind,
    /// The kind now loaded in the countdown.
    pub next: IntervalKind,
    /// Full length of the newly loaded interval.
    pub next_duration: Duration,
}

/// Aggregate root for one pomodoro run.
#[derive(Debug, Clone)]
pub struct TimerSession {
    state: SessionState,
    schedule: Schedule,
    expected_work_intervals: u32,
    completed_work_intervals: u32,
    current_interval_kind: IntervalKind,
    countdown: Countdown,
    target_input: String,
    /// Set once the first interval has been loaded; later starts resume instead.
    has_armed_once: bool,
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new(Schedule::default())
    }
}

impl TimerSession {
    /// Creates a session in `CollectingTarget` with nothing armed.
    ///
    /// Intervals shorter than one tick are lengthened to one tick; an empty
    /// countdown could never run and so could never time out.
    pub fn new(schedule: Schedule) -> Self {
        let schedule = schedule.at_least(Countdown::RESOLUTION);
        Self {
            state: SessionState::CollectingTarget,
            schedule,
            expected_work_intervals: 0,
            completed_work_intervals: 0,
            current_interval_kind: IntervalKind::Work,
            countdown: Countdown::new(schedule.work),
            target_input: String::new(),
            has_armed_once: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Target count; zero means no target has been set.
    pub fn expected_work_intervals(&self) -> u32 {
        self.expected_work_intervals
    }

    pub fn completed_work_intervals(&self) -> u32 {
        self.completed_work_intervals
    }

    pub fn current_interval_kind(&self) -> IntervalKind {
        self.current_interval_kind
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    pub fn has_armed_once(&self) -> bool {
        self.has_armed_once
    }

    /// Returns `true` when the loaded interval is a long break.
    pub fn is_long_break(&self) -> bool {
        self.current_interval_kind == IntervalKind::Break
            && self.schedule.is_long_break(self.completed_work_intervals)
    }

    /// Applies one user command.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTarget`] when the target buffer cannot be
    /// parsed. The caller is expected to end the session; no state was changed.
    pub fn apply(&mut self, command: Command) -> Result<Flow, SessionError> {
        debug!(?command, state = ?self.state, "apply command");
        match command {
            Command::SetTargetInput(text) => self.push_target_input(&text),
            Command::TargetBackspace => {
                if self.state == SessionState::CollectingTarget {
                    self.target_input.pop();
                }
            }
            Command::SetTarget => {
                if self.state == SessionState::CollectingTarget {
                    self.commit_target()?;
                    self.start();
                }
            }
            Command::Start => self.start_command()?,
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Reset => self.reset(),
            Command::Back => self.back(),
            Command::Quit => {
                info!("quit requested");
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Delivers one elapsed second.
    ///
    /// When the tick finishes the current interval the next one is loaded
    /// (stopped), the session moves to `IntervalStopped` and `notifier` is called
    /// exactly once. Ticks outside `Running` are ignored.
    pub fn tick(&mut self, notifier: &dyn Notifier) -> Option<IntervalCompleted> {
        if self.state != SessionState::Running {
            return None;
        }
        match self.countdown.tick() {
            Tick::TimedOut => Some(self.complete_interval(notifier)),
            Tick::Decremented | Tick::Ignored => None,
        }
    }

    fn push_target_input(&mut self, text: &str) {
        if self.state == SessionState::CollectingTarget {
            self.target_input.push_str(text);
        }
    }

    /// Parses and stores the target. Leaves the session untouched on failure.
    fn commit_target(&mut self) -> Result<(), SessionError> {
        let input = self.target_input.as_str();
        let target = input
            .parse::<u32>()
            .map_err(|source| SessionError::InvalidTarget { input: input.to_owned(), source })?;
        info!(expected = target, "target set");
        self.expected_work_intervals = target;
        self.target_input.clear();
        Ok(())
    }

    fn start_command(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::CollectingTarget => {
                if !self.target_input.is_empty() {
                    self.commit_target()?;
                }
                self.start();
            }
            SessionState::IntervalStopped => self.start(),
            SessionState::Running | SessionState::Paused => {}
        }
        Ok(())
    }

    /// Arms the first interval, or resumes the loaded one, and runs it.
    fn start(&mut self) {
        if !self.has_armed_once {
            let duration = self
                .schedule
                .duration_for(self.current_interval_kind, self.completed_work_intervals);
            self.countdown.reset(duration);
            self.has_armed_once = true;
            debug!(kind = ?self.current_interval_kind, ?duration, "countdown armed");
        }
        self.countdown.start();
        self.state = SessionState::Running;
        debug!(kind = ?self.current_interval_kind, "running");
    }

    fn pause(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        self.countdown.stop();
        self.state = SessionState::Paused;
        debug!(remaining = ?self.countdown.remaining(), "paused");
    }

    fn resume(&mut self) {
        if self.state != SessionState::Paused {
            return;
        }
        self.countdown.start();
        self.state = SessionState::Running;
        debug!(remaining = ?self.countdown.remaining(), "resumed");
    }

    fn reset(&mut self) {
        if !matches!(self.state, SessionState::Running | SessionState::Paused) {
            return;
        }
        let duration = self
            .schedule
            .duration_for(self.current_interval_kind, self.completed_work_intervals);
        self.countdown.reset(duration);
        self.state = SessionState::Paused;
        debug!(kind = ?self.current_interval_kind, ?duration, "interval reset");
    }

    fn back(&mut self) {
        if self.state != SessionState::IntervalStopped {
            return;
        }
        self.target_input.clear();
        self.state = SessionState::CollectingTarget;
        debug!("back to target entry");
    }

    fn complete_interval(&mut self, notifier: &dyn Notifier) -> IntervalCompleted {
        let finished = self.current_interval_kind;
        if finished == IntervalKind::Work {
            self.completed_work_intervals += 1;
        }
        let (next, next_duration) =
            self.schedule.next_interval(finished, self.completed_work_intervals);
        self.current_interval_kind = next;
        self.countdown.reset(next_duration);
        self.state = SessionState::IntervalStopped;
        info!(
            ?finished,
            ?next,
            completed = self.completed_work_intervals,
            expected = self.expected_work_intervals,
            "interval finished"
        );

        notifier.notify(NOTIFICATION_TITLE, &self.completion_message(finished));

        IntervalCompleted { finished, next, next_duration }
    }

    fn completion_message(&self, finished: IntervalKind) -> String {
        match finished {
            IntervalKind::Work if self.expected_work_intervals > 0 => format!(
                "🍅 Finished {} of {} 🍅",
                self.completed_work_intervals, self.expected_work_intervals
            ),
            IntervalKind::Work => "🍅 Finished 🍅".to_owned(),
            IntervalKind::Break => "Break over, back to work".to_owned(),
        }
    }
}
