//! Integration tests for the session state machine.
//!
//! Exercises: target entry, first arming, work/break alternation, the long-break
//! cadence, notification dispatch and the fatal invalid-target path.

use std::cell::RefCell;
use std::time::Duration;

use expomo_core::{
    Command, IntervalKind, Notifier, Schedule, SessionError, SessionState, TimerSession,
};

/// Keeps every notification so tests can count and inspect them.
#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<(String, String)>>,
}

impl Recorder {
    fn new() -> Self {
        Self::default()
    }

    fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }
}

impl Notifier for Recorder {
    fn notify(&self, title: &str, message: &str) {
        self.sent.borrow_mut().push((title.to_owned(), message.to_owned()));
    }
}

fn schedule() -> Schedule {
    Schedule {
        work: Duration::from_secs(5),
        short_break: Duration::from_secs(2),
        long_break: Duration::from_secs(3),
        long_break_every: 4,
    }
}

/// Ticks until the running interval times out. Panics if it never does.
fn run_out(session: &mut TimerSession, notifier: &Recorder) {
    for _ in 0..3600 {
        if session.tick(notifier).is_some() {
            return;
        }
    }
    panic!("interval never timed out");
}

#[test]
fn first_work_interval_end_to_end() {
    let mut session = TimerSession::new(schedule());
    assert_eq!(session.state(), SessionState::CollectingTarget);
    assert_eq!(session.expected_work_intervals(), 0);

    session.apply(Command::SetTargetInput("3".into())).unwrap();
    session.apply(Command::Start).unwrap();
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.current_interval_kind(), IntervalKind::Work);
    assert_eq!(session.expected_work_intervals(), 3);
    assert_eq!(session.countdown().remaining(), Duration::from_secs(5));

    let notifier = Recorder::new();
    for _ in 0..4 {
        assert!(session.tick(&notifier).is_none());
    }
    let done = session.tick(&notifier).expect("fifth tick times out");

    assert_eq!(done.finished, IntervalKind::Work);
    assert_eq!(session.completed_work_intervals(), 1);
    assert_eq!(session.current_interval_kind(), IntervalKind::Break);
    assert_eq!(session.state(), SessionState::IntervalStopped);
    assert_eq!(session.countdown().remaining(), Duration::from_secs(2));
    assert!(!session.countdown().is_running());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1, "exactly one notification per finished interval");
    assert_eq!(sent[0].0, "ExPomo");
    assert!(sent[0].1.contains("1 of 3"));
}

#[test]
fn ticks_after_timeout_are_discarded() {
    let mut session = TimerSession::new(schedule());
    session.apply(Command::SetTargetInput("1".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();

    let notifier = Recorder::new();
    run_out(&mut session, &notifier);
    let remaining = session.countdown().remaining();
    for _ in 0..10 {
        assert!(session.tick(&notifier).is_none());
    }
    assert_eq!(session.countdown().remaining(), remaining);
    assert_eq!(notifier.sent().len(), 1);
}

#[test]
fn fourth_work_interval_loads_long_break() {
    let mut session = TimerSession::new(schedule());
    session.apply(Command::SetTargetInput("8".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();
    let notifier = Recorder::new();

    // Three full work+break cycles.
    for _ in 0..3 {
        run_out(&mut session, &notifier);
        assert!(!session.is_long_break());
        session.apply(Command::Start).unwrap();
        run_out(&mut session, &notifier);
        session.apply(Command::Start).unwrap();
    }
    assert_eq!(session.completed_work_intervals(), 3);
    assert_eq!(session.current_interval_kind(), IntervalKind::Work);

    let done = {
        let mut out = None;
        while out.is_none() {
            out = session.tick(&notifier);
        }
        out.unwrap()
    };
    assert_eq!(session.completed_work_intervals(), 4);
    assert_eq!(done.next, IntervalKind::Break);
    assert_eq!(done.next_duration, Duration::from_secs(3));
    assert!(session.is_long_break());
    assert_eq!(session.countdown().remaining(), Duration::from_secs(3));
    assert_eq!(notifier.sent().len(), 7);
}

#[test]
fn invalid_target_is_fatal_and_leaves_target_unset() {
    let mut session = TimerSession::new(schedule());
    session.apply(Command::SetTargetInput("abc".into())).unwrap();

    let err = session.apply(Command::SetTarget).unwrap_err();
    assert!(matches!(err, SessionError::InvalidTarget { ref input, .. } if input == "abc"));
    assert_eq!(session.expected_work_intervals(), 0);
    assert_eq!(session.state(), SessionState::CollectingTarget);
    assert!(!session.has_armed_once());
}

#[test]
fn empty_target_is_fatal() {
    let mut session = TimerSession::new(schedule());
    assert!(session.apply(Command::SetTarget).is_err());
}

#[test]
fn commands_out_of_state_are_ignored() {
    let mut session = TimerSession::new(schedule());
    for command in [Command::Pause, Command::Resume, Command::Reset, Command::Back] {
        session.apply(command).unwrap();
        assert_eq!(session.state(), SessionState::CollectingTarget);
        assert!(!session.countdown().is_running());
    }

    session.apply(Command::SetTargetInput("2".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();
    session.apply(Command::Start).unwrap();
    session.apply(Command::Resume).unwrap();
    session.apply(Command::Back).unwrap();
    assert_eq!(session.state(), SessionState::Running);
    assert!(session.tick(&Recorder::new()).is_none());
    assert_eq!(session.countdown().remaining(), Duration::from_secs(4));
}

#[test]
fn running_tracks_countdown_activity() {
    let mut session = TimerSession::new(schedule());
    session.apply(Command::SetTargetInput("2".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();

    let steps = [
        Command::Pause,
        Command::Resume,
        Command::Reset,
        Command::Resume,
        Command::Pause,
        Command::Pause,
        Command::Resume,
    ];
    for command in steps {
        session.apply(command).unwrap();
        assert_eq!(
            session.state() == SessionState::Running,
            session.countdown().is_running(),
        );
    }
}

/// Drives a session with target 8 to the long break after the fourth work interval.
fn reach_long_break(session: &mut TimerSession, notifier: &Recorder) {
    session.apply(Command::SetTargetInput("8".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();
    for _ in 0..3 {
        run_out(session, notifier);
        session.apply(Command::Start).unwrap();
        run_out(session, notifier);
        session.apply(Command::Start).unwrap();
    }
    run_out(session, notifier);
}

#[test]
fn reset_during_long_break_reloads_long_break() {
    let mut session = TimerSession::new(schedule());
    let notifier = Recorder::new();
    reach_long_break(&mut session, &notifier);
    assert_eq!(session.completed_work_intervals(), 4);
    assert!(session.is_long_break());

    session.apply(Command::Start).unwrap();
    assert!(session.tick(&notifier).is_none());
    assert_eq!(session.countdown().remaining(), Duration::from_secs(2));

    session.apply(Command::Reset).unwrap();
    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(session.countdown().remaining(), schedule().long_break);
    assert!(!session.countdown().is_running());
    assert!(session.is_long_break());
}

#[test]
fn reset_during_short_break_reloads_short_break() {
    let mut session = TimerSession::new(schedule());
    session.apply(Command::SetTargetInput("2".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();
    let notifier = Recorder::new();
    run_out(&mut session, &notifier);

    session.apply(Command::Start).unwrap();
    assert!(session.tick(&notifier).is_none());
    session.apply(Command::Reset).unwrap();

    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(session.current_interval_kind(), IntervalKind::Break);
    assert_eq!(session.countdown().remaining(), schedule().short_break);
}

#[test]
fn zero_length_work_interval_completes_on_first_tick() {
    let mut session = TimerSession::new(Schedule { work: Duration::ZERO, ..schedule() });
    session.apply(Command::SetTargetInput("1".into())).unwrap();
    session.apply(Command::SetTarget).unwrap();
    let notifier = Recorder::new();

    for _ in 0..3 {
        assert_eq!(
            session.state() == SessionState::Running,
            session.countdown().is_running(),
        );
        session.tick(&notifier);
    }
    assert_eq!(session.state(), SessionState::IntervalStopped);
    assert_eq!(session.completed_work_intervals(), 1);
    assert_eq!(notifier.sent().len(), 1);
}
