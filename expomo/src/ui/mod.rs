//! UI rendering module for expomo.
//!
//! Re-exports `render()` as the single entry point called by the event loop's
//! `terminal.draw()` closure. Rendering only reads `AppState`; nothing drawn here
//! can change the session.
//!
//! Layout arithmetic and the status bar live in `layout.rs`, the two screens in
//! `target_entry.rs` and `timer_view.rs`, the modal in `help.rs`.

mod layout;
pub mod help;
pub mod keybindings;
pub mod target_entry;
pub mod timer_view;

use expomo_core::SessionState;
use ratatui::Frame;

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, render_status_bar};

/// Renders one complete frame: the screen for the current session state, the
/// status bar, and the help overlay when open.
///
/// Called exactly once per `AppEvent::Render` inside `terminal.draw()`.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let [timer_box, status_bar] = compute_layout(frame);
    let session = &state.session;

    match session.state() {
        SessionState::CollectingTarget => {
            target_entry::render_target_entry(frame, timer_box, session, theme)
        }
        SessionState::Running | SessionState::Paused | SessionState::IntervalStopped => {
            timer_view::render_timer(frame, timer_box, session, theme)
        }
    }

    render_status_bar(frame, status_bar, session, theme);

    // Rendered last so it sits on top.
    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, session.schedule(), theme, state.help_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expomo_core::notify::testing::Silent;
    use expomo_core::{Command, Schedule, TimerSession};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, state, &Theme::dark()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn schedule() -> Schedule {
        Schedule {
            work: Duration::from_secs(90),
            short_break: Duration::from_secs(30),
            long_break: Duration::from_secs(60),
            long_break_every: 1,
        }
    }

    fn started(target: &str) -> AppState {
        let mut session = TimerSession::new(schedule());
        session.apply(Command::SetTargetInput(target.into())).unwrap();
        session.apply(Command::SetTarget).unwrap();
        AppState::new(session)
    }

    #[test]
    fn target_entry_shows_prompt_and_buffer() {
        let mut state = AppState::new(TimerSession::new(schedule()));
        let screen = draw(&state);
        assert!(screen.contains("How many pomodoros"));
        assert!(screen.contains("Enter expected pomodoros"));
        assert!(screen.contains("TARGET"));
        assert!(!screen.contains("help"), "help is not reachable while typing");

        state.session.apply(Command::SetTargetInput("7".into())).unwrap();
        assert!(draw(&state).contains("> 7"));
    }

    #[test]
    fn running_screen_shows_clock_counts_and_hints() {
        let state = started("3");
        let screen = draw(&state);
        assert!(screen.contains("RUNNING"));
        assert!(screen.contains("Work"));
        assert!(screen.contains("01:30"));
        assert!(screen.contains("Pomodoros: 0 / 3"));
        assert!(screen.contains("pause"));
        assert!(screen.contains("reset"));
    }

    #[test]
    fn unset_target_hides_expected_count() {
        let state = started("0");
        let screen = draw(&state);
        assert!(screen.contains("Pomodoros: 0"));
        assert!(!screen.contains("0 / 0"));
    }

    #[test]
    fn paused_screen_offers_resume() {
        let mut state = started("3");
        state.session.apply(Command::Pause).unwrap();
        let screen = draw(&state);
        assert!(screen.contains("PAUSED"));
        assert!(screen.contains("resume"));
    }

    #[test]
    fn between_intervals_shows_next_interval() {
        let mut state = started("2");
        for _ in 0..90 {
            state.session.tick(&Silent);
        }
        let screen = draw(&state);
        assert!(screen.contains("STOPPED"));
        assert!(screen.contains("Up next: Long break"));
        assert!(screen.contains("01:00"));
        assert!(screen.contains("Pomodoros: 1 / 2"));
        assert!(screen.contains("change target"));
    }

    #[test]
    fn help_overlay_is_drawn_on_top() {
        let mut state = started("1");
        state.open_help();
        let screen = draw(&state);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Pause, resume"));
    }

    #[test]
    fn rendering_does_not_mutate_session() {
        let state = started("3");
        let before = state.session.countdown().clone();
        draw(&state);
        draw(&state);
        assert_eq!(state.session.countdown(), &before);
        assert_eq!(state.session.state(), SessionState::Running);
    }
}
