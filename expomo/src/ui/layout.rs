//! Screen geometry and shared chrome for expomo.
//!
//! Pure layout arithmetic plus the bordered box and status bar every screen
//! shares. Called inside `terminal.draw()` on every render, so each frame picks up
//! the current terminal size.

use expomo_core::{SessionState, TimerSession};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::theme::Theme;

/// Width of the centred timer box, in columns.
const BOX_WIDTH: u16 = 48;
/// Height of the centred timer box, in rows (including borders).
const BOX_HEIGHT: u16 = 11;

/// Returns `[timer_box, status_bar]` for the current frame.
///
/// The box is centred in the area above the 1-row status bar and shrinks with the
/// terminal when it is smaller than the box.
pub fn compute_layout(frame: &Frame) -> [Rect; 2] {
    let [main_area, status_bar] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
    let timer_box = main_area.centered(
        Constraint::Length(BOX_WIDTH.min(main_area.width)),
        Constraint::Length(BOX_HEIGHT.min(main_area.height)),
    );
    [timer_box, status_bar]
}

/// Builds the bordered box around the timer.
///
/// Thick, active-colored border while the countdown runs; plain and dimmed
/// otherwise, so a paused timer is recognisable at a glance.
pub fn timer_block<'a>(title: &'a str, is_running: bool, theme: &'a Theme) -> Block<'a> {
    let (border_type, color) = if is_running {
        (BorderType::Thick, theme.border_active)
    } else {
        (BorderType::Rounded, theme.border_inactive)
    };
    Block::bordered()
        .title(title)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
}

/// Short uppercase label for the session mode.
pub fn mode_label(state: SessionState) -> &'static str {
    match state {
        SessionState::CollectingTarget => "TARGET",
        SessionState::Running => "RUNNING",
        SessionState::Paused => "PAUSED",
        SessionState::IntervalStopped => "STOPPED",
    }
}

/// `(key, description)` pairs valid on the current screen.
pub fn command_hints(session: &TimerSession) -> Vec<(&'static str, &'static str)> {
    let mut hints = match session.state() {
        SessionState::CollectingTarget => {
            let mut hints = vec![("enter", "set target")];
            if session.has_armed_once() {
                hints.push(("tab", "keep target"));
            }
            hints
        }
        SessionState::Running => vec![("space", "pause"), ("r", "reset")],
        SessionState::Paused => vec![("space", "resume"), ("r", "reset")],
        SessionState::IntervalStopped => vec![("space", "start next"), ("b", "change target")],
    };
    if session.state() != SessionState::CollectingTarget {
        hints.push(("?", "help"));
    }
    hints.push(("q", "quit"));
    hints
}

/// Renders the 1-row status bar: mode badge followed by command hints.
///
/// Never renders blank; every state has at least the quit hint.
pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &TimerSession, theme: &Theme) {
    let state = session.state();
    let mode_fg = match state {
        SessionState::CollectingTarget => theme.mode_target,
        SessionState::Running => theme.mode_running,
        SessionState::Paused => theme.mode_paused,
        SessionState::IntervalStopped => theme.mode_stopped,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", mode_label(state)),
        Style::default().fg(mode_fg).add_modifier(Modifier::BOLD),
    )];
    for (key, desc) in command_hints(session) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(key, Style::default().fg(theme.hint_key)));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(desc));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
