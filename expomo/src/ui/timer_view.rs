//! Timer screen: shown while running, paused, and between intervals.
//!
//! Reads the session only. Layout inside the box, top to bottom: interval label,
//! clock, progress gauge, pomodoro counts.

use expomo_core::{format_clock, IntervalKind, SessionState, TimerSession};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use crate::theme::Theme;
use crate::ui::layout::timer_block;

/// Human label for the interval currently loaded.
pub fn interval_label(session: &TimerSession) -> &'static str {
    match session.current_interval_kind() {
        IntervalKind::Work => "Work",
        IntervalKind::Break if session.is_long_break() => "Long break",
        IntervalKind::Break => "Short break",
    }
}

/// `completed / expected` when a target is set, otherwise just the count.
pub fn counts_label(session: &TimerSession) -> String {
    let completed = session.completed_work_intervals();
    match session.expected_work_intervals() {
        0 => format!("Pomodoros: {completed}"),
        expected => format!("Pomodoros: {completed} / {expected}"),
    }
}

fn accent(session: &TimerSession, theme: &Theme) -> Color {
    match session.current_interval_kind() {
        IntervalKind::Work => theme.work,
        IntervalKind::Break if session.is_long_break() => theme.long_break,
        IntervalKind::Break => theme.short_break,
    }
}

/// Renders the timer box into `area`.
pub fn render_timer(frame: &mut Frame, area: Rect, session: &TimerSession, theme: &Theme) {
    let block = timer_block(" ExPomo ", session.countdown().is_running(), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label_row, _, clock_row, gauge_row, _, counts_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner.inner(Margin { vertical: 1, horizontal: 2 }));

    let color = accent(session, theme);

    let label = if session.state() == SessionState::IntervalStopped {
        format!("Up next: {}", interval_label(session))
    } else {
        interval_label(session).to_owned()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, Style::default().fg(color))))
            .alignment(Alignment::Center),
        label_row,
    );

    let clock = format_clock(session.countdown().remaining());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            clock,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        clock_row,
    );

    frame.render_widget(
        Gauge::default()
            .ratio(session.countdown().progress().clamp(0.0, 1.0))
            .label("")
            .use_unicode(true)
            .gauge_style(Style::default().fg(color)),
        gauge_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            counts_label(session),
            Style::default().fg(theme.hint_text),
        )))
        .alignment(Alignment::Center),
        counts_row,
    );
}
