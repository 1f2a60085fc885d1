//! Target entry screen: asks how many pomodoros the session should aim for.

use expomo_core::TimerSession;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;
use crate::ui::layout::timer_block;

const PLACEHOLDER: &str = "Enter expected pomodoros";

/// Renders the prompt and the input line into `area`.
///
/// On re-entry (after `b` between intervals) the current target is shown so the
/// user knows what Tab keeps.
pub fn render_target_entry(frame: &mut Frame, area: Rect, session: &TimerSession, theme: &Theme) {
    let block = timer_block(" ExPomo ", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [prompt_row, _, input_row, _, note_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner.inner(Margin { vertical: 1, horizontal: 2 }));

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "How many pomodoros today?",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        prompt_row,
    );

    let input = session.target_input();
    let input_line = if input.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.hint_key)),
            Span::styled("█", Style::default().fg(theme.input)),
            Span::styled(PLACEHOLDER, Style::default().fg(theme.hint_text)),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.hint_key)),
            Span::styled(input.to_owned(), Style::default().fg(theme.input)),
            Span::styled("█", Style::default().fg(theme.input)),
        ])
    };
    frame.render_widget(Paragraph::new(input_line), input_row);

    if session.has_armed_once() {
        let note = format!(
            "Current target: {}, completed: {}",
            session.expected_work_intervals(),
            session.completed_work_intervals()
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(note, Style::default().fg(theme.hint_text))))
                .alignment(Alignment::Center),
            note_row,
        );
    }
}
