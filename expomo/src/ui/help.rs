//! Help overlay renderer for expomo.
//!
//! Draws a centred modal over the timer box using ratatui's `Clear` widget to
//! erase the background first, inside the same `terminal.draw()` closure as the
//! rest of the frame.

use expomo_core::Schedule;
use ratatui::{
    Frame,
    layout::Constraint,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay as a centred modal.
///
/// Skipped on terminals narrower than 40 columns, where the modal would not fit
/// a single line of help.
///
/// # Arguments
///
/// * `frame`: current render frame provided by `terminal.draw()`
/// * `schedule`: configured durations, listed at the bottom of the help
/// * `theme`: active color theme (supplies `border_active` for the modal border)
/// * `help_scroll`: vertical scroll offset; j/k in the overlay mutate this
pub fn render_help_overlay(frame: &mut Frame, schedule: &Schedule, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 40 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(80), Constraint::Percentage(80));

    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help  (j/k scroll, ? or Esc to close) ")
        .border_style(Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text(schedule))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

fn build_help_text(schedule: &Schedule) -> Text<'static> {
    let minutes = |d: std::time::Duration| d.as_secs() / 60;
    let cadence = if schedule.long_break_every > 0 {
        format!(
            "  Long break     {} min, after every {} pomodoros",
            minutes(schedule.long_break),
            schedule.long_break_every
        )
    } else {
        "  Long break     disabled".to_owned()
    };

    Text::from(vec![
        Line::from("Timer"),
        Line::from("  Enter / Space  Pause, resume, or start the next interval"),
        Line::from("  r              Reset the current interval (stays paused)"),
        Line::from("  b              Change the target between intervals"),
        Line::from(""),
        Line::from("Target entry"),
        Line::from("  0-9            Type the expected number of pomodoros"),
        Line::from("  Enter          Set the target and start"),
        Line::from("  Tab            Continue with the current target"),
        Line::from("  Backspace      Delete the last character"),
        Line::from(""),
        Line::from("General"),
        Line::from("  ?              Open / close this help"),
        Line::from("  q / Esc        Quit"),
        Line::from("  Ctrl-c         Quit from anywhere"),
        Line::from(""),
        Line::from("Schedule"),
        Line::from(format!("  Work           {} min", minutes(schedule.work))),
        Line::from(format!("  Short break    {} min", minutes(schedule.short_break))),
        Line::from(cadence),
    ])
}
