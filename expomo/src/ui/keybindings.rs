//! Keybinding dispatcher for expomo.
//!
//! Translates raw crossterm `KeyEvent`s into session [`Command`]s and returns a
//! `KeyAction` telling the event loop whether to continue or quit. The dispatcher
//! branches first on the help overlay, then on the session state, so each screen
//! has an isolated handler. Within one screen every key maps to at most one
//! command; unknown keys are ignored.
//!
//! Target entry additionally maps Backspace to delete and Tab to start without
//! changing the target.
//!
//! | Screen          | Enter / Space | r     | b    | ?    | q / Esc / Ctrl-c |
//! |-----------------|---------------|-------|------|------|------------------|
//! | Target entry    | set target    | text  | text | text | quit             |
//! | Running         | pause         | reset | -    | help | quit             |
//! | Paused          | resume        | reset | -    | help | quit             |
//! | Between         | start next    | -     | back | help | quit             |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use expomo_core::{Command, Flow, SessionError, SessionState};

use crate::app::{AppState, Mode};

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep running.
    Continue,
    /// Tear down the terminal and exit with success.
    Quit,
}

/// Dispatches a key event to the handler for the current screen.
///
/// # Errors
///
/// Propagates [`SessionError::InvalidTarget`] from the session. The caller ends
/// the process on it.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Result<KeyAction, SessionError> {
    if is_ctrl_c(key) {
        return apply(state, Command::Quit);
    }
    if state.mode == Mode::HelpOverlay {
        return Ok(handle_help(key, state));
    }
    let command = match state.session.state() {
        SessionState::CollectingTarget => target_entry_command(key),
        SessionState::Running => running_command(key),
        SessionState::Paused => paused_command(key),
        SessionState::IntervalStopped => between_command(key),
    };
    match command {
        Some(KeyCommand::Session(command)) => apply(state, command),
        Some(KeyCommand::OpenHelp) => {
            state.open_help();
            Ok(KeyAction::Continue)
        }
        None => Ok(KeyAction::Continue),
    }
}

/// What a key means on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyCommand {
    Session(Command),
    OpenHelp,
}

fn apply(state: &mut AppState, command: Command) -> Result<KeyAction, SessionError> {
    Ok(match state.session.apply(command)? {
        Flow::Continue => KeyAction::Continue,
        Flow::Quit => KeyAction::Quit,
    })
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

// ---------------------------------------------------------------------------
// Session screens
// ---------------------------------------------------------------------------

/// Target entry: printable characters go to the buffer.
///
/// `q` still quits here, so it can never be part of a target. Tab starts without
/// touching the target, which is how a re-entered target is kept unchanged.
fn target_entry_command(key: KeyEvent) -> Option<KeyCommand> {
    let command = match key.code {
        KeyCode::Enter => Command::SetTarget,
        KeyCode::Tab => Command::Start,
        KeyCode::Backspace => Command::TargetBackspace,
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Command::SetTargetInput(c.to_string())
        }
        _ => return None,
    };
    Some(KeyCommand::Session(command))
}

fn running_command(key: KeyEvent) -> Option<KeyCommand> {
    timer_screen_command(key, Command::Pause, Some(Command::Reset), None)
}

fn paused_command(key: KeyEvent) -> Option<KeyCommand> {
    timer_screen_command(key, Command::Resume, Some(Command::Reset), None)
}

fn between_command(key: KeyEvent) -> Option<KeyCommand> {
    timer_screen_command(key, Command::Start, None, Some(Command::Back))
}

/// Shared layout of the three timer screens; only the primary action and the
/// availability of reset/back differ.
fn timer_screen_command(
    key: KeyEvent,
    primary: Command,
    reset: Option<Command>,
    back: Option<Command>,
) -> Option<KeyCommand> {
    let command = match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => primary,
        KeyCode::Char('r') => reset?,
        KeyCode::Char('b') => back?,
        KeyCode::Char('?') => return Some(KeyCommand::OpenHelp),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(KeyCommand::Session(command))
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// Handles a key while the help overlay is visible.
///
/// `?`, `Esc` or `q` dismisses the overlay; `j`/`k` scroll it. Everything else
/// is swallowed so it cannot reach the timer underneath.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.close_help(),
        _ => {}
    }
    KeyAction::Continue
}
