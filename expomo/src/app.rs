//! Central application state for expomo.
//!
//! Wraps the engine's `TimerSession` with the few bits of pure UI state that the
//! engine has no business knowing about: whether the help overlay is open and how
//! far it is scrolled. No rendering lives here; the render module reads this
//! state and the keybinding dispatcher mutates it.

use expomo_core::TimerSession;

/// UI layer drawn above the timer screens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Timer screens receive keys (default).
    #[default]
    Normal,
    /// Help overlay is shown and captures all keys.
    HelpOverlay,
}

/// All mutable state passed through every loop iteration.
#[derive(Debug, Default)]
pub struct AppState {
    /// The pomodoro engine.
    pub session: TimerSession,
    pub mode: Mode,
    /// Vertical scroll offset of the help overlay.
    pub help_scroll: u16,
}

impl AppState {
    pub fn new(session: TimerSession) -> Self {
        Self {
            session,
            mode: Mode::Normal,
            help_scroll: 0,
        }
    }

    pub fn open_help(&mut self) {
        self.help_scroll = 0;
        self.mode = Mode::HelpOverlay;
    }

    pub fn close_help(&mut self) {
        self.mode = Mode::Normal;
    }
}
