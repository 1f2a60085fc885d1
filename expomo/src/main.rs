//! expomo: a terminal pomodoro timer.
//!
//! Entry point for the `expomo` binary. Wires together configuration
//! (`config`), the debug log (`logging`), the terminal lifecycle (`tui`), the
//! unified event bus (`event`), desktop notifications (`notify`), the UI (`ui`)
//! and the timer engine (`expomo-core`).
//!
//! # Startup sequence
//!
//! 1. Load config: read-only, soft failures go to stderr.
//! 2. Open the debug log. Failure exits with status 1 before the terminal is
//!    touched.
//! 3. `install_panic_hook()`: innermost hook, restores the terminal first.
//! 4. `register_sigterm()`: flag polled in the event loop.
//! 5. Start the notification worker thread.
//! 6. `init_tui()`: alternate screen and raw mode.
//! 7. Spawn the event task and run the loop.
//!
//! `restore_tui()` runs once after the loop returns, whatever the outcome. Errors
//! are printed only after that so they land on the normal screen.
//!
//! # Exit status
//!
//! 0 on quit or SIGTERM, 2 on an invalid target, 1 on any setup or terminal
//! failure.

mod app;
mod config;
mod error;
mod event;
mod logging;
mod notify;
mod theme;
mod tui;
mod ui;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use expomo_core::{SessionState, TimerSession};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

use crate::app::AppState;
use crate::error::AppError;
use crate::event::{AppEvent, TickPhase};
use crate::notify::DesktopNotifier;
use crate::theme::Theme;
use crate::ui::keybindings::{handle_key, KeyAction};

/// How often the loop checks the SIGTERM flag when no events arrive.
const HEARTBEAT: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> ExitCode {
    let config = config::load();

    // Held until main returns so buffered log lines are flushed.
    let _log_guard = match logging::init(&config.log_file) {
        Ok(guard) => guard,
        Err(e) => return report(AppError::from(e)),
    };

    match run(config).await {
        Ok(()) => {
            info!("exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn report(e: AppError) -> ExitCode {
    error!(error = %e, "fatal");
    eprintln!("expomo: {e}");
    ExitCode::from(e.exit_code())
}

async fn run(config: config::Config) -> Result<(), AppError> {
    let theme = Theme::from_name(&config.theme);
    let schedule = config.timer.schedule();
    info!(?schedule, theme = %config.theme, "starting");
    let mut state = AppState::new(TimerSession::new(schedule));

    tui::install_panic_hook();
    let term_flag = tui::register_sigterm()?;
    let notifier = DesktopNotifier::spawn()?;

    let mut terminal = tui::init_tui()?;

    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone(), handler.phase.clone());
    let mut rx = handler.rx;

    let outcome = event_loop(
        &mut terminal,
        &mut rx,
        &mut state,
        &theme,
        &notifier,
        &handler.phase,
        &term_flag,
    )
    .await;

    // Single exit point: covers quit, SIGTERM, channel close and errors.
    tui::restore_tui()?;
    outcome
}

/// Processes events in arrival order until quit, SIGTERM, or a fatal error.
async fn event_loop(
    terminal: &mut tui::Tui,
    rx: &mut UnboundedReceiver<AppEvent>,
    state: &mut AppState,
    theme: &Theme,
    notifier: &DesktopNotifier,
    phase: &TickPhase,
    term_flag: &AtomicBool,
) -> Result<(), AppError> {
    loop {
        tokio::select! {
            // Without this arm a quiet terminal would block in rx.recv() and the
            // SIGTERM flag would never be read.
            _ = tokio::time::sleep(HEARTBEAT) => {}
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(AppEvent::Render) => {
                        terminal.draw(|frame| ui::render(frame, state, theme))?;
                    }
                    Some(AppEvent::Tick) => {
                        if let Some(done) = state.session.tick(notifier) {
                            debug!(?done, "interval completed");
                        }
                    }
                    Some(AppEvent::Key(key)) => {
                        let was_running = state.session.state() == SessionState::Running;
                        if handle_key(key, state)? == KeyAction::Quit {
                            return Ok(());
                        }
                        if !was_running && state.session.state() == SessionState::Running {
                            phase.restart();
                        }
                    }
                    Some(AppEvent::Resize(w, h)) => {
                        // ratatui picks up the new size on the next draw.
                        debug!(w, h, "resize");
                    }
                    Some(AppEvent::Quit) | None => return Ok(()),
                }
            }
        }
        if term_flag.load(Ordering::Relaxed) {
            info!("SIGTERM received");
            return Ok(());
        }
    }
}
