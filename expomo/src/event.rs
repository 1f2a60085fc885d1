//! Event bus for expomo.
//!
//! Key presses, resizes, countdown ticks and render requests are normalised into
//! a single `AppEvent` enum and sent over a tokio unbounded MPSC channel. The
//! main loop receives from this channel in arrival order and is the only place
//! the timer session is mutated.
//!
//! Two independent intervals drive the loop:
//! - **Tick interval** (1 s): one countdown decrement per tick.
//! - **Render interval** (100 ms): triggers a `terminal.draw()` call.
//!
//! The tick interval is restarted through [`TickPhase`] whenever the countdown
//! starts or resumes, so the first decrement lands a full second later instead
//! of at whatever phase the free-running interval happened to be in.

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tokio::time::{interval, Interval};

/// Countdown resolution. Must match `expomo_core::Countdown::RESOLUTION`.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Redraw cadence. Fast enough that key feedback feels immediate.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(100);

/// All events the application can receive from any source.
#[derive(Debug)]
#[non_exhaustive]
pub enum AppEvent {
    /// A key press from the terminal (`KeyEventKind::Press` only).
    ///
    /// Release and repeat events are filtered in [`spawn_event_task`]; Windows
    /// synthesises both press and release for every keystroke.
    Key(KeyEvent),
    /// Terminal was resized to (columns, rows).
    Resize(u16, u16),
    /// One second elapsed.
    Tick,
    /// Time to draw a frame.
    Render,
    /// Input stream closed; the loop should exit.
    Quit,
}

/// Handle for restarting the tick interval from the main loop.
#[derive(Debug, Clone, Default)]
pub struct TickPhase(Arc<Notify>);

impl TickPhase {
    /// Makes the next `Tick` arrive one full [`TICK_INTERVAL`] from now.
    ///
    /// A restart requested while the event task is busy is kept and applied on
    /// its next wait.
    pub fn restart(&self) {
        self.0.notify_one();
    }
}

/// Waits for the next tick, restarting the period on every [`TickPhase::restart`].
///
/// Cancel-safe: dropping the future mid-wait loses neither a tick nor a restart.
async fn next_tick(ticks: &mut Interval, phase: &TickPhase) {
    loop {
        tokio::select! {
            _ = ticks.tick() => return,
            _ = phase.0.notified() => ticks.reset(),
        }
    }
}

/// Holds the sender and receiver ends of the unified event channel.
pub struct EventHandler {
    /// Send half; clone this for each task that produces events.
    pub tx: mpsc::UnboundedSender<AppEvent>,
    /// Receive half, owned by the main loop.
    pub rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Shared with the event task; see [`TickPhase`].
    pub phase: TickPhase,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx, phase: TickPhase::default() }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the background tokio task that feeds the event channel.
///
/// The task ends when the receiver is dropped (the next send fails) or when the
/// crossterm stream terminates, in which case a final `AppEvent::Quit` is sent.
///
/// `reader.next().fuse()` keeps `tokio::select!` from polling a completed stream
/// future if crossterm's stream ends.
pub fn spawn_event_task(tx: mpsc::UnboundedSender<AppEvent>, phase: TickPhase) {
    tokio::spawn(async move {
        let mut tick_interval = interval(TICK_INTERVAL);
        let mut render_interval = interval(RENDER_INTERVAL);
        let mut reader = EventStream::new();

        loop {
            let tick_tick = next_tick(&mut tick_interval, &phase);
            let render_tick = render_interval.tick();
            let crossterm_event = reader.next().fuse();

            let event = tokio::select! {
                _ = tick_tick => AppEvent::Tick,
                _ = render_tick => AppEvent::Render,
                maybe_event = crossterm_event => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        AppEvent::Key(key)
                    }
                    Some(Ok(Event::Resize(w, h))) => AppEvent::Resize(w, h),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal input error");
                        continue;
                    }
                    None => {
                        let _ = tx.send(AppEvent::Quit);
                        return;
                    }
                },
            };

            if tx.send(event).is_err() {
                return;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Instant};

    #[tokio::test(start_paused = true)]
    async fn free_running_tick_keeps_its_phase() {
        let phase = TickPhase::default();
        let mut ticks = interval(TICK_INTERVAL);
        ticks.tick().await;
        advance(Duration::from_millis(700)).await;

        let waited_from = Instant::now();
        next_tick(&mut ticks, &phase).await;
        assert_eq!(waited_from.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_delays_next_tick_by_a_full_period() {
        let phase = TickPhase::default();
        let mut ticks = interval(TICK_INTERVAL);
        ticks.tick().await;
        advance(Duration::from_millis(700)).await;

        phase.restart();
        let waited_from = Instant::now();
        next_tick(&mut ticks, &phase).await;
        assert_eq!(waited_from.elapsed(), TICK_INTERVAL);
    }
}
