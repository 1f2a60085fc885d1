//! Background thread that delivers notifications.
//!
//! The session calls [`DesktopNotifier::notify`] from the event loop; the call
//! only enqueues a request. The worker owns the [`Backend`] and drains the queue
//! until every sender is dropped. Failures are logged and otherwise forgotten.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use expomo_core::Notifier;
use tracing::{debug, warn};

use crate::notify::backend::Backend;

/// One queued notification, fully owned so it can cross the thread boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    pub title: String,
    pub message: String,
}

/// Fire-and-forget handle to the notification thread.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    tx: Sender<NotifyRequest>,
}

impl DesktopNotifier {
    /// Detects the platform backend and starts the worker thread.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the OS refuses to spawn the thread.
    pub fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(Backend::detect())
    }

    /// Starts the worker thread with an explicit backend.
    pub fn spawn_with(backend: Backend) -> std::io::Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("expomo-notify".to_owned())
            .spawn(move || notify_worker_loop(backend, rx))?;
        debug!(backend = backend.name(), "notification worker started");
        Ok(Self { tx })
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) {
        let request = NotifyRequest {
            title: title.to_owned(),
            message: message.to_owned(),
        };
        if self.tx.send(request).is_err() {
            warn!("notification worker is gone; dropping notification");
        }
    }
}

/// Entry point for the worker thread. Returns when the channel closes.
fn notify_worker_loop(backend: Backend, rx: Receiver<NotifyRequest>) {
    for request in rx {
        match backend.send(&request.title, &request.message) {
            Ok(()) => debug!(backend = backend.name(), title = %request.title, "notification sent"),
            Err(e) => warn!(backend = backend.name(), error = %e, "notification failed"),
        }
    }
    debug!("notification worker exiting");
}
