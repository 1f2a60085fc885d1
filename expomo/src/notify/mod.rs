//! Desktop notifications for finished intervals.
//!
//! The notify module exposes a `DesktopNotifier` facade that owns a background
//! `std::thread::spawn` thread. Delivering a notification shells out to a
//! platform tool, which can take hundreds of milliseconds, so it never happens on
//! the event-loop task.
pub mod backend;
pub mod worker;

pub use worker::DesktopNotifier;
