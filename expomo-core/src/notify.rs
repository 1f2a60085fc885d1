//! Seam between the session and whatever delivers "interval finished" alerts.

/// Receives one call per completed interval.
///
/// Implementations must not block and must swallow their own failures: the
/// state machine never learns whether a notification was delivered.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str);
}

/// In-memory notifiers for tests. Built for this crate's unit tests and, with the
/// `test-util` feature, for dependents.
#[cfg(any(test, feature = "test-util"))]
pub mod testing {
    use std::cell::RefCell;

    use super::Notifier;

    /// Discards every notification.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Silent;

    impl Notifier for Silent {
        fn notify(&self, _title: &str, _message: &str) {}
    }

    /// Records notifications in memory instead of delivering them.
    #[derive(Debug, Default)]
    pub struct Recorder {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every `(title, message)` pair received so far, oldest first.
        pub fn sent(&self) -> Vec<(String, String)> {
            self.sent.borrow().clone()
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, title: &str, message: &str) {
            self.sent.borrow_mut().push((title.to_owned(), message.to_owned()));
        }
    }
}
