//! Errors surfaced by the session state machine.

use std::num::ParseIntError;

/// The only failures the core propagates outward.
///
/// Everything else (commands issued in the wrong state, ticks after a timeout,
/// notification failures) is absorbed by the state machine.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The target buffer did not hold a non-negative integer.
    ///
    /// Fatal: the session is abandoned rather than re-prompting.
    #[error("invalid target pomodoro count {input:?}")]
    InvalidTarget {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
