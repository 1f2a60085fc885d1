//! Process-level errors and their exit codes.

use expomo_core::SessionError;

use crate::logging::LogError;

/// Everything that can end the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal setup, drawing, or restoring failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Log(#[from] LogError),
    /// The session aborted on bad target input.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AppError {
    /// Exit status reported to the shell.
    ///
    /// Bad target input gets its own code so scripts can tell it apart from
    /// environment failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Session(_) => 2,
            AppError::Io(_) | AppError::Log(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_has_distinct_exit_code() {
        let source = "abc".parse::<u32>().unwrap_err();
        let err = AppError::from(SessionError::InvalidTarget { input: "abc".into(), source });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "invalid target pomodoro count \"abc\"");
    }

    #[test]
    fn io_failures_exit_with_one() {
        let err = AppError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
    }
}
