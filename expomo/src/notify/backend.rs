//! Platform notification backends.
//!
//! Each backend is a command-line tool invoked once per notification. Output is
//! captured rather than inherited so nothing the tool prints lands on top of the
//! TUI.

use std::process::{Command, Output, Stdio};

use tracing::info;

/// Why a notification could not be shown.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: &'static str,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Available notification backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Linux `notify-send` (libnotify).
    NotifySend,
    /// macOS `osascript`.
    Osascript,
    /// No desktop tool found; notifications only reach the debug log.
    LogOnly,
}

impl Backend {
    /// Detects the best available backend for the current platform.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            return Self::Osascript;
        }
        if cfg!(target_os = "linux") && command_exists("notify-send") {
            return Self::NotifySend;
        }
        Self::LogOnly
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NotifySend => "notify-send",
            Self::Osascript => "osascript",
            Self::LogOnly => "log-only",
        }
    }

    /// Shows one notification. Blocks until the tool exits.
    pub fn send(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        match self {
            Self::NotifySend => {
                let mut cmd = Command::new("notify-send");
                cmd.args(["--app-name", "ExPomo", title, message]);
                run(self.name(), cmd)
            }
            Self::Osascript => {
                let mut cmd = Command::new("osascript");
                cmd.args(["-e", &osascript_script(title, message)]);
                run(self.name(), cmd)
            }
            Self::LogOnly => {
                info!(title, message, "notification");
                Ok(())
            }
        }
    }
}

/// Builds the AppleScript `display notification` statement.
fn osascript_script(title: &str, message: &str) -> String {
    let escape = |s: &str| s.replace('\\', r"\\").replace('"', r#"\""#);
    format!(
        r#"display notification "{}" with title "{}" sound name "Hero""#,
        escape(message),
        escape(title)
    )
}

fn run(program: &'static str, mut cmd: Command) -> Result<(), NotifyError> {
    let Output { status, stderr, .. } = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|source| NotifyError::Spawn { program, source })?;
    if !status.success() {
        return Err(NotifyError::Failed {
            program,
            status,
            stderr: String::from_utf8_lossy(&stderr).trim().to_owned(),
        });
    }
    Ok(())
}

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdin(Stdio::null())
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
