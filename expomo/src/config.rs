//! User configuration loaded from `~/.config/expomo/config.toml`.
//!
//! Every key is optional. A missing file yields the defaults; a malformed file
//! also yields the defaults after a message on stderr. Config is read before the
//! terminal enters raw mode and before logging exists, so stderr is the only
//! channel available at that point.
//!
//! ```toml
//! theme = "dark"
//! log_file = "/tmp/expomo.log"
//!
//! [timer]
//! work_minutes = 50
//! short_break_minutes = 10
//! long_break_minutes = 30
//! long_break_every = 3
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use expomo_core::Schedule;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name, see [`crate::theme::Theme::from_name`].
    pub theme: String,
    /// Debug log destination. Relative paths resolve against the working directory.
    pub log_file: PathBuf,
    pub timer: TimerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_owned(),
            log_file: PathBuf::from("debug.log"),
            timer: TimerConfig::default(),
        }
    }
}

/// The `[timer]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub work_minutes: u64,
    pub short_break_minutes: u64,
    pub long_break_minutes: u64,
    /// Zero disables long breaks.
    pub long_break_every: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_every: 4,
        }
    }
}

impl TimerConfig {
    /// Converts the table into the engine's [`Schedule`].
    ///
    /// Zero-minute intervals are clamped to one minute: a zero-length countdown
    /// would be expired before it ever ran.
    pub fn schedule(&self) -> Schedule {
        let minutes = |m: u64| Duration::from_secs(m.max(1) * 60);
        Schedule {
            work: minutes(self.work_minutes),
            short_break: minutes(self.short_break_minutes),
            long_break: minutes(self.long_break_minutes),
            long_break_every: self.long_break_every,
        }
    }
}

/// Returns the path to the expomo config file.
///
/// Prefers `$XDG_CONFIG_HOME/expomo/config.toml`; falls back to
/// `~/.config/expomo/config.toml` when the env var is absent.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("expomo").join("config.toml")
}

/// Parses a config document.
pub fn parse(raw: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(raw)
}

/// Loads the config from [`config_path`]. Never fails.
pub fn load() -> Config {
    load_from(&config_path())
}

/// Loads the config from `path`, falling back to defaults on any problem.
pub fn load_from(path: &Path) -> Config {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Config::default(),
    };
    match parse(&raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("expomo: config parse error in {:?}: {}", path, e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_all_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_timer_table_keeps_other_defaults() {
        let config = parse("theme = \"dark\"\n[timer]\nwork_minutes = 50\n").unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.timer.work_minutes, 50);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.log_file, PathBuf::from("debug.log"));
    }

    #[test]
    fn schedule_converts_minutes_and_clamps_zero() {
        let timer = TimerConfig {
            work_minutes: 0,
            short_break_minutes: 2,
            long_break_minutes: 20,
            long_break_every: 3,
        };
        let schedule = timer.schedule();
        assert_eq!(schedule.work, Duration::from_secs(60));
        assert_eq!(schedule.short_break, Duration::from_secs(120));
        assert_eq!(schedule.long_break, Duration::from_secs(1200));
        assert_eq!(schedule.long_break_every, 3);
    }

    #[test]
    fn default_timer_matches_engine_default() {
        assert_eq!(TimerConfig::default().schedule(), Schedule::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(load_from(&dir.path().join("nope.toml")), Config::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "theme = [").unwrap();
        assert_eq!(load_from(file.path()), Config::default());
    }

    #[test]
    fn file_on_disk_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "log_file = \"/tmp/x.log\"\n[timer]\nlong_break_every = 2\n").unwrap();
        let config = load_from(file.path());
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.timer.long_break_every, 2);
    }
}
