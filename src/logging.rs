//! Optional append-only file logging.
//!
//! Entries are one line each, `"<label> ==> <content>\n"`. The sink is gated
//! by [`LogSettings::enabled`]; a disabled logger is a no-op, and an enabled
//! logger with an unwritable path must never raise, only emit a `tracing`
//! warning.

use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;

/// File-logging portion of a handle's configuration.
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    /// Whether statement and error logging is enabled.
    pub enabled: bool,
    /// Path of the append-only log file.
    pub path: String,
}

impl LogSettings {
    /// Enabled logging to `path`.
    #[must_use]
    pub fn to_file(path: impl Into<String>) -> Self {
        Self {
            enabled: true,
            path: path.into(),
        }
    }

    /// Disabled logging (the default).
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Append-only file sink owned by a `Database` handle.
#[derive(Debug, Clone)]
pub struct Logger {
    settings: LogSettings,
}

impl Logger {
    #[must_use]
    pub fn new(settings: LogSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Append one entry. `label` defaults to a timestamp plus the process id.
    ///
    /// Returns whether an entry was written. Never fails: a disabled logger
    /// skips silently, and write errors are reported through `tracing` only.
    pub fn log(&self, message: &str, label: Option<&str>) -> bool {
        if !self.settings.enabled {
            return false;
        }

        let default_label;
        let label = match label {
            Some(l) => l,
            None => {
                default_label = format!(
                    "{} {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    std::process::id()
                );
                &default_label
            }
        };

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.settings.path)
            .and_then(|mut file| writeln!(file, "{label} ==> {message}"));

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.settings.path, error = %e, "could not append to log file");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logger_is_a_noop() {
        let logger = Logger::new(LogSettings::disabled());
        assert!(!logger.log("anything", None));
    }

    #[test]
    fn unwritable_path_does_not_panic() {
        let logger = Logger::new(LogSettings::to_file("/nonexistent-dir/db.log"));
        assert!(!logger.log("anything", Some("LABEL")));
    }

    #[test]
    fn entries_use_label_arrow_message_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.log");
        let logger = Logger::new(LogSettings::to_file(path.to_string_lossy().to_string()));

        assert!(logger.log("select 1", Some("SQL")));
        assert!(logger.log("second entry", Some("DATA")));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["SQL ==> select 1", "DATA ==> second entry"]);
    }

    #[test]
    fn default_label_carries_timestamp_and_pid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.log");
        let logger = Logger::new(LogSettings::to_file(path.to_string_lossy().to_string()));

        assert!(logger.log("select 1", None));

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let (label, rest) = line.split_once(" ==> ").unwrap();
        assert_eq!(rest, "select 1");
        assert!(label.ends_with(&std::process::id().to_string()));
    }
}
