use rusqlite::{Connection, OpenFlags};

use crate::error::DbError;
use crate::logging::LogSettings;

/// Options for opening a `SQLite` database.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    /// Path of the database file.
    pub db_file: String,
    /// Driver variant selector; `"2"` opens with the legacy flag set,
    /// anything else with the current one.
    pub version: String,
    /// File-logging configuration.
    pub log: LogSettings,
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self {
            db_file: "data.db3".to_string(),
            version: "3".to_string(),
            log: LogSettings::default(),
        }
    }
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_file: impl Into<String>) -> Self {
        Self {
            db_file: db_file.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_log(mut self, log: LogSettings) -> Self {
        self.log = log;
        self
    }
}

/// Open the database file, selecting the flag set by configured version.
///
/// The legacy variant (`version == "2"`) opens without URI filename support;
/// the current variant uses the driver's default flags.
pub(crate) fn open(opts: &SqliteOptions) -> Result<Connection, DbError> {
    let flags = if opts.version.trim() == "2" {
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
    } else {
        OpenFlags::default()
    };

    Connection::open_with_flags(&opts.db_file, flags)
        .map_err(|e| DbError::ConnectionError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = SqliteOptions::default();
        assert_eq!(opts.db_file, "data.db3");
        assert_eq!(opts.version, "3");
        assert!(!opts.log.enabled);
    }

    #[test]
    fn unwritable_location_fails_with_connection_error() {
        let opts = SqliteOptions::new("/nonexistent-dir/test.db3");
        match open(&opts) {
            Err(DbError::ConnectionError(_)) => {}
            other => panic!("expected ConnectionError, got {other:?}"),
        }
    }

    #[test]
    fn legacy_version_still_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db3");
        let opts = SqliteOptions::new(path.to_string_lossy().to_string()).with_version("2");
        assert!(open(&opts).is_ok());
    }
}
