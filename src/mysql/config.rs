use mysql::{Conn, Opts, OptsBuilder};

use crate::error::DbError;
use crate::logging::LogSettings;

/// Options for connecting to a MySQL server.
#[derive(Debug, Clone, Default)]
pub struct MysqlOptions {
    pub host: String,
    /// Database name; required, validated before any connection attempt.
    pub db: String,
    pub user: String,
    pub pass: String,
    /// File-logging configuration.
    pub log: LogSettings,
}

impl MysqlOptions {
    #[must_use]
    pub fn new(host: impl Into<String>, db: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            db: db.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.user = user.into();
        self.pass = pass.into();
        self
    }

    #[must_use]
    pub fn with_log(mut self, log: LogSettings) -> Self {
        self.log = log;
        self
    }

    /// Check the dialect-required fields. Runs before any network access.
    pub(crate) fn validate(&self) -> Result<(), DbError> {
        if self.db.trim().is_empty() {
            return Err(DbError::ConfigError(
                "Invalid connection parameters.".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn open(opts: &MysqlOptions) -> Result<Conn, DbError> {
    opts.validate()?;

    let builder = OptsBuilder::new()
        .ip_or_hostname(Some(opts.host.clone()))
        .db_name(Some(opts.db.clone()))
        .user(Some(opts.user.clone()))
        .pass(Some(opts.pass.clone()));

    Conn::new(Opts::from(builder)).map_err(|e| DbError::ConnectionError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_db_name_fails_before_any_io() {
        let opts = MysqlOptions::new("localhost", "");
        match open(&opts) {
            Err(DbError::ConfigError(msg)) => {
                assert_eq!(msg, "Invalid connection parameters.");
            }
            Err(other) => panic!("expected ConfigError, got {other:?}"),
            Ok(_) => panic!("expected ConfigError, got a connection"),
        }
    }
}
