use postgres::{Client, NoTls};

use crate::error::DbError;
use crate::logging::LogSettings;

/// Options for connecting to a `PostgreSQL` server.
#[derive(Debug, Clone, Default)]
pub struct PostgresOptions {
    pub host: String,
    /// Database name; required, validated before any connection attempt.
    pub db: String,
    pub user: String,
    pub pass: String,
    /// File-logging configuration.
    pub log: LogSettings,
}

impl PostgresOptions {
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

pub(crate) fn open(opts: &PostgresOptions) -> Result<Client, DbError> {
    opts.validate()?;

    postgres::Config::new()
        .host(&opts.host)
        .dbname(&opts.db)
        .user(&opts.user)
        .password(&opts.pass)
        .connect(NoTls)
        .map_err(|e| DbError::ConnectionError(e.to_string()))
}
