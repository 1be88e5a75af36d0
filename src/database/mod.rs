//! The database handle: construction, statement execution, error capture.
//!
//! One `Database` owns one driver connection, one dialect profile, one
//! logger, and one append-only error record. Execution is synchronous; a
//! handle is not meant to be shared across threads.

use std::borrow::Cow;

use crate::dialect::{DatabaseType, DialectProfile, PlaceholderStyle};
use crate::error::{DbError, DriverErrorInfo};
use crate::logging::{LogSettings, Logger};
use crate::results::{ResultSet, Row};
use crate::translation::number_placeholders;
use crate::types::RowValues;

#[cfg(feature = "mysql")]
use crate::mysql::MysqlOptions;
#[cfg(feature = "postgres")]
use crate::postgres::PostgresOptions;
#[cfg(feature = "sqlite")]
use crate::sqlite::SqliteOptions;

mod admin;
mod dml;
mod select;

/// The open driver connection owned exclusively by a handle.
///
/// Exposed through [`Database::driver`] for callers that need raw driver
/// access; nothing is forwarded implicitly.
pub enum DriverConnection {
    /// MySQL client connection
    #[cfg(feature = "mysql")]
    Mysql(::mysql::Conn),
    /// `PostgreSQL` client connection
    #[cfg(feature = "postgres")]
    Postgres(::postgres::Client),
    /// `SQLite` database connection
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Connection),
}

/// A dialect-independent handle to one open database connection.
pub struct Database {
    conn: DriverConnection,
    db_type: DatabaseType,
    profile: &'static DialectProfile,
    logger: Logger,
    errors: Vec<String>,
}

impl Database {
    /// Open a `SQLite` database file.
    ///
    /// # Errors
    /// Returns `DbError::ConnectionError` if the file cannot be opened.
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(opts: SqliteOptions) -> Result<Self, DbError> {
        let conn = crate::sqlite::open(&opts)?;
        Ok(Self::assemble(
            DriverConnection::Sqlite(conn),
            DatabaseType::Sqlite,
            opts.log,
        ))
    }

    /// Connect to a MySQL server.
    ///
    /// # Errors
    /// Returns `DbError::ConfigError` if the database name is empty (checked
    /// before any network access) or `DbError::ConnectionError` if the
    /// driver fails to connect.
    #[cfg(feature = "mysql")]
    pub fn new_mysql(opts: MysqlOptions) -> Result<Self, DbError> {
        let conn = crate::mysql::open(&opts)?;
        Ok(Self::assemble(
            DriverConnection::Mysql(conn),
            DatabaseType::Mysql,
            opts.log,
        ))
    }

    /// Connect to a `PostgreSQL` server.
    ///
    /// # Errors
    /// Returns `DbError::ConfigError` if the database name is empty (checked
    /// before any network access) or `DbError::ConnectionError` if the
    /// driver fails to connect.
    #[cfg(feature = "postgres")]
    pub fn new_postgres(opts: PostgresOptions) -> Result<Self, DbError> {
        let conn = crate::postgres::open(&opts)?;
        Ok(Self::assemble(
            DriverConnection::Postgres(conn),
            DatabaseType::Postgres,
            opts.log,
        ))
    }

    fn assemble(conn: DriverConnection, db_type: DatabaseType, log: LogSettings) -> Self {
        Self {
            conn,
            db_type,
            profile: db_type.profile(),
            logger: Logger::new(log),
            errors: Vec::new(),
        }
    }

    /// The backend behind this handle.
    #[must_use]
    pub fn database_type(&self) -> DatabaseType {
        self.db_type
    }

    /// The static dialect profile attached at construction.
    #[must_use]
    pub fn dialect(&self) -> &'static DialectProfile {
        self.profile
    }

    /// Raw driver access for operations outside this crate's surface.
    pub fn driver(&mut self) -> &mut DriverConnection {
        &mut self.conn
    }

    /// Errors captured on this handle, oldest first. Append-only; entries
    /// are never cleared or deduplicated.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Append one entry to the configured log file; no-op when logging is
    /// disabled. `label` defaults to a timestamp plus the process id.
    pub fn log(&self, message: &str, label: Option<&str>) -> bool {
        self.logger.log(message, label)
    }

    /// Prepare, bind, and run one statement.
    ///
    /// Positional `?` placeholders are rewritten to the dialect's native
    /// style where needed. Any driver failure is appended to the handle's
    /// error record, logged, and returned as `DbError::ExecutionError`.
    ///
    /// # Errors
    /// Returns `DbError::ExecutionError` when the driver rejects or fails
    /// the statement.
    pub fn execute(&mut self, sql: &str, values: &[RowValues]) -> Result<ResultSet, DbError> {
        // Rewrite first so the log records the text the driver receives
        let sql = statement_text(self.profile, sql);

        self.logger.log(&sql, None);
        if !values.is_empty() {
            self.logger.log(&format!("{values:#?}"), Some("DATA"));
        }
        tracing::debug!(sql = %sql, params = values.len(), "executing statement");

        let result = match &mut self.conn {
            #[cfg(feature = "mysql")]
            DriverConnection::Mysql(conn) => crate::mysql::execute(conn, &sql, values),
            #[cfg(feature = "postgres")]
            DriverConnection::Postgres(client) => crate::postgres::execute(client, &sql, values),
            #[cfg(feature = "sqlite")]
            DriverConnection::Sqlite(conn) => crate::sqlite::execute(conn, &sql, values),
        };

        result.map_err(|info| self.report_driver_error(&info))
    }

    /// Run a statement and return its first row, if any.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn fetch_row(&mut self, sql: &str, values: &[RowValues]) -> Result<Option<Row>, DbError> {
        Ok(self.execute(sql, values)?.into_first_row())
    }

    /// Run a statement and return all of its rows.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn fetch_rows(&mut self, sql: &str, values: &[RowValues]) -> Result<Vec<Row>, DbError> {
        Ok(self.execute(sql, values)?.rows)
    }

    /// Run a statement and return the first column of its first row.
    ///
    /// `None` is the absence sentinel, returned both when no row matched and
    /// when the row has no first column.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn fetch_value(
        &mut self,
        sql: &str,
        values: &[RowValues],
    ) -> Result<Option<RowValues>, DbError> {
        Ok(self
            .execute(sql, values)?
            .into_first_row()
            .and_then(|row| row.get_by_index(0).cloned()))
    }

    /// Identifier generated by the most recent successful INSERT.
    ///
    /// # Errors
    /// On `PostgreSQL` this runs `SELECT lastval()` and fails like the
    /// driver does when no sequence has been used in the session.
    pub fn last_insert_id(&mut self) -> Result<i64, DbError> {
        let result: Result<i64, DriverErrorInfo> = match &mut self.conn {
            #[cfg(feature = "mysql")]
            DriverConnection::Mysql(conn) => Ok(crate::mysql::last_insert_id(conn)),
            #[cfg(feature = "postgres")]
            DriverConnection::Postgres(client) => crate::postgres::last_insert_id(client),
            #[cfg(feature = "sqlite")]
            DriverConnection::Sqlite(conn) => Ok(crate::sqlite::last_insert_id(conn)),
        };

        result.map_err(|info| self.report_driver_error(&info))
    }

    /// Normalize a driver error tuple: log it under `"ERROR <code>"`, append
    /// the formatted `"<code>: <message>"` entry to the error record, and
    /// build the typed error carrying the vendor code.
    pub(crate) fn report_driver_error(&mut self, info: &DriverErrorInfo) -> DbError {
        let formatted = info.formatted();
        self.logger
            .log(&info.message, Some(&format!("ERROR {}", info.code)));
        self.errors.push(formatted.clone());

        DbError::ExecutionError {
            message: formatted,
            vendor_code: info.vendor_code,
        }
    }
}

/// The exact statement text handed to the driver (and the log file): the
/// dialect's native placeholder form.
fn statement_text<'a>(profile: &DialectProfile, sql: &'a str) -> Cow<'a, str> {
    match profile.placeholders {
        PlaceholderStyle::Numbered => number_placeholders(sql),
        PlaceholderStyle::Question => Cow::Borrowed(sql),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{POSTGRES, SQLITE};

    #[test]
    fn statement_text_is_the_dialect_native_form() {
        let sql = "insert into t (a,b) values (?,?)";
        assert_eq!(
            statement_text(&POSTGRES, sql),
            "insert into t (a,b) values ($1,$2)"
        );
        assert_eq!(statement_text(&SQLITE, sql), sql);
    }
}
