//! Convenience re-exports for typical usage.
//!
//! ```rust
//! use sql_dal::prelude::*;
//! ```

pub use crate::database::{Database, DriverConnection};
pub use crate::dialect::{DatabaseType, DialectProfile};
pub use crate::error::DbError;
pub use crate::logging::LogSettings;
pub use crate::results::{ResultSet, Row};
pub use crate::types::RowValues;

#[cfg(feature = "mysql")]
pub use crate::mysql::MysqlOptions;
#[cfg(feature = "postgres")]
pub use crate::postgres::PostgresOptions;
#[cfg(feature = "sqlite")]
pub use crate::sqlite::SqliteOptions;
