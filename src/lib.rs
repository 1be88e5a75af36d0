//! Synchronous, dialect-independent data access layer.
//!
//! One [`Database`] handle wraps a single open connection to MySQL,
//! `PostgreSQL`, or `SQLite` and offers a uniform surface for parameterized
//! statement execution, common CRUD helpers, and error capture. Dialect
//! differences (identifier quoting, optimize/repair support, the "always
//! true" where-token, placeholder style) live on a [`DialectProfile`] value
//! attached at construction; the execution engine itself is shared.
//!
//! ```no_run
//! use sql_dal::prelude::*;
//!
//! # fn main() -> Result<(), DbError> {
//! let mut db = Database::new_sqlite(SqliteOptions::new("app.db3"))?;
//!
//! let id = db.insert(
//!     "users",
//!     &[
//!         ("name", RowValues::Text("alice".into())),
//!         ("email", RowValues::Text("alice@example.com".into())),
//!     ],
//! )?;
//!
//! let row = db.simple_fetch_row("*", "users", &format!("id={id}"))?;
//! assert_eq!(row.get("name").and_then(|v| v.as_text()), Some("alice"));
//! # Ok(())
//! # }
//! ```
//!
//! Out of scope by design: pooling, transactions, async execution, and any
//! SQL parsing beyond simple string assembly. Callers own SQL correctness
//! and must keep untrusted input in bound parameters.

mod database;
mod dialect;
mod error;
mod logging;
mod results;
mod translation;
mod types;

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub mod prelude;

pub use database::{Database, DriverConnection};
pub use dialect::{DatabaseType, DialectProfile, PlaceholderStyle};
pub use error::{DbError, DriverErrorInfo};
pub use logging::{LogSettings, Logger};
pub use results::{ResultSet, Row};
pub use translation::number_placeholders;
pub use types::{RowValues, escape};
