//! `SQLite` backend, built on rusqlite.

mod config;
mod params;
mod query;

pub use config::SqliteOptions;
pub use params::Params;

pub(crate) use config::open;
pub(crate) use query::{execute, last_insert_id};
