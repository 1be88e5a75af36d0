//! `PostgreSQL` backend, built on the synchronous postgres client.

mod config;
mod params;
mod query;

pub use config::PostgresOptions;
pub use params::Params;

pub(crate) use config::open;
pub(crate) use query::{execute, last_insert_id};
