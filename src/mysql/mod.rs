//! MySQL backend, built on the synchronous mysql client.

mod config;
mod params;
mod query;

pub use config::MysqlOptions;
pub use params::convert_params;

pub(crate) use config::open;
pub(crate) use query::{execute, last_insert_id};
