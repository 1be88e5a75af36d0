//! Per-dialect constants.
//!
//! Dialect differences are expressed as data on a [`DialectProfile`] rather
//! than through a type hierarchy: one execution engine reads the profile
//! attached to its handle and never branches on the backend beyond that.

/// Placeholder syntax understood by a backend's driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Positional `?` placeholders (MySQL, SQLite).
    Question,
    /// Numbered `$1..$N` placeholders (PostgreSQL).
    Numbered,
}

/// Static facts about one SQL dialect.
///
/// Immutable; attached to a `Database` handle at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectProfile {
    /// Character wrapped around table identifiers, if the dialect uses one.
    pub quote_char: Option<char>,
    /// Whether `OPTIMIZE TABLE` is meaningful for this dialect.
    pub supports_optimize: bool,
    /// Whether `REPAIR TABLE` is meaningful for this dialect.
    pub supports_repair: bool,
    /// The "always true" where-token substituted for an empty where clause.
    ///
    /// PostgreSQL's boolean-typed WHERE requires the `TRUE` keyword; the
    /// other dialects accept the integer literal. This divergence is
    /// deliberate and must stay per-dialect.
    pub true_predicate: &'static str,
    /// Placeholder syntax the backend driver expects.
    pub placeholders: PlaceholderStyle,
}

impl DialectProfile {
    /// Wrap `name` in the dialect's identifier quote character, if any.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        match self.quote_char {
            Some(c) => format!("{c}{name}{c}"),
            None => name.to_string(),
        }
    }
}

pub static MYSQL: DialectProfile = DialectProfile {
    quote_char: Some('`'),
    supports_optimize: true,
    supports_repair: true,
    true_predicate: "1",
    placeholders: PlaceholderStyle::Question,
};

pub static POSTGRES: DialectProfile = DialectProfile {
    quote_char: None,
    supports_optimize: false,
    supports_repair: false,
    true_predicate: "TRUE",
    placeholders: PlaceholderStyle::Numbered,
};

pub static SQLITE: DialectProfile = DialectProfile {
    quote_char: None,
    supports_optimize: false,
    supports_repair: false,
    true_predicate: "1",
    placeholders: PlaceholderStyle::Question,
};

/// The database backend behind a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    /// MySQL database
    #[cfg(feature = "mysql")]
    Mysql,
    /// `PostgreSQL` database
    #[cfg(feature = "postgres")]
    Postgres,
    /// `SQLite` database
    #[cfg(feature = "sqlite")]
    Sqlite,
}

impl DatabaseType {
    /// The static dialect profile for this backend.
    #[must_use]
    pub fn profile(&self) -> &'static DialectProfile {
        match self {
            #[cfg(feature = "mysql")]
            DatabaseType::Mysql => &MYSQL,
            #[cfg(feature = "postgres")]
            DatabaseType::Postgres => &POSTGRES,
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => &SQLITE,
        }
    }
}
