//! Convenience lookups: single row, all rows, single value, row count.

use crate::dialect::DialectProfile;
use crate::error::DbError;
use crate::results::Row;
use crate::types::RowValues;

use super::Database;

/// Substitute the dialect's "always true" predicate for an empty (or
/// whitespace-only) where clause.
fn default_where<'a>(profile: &DialectProfile, where_clause: &'a str) -> &'a str {
    if where_clause.trim().is_empty() {
        profile.true_predicate
    } else {
        where_clause
    }
}

fn select_sql(
    profile: &DialectProfile,
    columns: &str,
    table: &str,
    where_clause: &str,
    limit_one: bool,
) -> String {
    let table = profile.quote_identifier(table);
    let where_clause = default_where(profile, where_clause);
    let limit = if limit_one { " LIMIT 1" } else { "" };
    format!("SELECT {columns} FROM {table} WHERE {where_clause}{limit}")
}

impl Database {
    /// First row matching `where_clause`, or the empty row when nothing
    /// matches. An empty where clause selects from the whole table.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn simple_fetch_row(
        &mut self,
        columns: &str,
        table: &str,
        where_clause: &str,
    ) -> Result<Row, DbError> {
        let sql = select_sql(self.dialect(), columns, table, where_clause, true);
        Ok(self.fetch_row(&sql, &[])?.unwrap_or_else(Row::empty))
    }

    /// All rows matching `where_clause`; empty when nothing matches. An
    /// empty where clause selects the whole table.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn simple_fetch_rows(
        &mut self,
        columns: &str,
        table: &str,
        where_clause: &str,
    ) -> Result<Vec<Row>, DbError> {
        let sql = select_sql(self.dialect(), columns, table, where_clause, false);
        self.fetch_rows(&sql, &[])
    }

    /// Single value from the first matching row.
    ///
    /// The where clause is used verbatim here; `None` is returned when no
    /// row matches or the row has no first column.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn simple_fetch_value(
        &mut self,
        column: &str,
        table: &str,
        where_clause: &str,
    ) -> Result<Option<RowValues>, DbError> {
        let table = self.dialect().quote_identifier(table);
        let sql = format!("SELECT {column} FROM {table} WHERE {where_clause}");
        self.fetch_value(&sql, &[])
    }

    /// Count of rows matching `where_clause` (all rows when it is empty).
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn get_count(&mut self, table: &str, where_clause: &str) -> Result<i64, DbError> {
        let where_clause = default_where(self.dialect(), where_clause).to_string();
        let value = self.simple_fetch_value("count(*)", table, &where_clause)?;
        count_from_value(value)
    }
}

/// Interpret a fetched `count(*)` value, tolerating drivers that hand counts
/// back as text. Anything that is not a whole number is an error, never a
/// silently wrong count.
fn count_from_value(value: Option<RowValues>) -> Result<i64, DbError> {
    match value {
        Some(RowValues::Int(n)) => Ok(n),
        Some(RowValues::Text(s)) => s.trim().parse().map_err(|_| non_numeric_count(&s)),
        Some(other) => Err(non_numeric_count(&format!("{other:?}"))),
        None => Ok(0),
    }
}

fn non_numeric_count(value: &str) -> DbError {
    DbError::ExecutionError {
        message: format!("count(*) returned a non-numeric value: {value}"),
        vendor_code: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MYSQL, POSTGRES, SQLITE};

    #[test]
    fn empty_where_uses_dialect_true_predicate() {
        assert_eq!(
            select_sql(&SQLITE, "*", "users", "  ", false),
            "SELECT * FROM users WHERE 1"
        );
        assert_eq!(
            select_sql(&POSTGRES, "*", "users", "", false),
            "SELECT * FROM users WHERE TRUE"
        );
        assert_eq!(
            select_sql(&MYSQL, "*", "users", "\t", false),
            "SELECT * FROM `users` WHERE 1"
        );
    }

    #[test]
    fn non_empty_where_passes_through() {
        assert_eq!(
            select_sql(&SQLITE, "id,name", "users", "id=?", true),
            "SELECT id,name FROM users WHERE id=? LIMIT 1"
        );
    }

    #[test]
    fn count_coercion_accepts_integers_and_numeric_text() {
        assert_eq!(count_from_value(Some(RowValues::Int(4))).unwrap(), 4);
        assert_eq!(
            count_from_value(Some(RowValues::Text(" 17 ".into()))).unwrap(),
            17
        );
        assert_eq!(count_from_value(None).unwrap(), 0);
    }

    #[test]
    fn count_coercion_rejects_non_numeric_values() {
        assert!(count_from_value(Some(RowValues::Text("abc".into()))).is_err());
        assert!(count_from_value(Some(RowValues::Float(2.5))).is_err());
        assert!(count_from_value(Some(RowValues::Null)).is_err());
    }

    #[test]
    fn mysql_tables_are_backtick_quoted() {
        assert_eq!(
            select_sql(&MYSQL, "*", "users", "id=1", false),
            "SELECT * FROM `users` WHERE id=1"
        );
    }
}
