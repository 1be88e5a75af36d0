//! Row modification: insert/update/delete and their raw primitives.
//!
//! Statements are assembled by simple string joining with positional `?`
//! placeholders; column lists are taken in supply order and never validated
//! against the live schema, so an unknown column surfaces as a driver error.

use crate::error::DbError;
use crate::types::RowValues;

use super::Database;

/// `(c1,c2,...) VALUES (?,?,...)` from the supplied column order.
fn insert_fragment(columns: &[&str]) -> String {
    let placeholders = vec!["?"; columns.len()].join(",");
    format!("({}) VALUES ({})", columns.join(","), placeholders)
}

/// `c1=?,c2=?,...` from the supplied column order.
fn assignment_fragment(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{c}=?"))
        .collect::<Vec<_>>()
        .join(",")
}

impl Database {
    /// Insert one row and return the database-assigned identifier.
    ///
    /// Columns bind in exactly the order supplied.
    ///
    /// # Errors
    /// Propagates execution failures (including unknown columns).
    pub fn insert(&mut self, table: &str, data: &[(&str, RowValues)]) -> Result<i64, DbError> {
        let columns: Vec<&str> = data.iter().map(|(col, _)| *col).collect();
        let values: Vec<RowValues> = data.iter().map(|(_, val)| val.clone()).collect();

        self.raw_insert(table, &insert_fragment(&columns), &values)?;
        self.last_insert_id()
    }

    /// Insert with a caller-supplied `(cols) VALUES (...)` fragment.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn raw_insert(
        &mut self,
        table: &str,
        fragment: &str,
        values: &[RowValues],
    ) -> Result<usize, DbError> {
        let table = self.dialect().quote_identifier(table);
        let sql = format!("INSERT INTO {table} {fragment}");
        Ok(self.execute(&sql, values)?.rows_affected)
    }

    /// Update matching rows and return how many were affected.
    ///
    /// Assignment parameters bind first, where-clause parameters second;
    /// this ordering is part of the contract.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn update(
        &mut self,
        table: &str,
        data: &[(&str, RowValues)],
        where_clause: &str,
        where_values: &[RowValues],
    ) -> Result<usize, DbError> {
        let columns: Vec<&str> = data.iter().map(|(col, _)| *col).collect();

        let mut values: Vec<RowValues> = data.iter().map(|(_, val)| val.clone()).collect();
        values.extend_from_slice(where_values);

        self.raw_update(table, &assignment_fragment(&columns), where_clause, &values)
    }

    /// Update with a caller-supplied assignment fragment.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn raw_update(
        &mut self,
        table: &str,
        assignments: &str,
        where_clause: &str,
        values: &[RowValues],
    ) -> Result<usize, DbError> {
        let table = self.dialect().quote_identifier(table);
        let sql = format!("UPDATE {table} SET {assignments} WHERE {where_clause}");
        Ok(self.execute(&sql, values)?.rows_affected)
    }

    /// Delete matching rows and return how many were affected.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn delete(
        &mut self,
        table: &str,
        where_clause: &str,
        values: &[RowValues],
    ) -> Result<usize, DbError> {
        self.raw_delete(table, where_clause, values)
    }

    /// Delete with a caller-supplied where clause.
    ///
    /// # Errors
    /// Propagates execution failures.
    pub fn raw_delete(
        &mut self,
        table: &str,
        where_clause: &str,
        values: &[RowValues],
    ) -> Result<usize, DbError> {
        let table = self.dialect().quote_identifier(table);
        let sql = format!("DELETE FROM {table} WHERE {where_clause}");
        Ok(self.execute(&sql, values)?.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_fragment_preserves_supply_order() {
        assert_eq!(
            insert_fragment(&["name", "email", "age"]),
            "(name,email,age) VALUES (?,?,?)"
        );
        assert_eq!(insert_fragment(&["a"]), "(a) VALUES (?)");
    }

    #[test]
    fn assignment_fragment_preserves_supply_order() {
        assert_eq!(assignment_fragment(&["x", "y"]), "x=?,y=?");
        assert_eq!(assignment_fragment(&["only"]), "only=?");
    }
}
