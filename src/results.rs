use std::sync::Arc;

use crate::types::RowValues;

/// A single row from a query result, with access to column names and values.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Column names, shared across all rows of one result set.
    column_names: Arc<Vec<String>>,
    values: Vec<RowValues>,
}

impl Row {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        Self {
            column_names,
            values,
        }
    }

    /// The empty row, returned by lookups that matched nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Value by column name, or `None` if the column is not present.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        let idx = self
            .column_names
            .iter()
            .position(|col| col == column_name)?;
        self.values.get(idx)
    }

    /// Value by column index, or `None` if out of bounds.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }

    #[must_use]
    pub fn values(&self) -> &[RowValues] {
        &self.values
    }

    /// Consume the row, yielding its values in column order.
    #[must_use]
    pub fn into_values(self) -> Vec<RowValues> {
        self.values
    }
}

/// Materialized result of a single statement execution.
///
/// Valid only for the caller's use; the engine never retains one.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Rows returned by the statement (empty for column-less statements).
    pub rows: Vec<Row>,
    /// Rows affected for DML statements; equals `rows.len()` for queries.
    pub rows_affected: usize,
    column_names: Option<Arc<Vec<String>>>,
}

impl ResultSet {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            rows: Vec::with_capacity(capacity),
            rows_affected: 0,
            column_names: None,
        }
    }

    /// Result of a column-less statement (INSERT/UPDATE/DELETE/DDL).
    #[must_use]
    pub fn from_rows_affected(rows_affected: usize) -> ResultSet {
        ResultSet {
            rows: Vec::new(),
            rows_affected,
            column_names: None,
        }
    }

    /// Set the column names shared by every row of this result set.
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    /// Append a row built from `values` in column order.
    pub fn add_row_values(&mut self, values: Vec<RowValues>) {
        if let Some(column_names) = &self.column_names {
            self.rows.push(Row::new(column_names.clone(), values));
            self.rows_affected += 1;
        }
    }

    /// First row of the set, if any.
    #[must_use]
    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Consume the set, yielding its first row.
    #[must_use]
    pub fn into_first_row(mut self) -> Option<Row> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.rows.swap_remove(0))
        }
    }
}
