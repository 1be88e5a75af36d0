use rusqlite::ToSql;
use rusqlite::types::Value;

use crate::types::RowValues;

/// Convert a single [`RowValues`] to a rusqlite `Value`.
#[must_use]
pub fn row_value_to_sqlite_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        RowValues::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        RowValues::Null => Value::Null,
        RowValues::JSON(jval) => Value::Text(jval.to_string()),
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// Unified `SQLite` parameter container.
pub struct Params(pub Vec<Value>);

impl Params {
    /// Convert generic row values into `SQLite` values.
    #[must_use]
    pub fn convert(params: &[RowValues]) -> Self {
        Params(params.iter().map(row_value_to_sqlite_value).collect())
    }

    /// Borrow the underlying values.
    #[must_use]
    pub fn as_values(&self) -> &[Value] {
        &self.0
    }

    /// Build a borrowed params slice suitable for rusqlite execution.
    #[must_use]
    pub fn as_refs(&self) -> Vec<&dyn ToSql> {
        self.0.iter().map(|v| v as &dyn ToSql).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_map_to_native_values() {
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Int(5)),
            Value::Integer(5)
        );
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Bool(true)),
            Value::Integer(1)
        );
        assert_eq!(row_value_to_sqlite_value(&RowValues::Null), Value::Null);
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Text("x".into())),
            Value::Text("x".to_string())
        );
    }

    #[test]
    fn timestamps_format_as_text() {
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(
            row_value_to_sqlite_value(&RowValues::Timestamp(dt)),
            Value::Text("2024-05-01 12:30:00".to_string())
        );
    }
}
