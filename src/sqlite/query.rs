use std::sync::Arc;

use rusqlite::Connection;
use rusqlite::types::Value;

use super::params::Params;
use crate::error::DriverErrorInfo;
use crate::results::ResultSet;
use crate::types::RowValues;

/// Normalize a rusqlite error into the driver error tuple.
///
/// `SQLite` has no SQLSTATE; the primary result code stands in for the code
/// field and the extended code is the vendor code.
pub(crate) fn error_info(err: &rusqlite::Error) -> DriverErrorInfo {
    match err {
        rusqlite::Error::SqliteFailure(ffi_err, message) => {
            let primary = ffi_err.extended_code & 0xff;
            DriverErrorInfo {
                code: primary.to_string(),
                vendor_code: i64::from(ffi_err.extended_code),
                message: message.clone().unwrap_or_else(|| ffi_err.to_string()),
            }
        }
        other => DriverErrorInfo {
            code: "HY000".to_string(),
            vendor_code: 0,
            message: other.to_string(),
        },
    }
}

fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<RowValues, DriverErrorInfo> {
    let value: Value = row.get(idx).map_err(|e| error_info(&e))?;
    Ok(match value {
        Value::Null => RowValues::Null,
        Value::Integer(i) => RowValues::Int(i),
        Value::Real(f) => RowValues::Float(f),
        Value::Text(s) => RowValues::Text(s),
        Value::Blob(b) => RowValues::Blob(b),
    })
}

/// Prepare and run one statement, materializing its result.
///
/// Statements without result columns run through the execute path and only
/// report rows affected.
pub(crate) fn execute(
    conn: &Connection,
    sql: &str,
    values: &[RowValues],
) -> Result<ResultSet, DriverErrorInfo> {
    let mut stmt = conn.prepare(sql).map_err(|e| error_info(&e))?;
    let params = Params::convert(values);
    let param_refs = params.as_refs();

    if stmt.column_count() == 0 {
        let affected = stmt.execute(&param_refs[..]).map_err(|e| error_info(&e))?;
        return Ok(ResultSet::from_rows_affected(affected));
    }

    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let col_count = column_names.len();

    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(Arc::new(column_names));

    let mut rows = stmt.query(&param_refs[..]).map_err(|e| error_info(&e))?;
    while let Some(row) = rows.next().map_err(|e| error_info(&e))? {
        let mut row_values = Vec::with_capacity(col_count);
        for i in 0..col_count {
            row_values.push(extract_value(row, i)?);
        }
        result_set.add_row_values(row_values);
    }

    Ok(result_set)
}

/// Rowid assigned by the most recent successful INSERT on this connection.
pub(crate) fn last_insert_id(conn: &Connection) -> i64 {
    conn.last_insert_rowid()
}
