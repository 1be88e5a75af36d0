use std::sync::Arc;

use chrono::NaiveDateTime;
use postgres::Client;
use serde_json::Value as JsonValue;

use super::params::Params;
use crate::error::DriverErrorInfo;
use crate::results::ResultSet;
use crate::types::RowValues;

/// Normalize a postgres error into the driver error tuple.
///
/// Postgres reports SQLSTATE but no numeric vendor code, so the vendor code
/// is always 0. `XX000` (internal error) stands in when the failure carried
/// no server-side error at all (e.g. an I/O failure mid-statement).
pub(crate) fn error_info(err: &postgres::Error) -> DriverErrorInfo {
    let code = err
        .code()
        .map_or_else(|| "XX000".to_string(), |state| state.code().to_string());
    let message = err
        .as_db_error()
        .map_or_else(|| err.to_string(), |db_err| db_err.message().to_string());

    DriverErrorInfo {
        code,
        vendor_code: 0,
        message,
    }
}

fn extract_value(row: &postgres::Row, idx: usize) -> Result<RowValues, DriverErrorInfo> {
    let type_name = row.columns()[idx].type_().name().to_string();

    let result = match type_name.as_str() {
        "int2" => row
            .try_get::<_, Option<i16>>(idx)
            .map(|v| v.map_or(RowValues::Null, |v| RowValues::Int(i64::from(v)))),
        "int4" => row
            .try_get::<_, Option<i32>>(idx)
            .map(|v| v.map_or(RowValues::Null, |v| RowValues::Int(i64::from(v)))),
        "int8" => row
            .try_get::<_, Option<i64>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::Int)),
        "float4" | "float8" => row
            .try_get::<_, Option<f64>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::Float)),
        "bool" => row
            .try_get::<_, Option<bool>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::Bool)),
        "timestamp" | "timestamptz" => row
            .try_get::<_, Option<NaiveDateTime>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::Timestamp)),
        "json" | "jsonb" => row
            .try_get::<_, Option<JsonValue>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::JSON)),
        "bytea" => row
            .try_get::<_, Option<Vec<u8>>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::Blob)),
        // Everything else is fetched as text
        _ => row
            .try_get::<_, Option<String>>(idx)
            .map(|v| v.map_or(RowValues::Null, RowValues::Text)),
    };

    result.map_err(|e| error_info(&e))
}

/// Prepare and run one statement, materializing its result.
///
/// The prepared statement's column metadata decides between the query path
/// (rows) and the execute path (rows affected only).
pub(crate) fn execute(
    client: &mut Client,
    sql: &str,
    values: &[RowValues],
) -> Result<ResultSet, DriverErrorInfo> {
    let stmt = client.prepare(sql).map_err(|e| error_info(&e))?;
    let params = Params::convert(values);

    if stmt.columns().is_empty() {
        let affected = client
            .execute(&stmt, params.as_refs())
            .map_err(|e| error_info(&e))?;
        let affected = usize::try_from(affected).unwrap_or(usize::MAX);
        return Ok(ResultSet::from_rows_affected(affected));
    }

    let column_names: Vec<String> = stmt
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();
    let col_count = column_names.len();

    let rows = client
        .query(&stmt, params.as_refs())
        .map_err(|e| error_info(&e))?;

    let mut result_set = ResultSet::with_capacity(rows.len());
    result_set.set_column_names(Arc::new(column_names));

    for row in &rows {
        let mut row_values = Vec::with_capacity(col_count);
        for idx in 0..col_count {
            row_values.push(extract_value(row, idx)?);
        }
        result_set.add_row_values(row_values);
    }

    Ok(result_set)
}

/// Value of the most recently used sequence in this session.
///
/// Fails with the driver's error when no sequence has been touched yet, the
/// same way `lastval()` does.
pub(crate) fn last_insert_id(client: &mut Client) -> Result<i64, DriverErrorInfo> {
    let row = client
        .query_one("SELECT lastval()", &[])
        .map_err(|e| error_info(&e))?;
    row.try_get::<_, i64>(0).map_err(|e| error_info(&e))
}
