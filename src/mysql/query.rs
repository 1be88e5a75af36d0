use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use mysql::Value;
use mysql::prelude::Queryable;

use super::params::convert_params;
use crate::error::DriverErrorInfo;
use crate::results::ResultSet;
use crate::types::RowValues;

/// Normalize a mysql error into the driver error tuple.
///
/// Server errors carry a SQLSTATE and a numeric code; everything else (I/O,
/// protocol) is reported under the generic `HY000` state.
pub(crate) fn error_info(err: &mysql::Error) -> DriverErrorInfo {
    match err {
        mysql::Error::MySqlError(server) => {
            let code = if server.state.is_empty() {
                server.code.to_string()
            } else {
                server.state.clone()
            };
            DriverErrorInfo {
                code,
                vendor_code: i64::from(server.code),
                message: server.message.clone(),
            }
        }
        other => DriverErrorInfo {
            code: "HY000".to_string(),
            vendor_code: 0,
            message: other.to_string(),
        },
    }
}

fn from_mysql_value(value: &Value) -> RowValues {
    match value {
        Value::NULL => RowValues::Null,
        Value::Int(i) => RowValues::Int(*i),
        Value::UInt(u) => i64::try_from(*u)
            .map_or_else(|_| RowValues::Text(u.to_string()), RowValues::Int),
        Value::Float(f) => RowValues::Float(f64::from(*f)),
        Value::Double(d) => RowValues::Float(*d),
        Value::Bytes(bytes) => match String::from_utf8(bytes.clone()) {
            Ok(s) => RowValues::Text(s),
            Err(e) => RowValues::Blob(e.into_bytes()),
        },
        Value::Date(year, month, day, hour, minute, second, micros) => {
            let dt = NaiveDate::from_ymd_opt(i32::from(*year), u32::from(*month), u32::from(*day))
                .and_then(|d| {
                    d.and_hms_micro_opt(
                        u32::from(*hour),
                        u32::from(*minute),
                        u32::from(*second),
                        *micros,
                    )
                });
            dt.map_or(RowValues::Null, RowValues::Timestamp)
        }
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let sign = if *negative { "-" } else { "" };
            let total_hours = u32::from(*days) * 24 + u32::from(*hours);
            RowValues::Text(format!(
                "{sign}{total_hours:02}:{minutes:02}:{seconds:02}.{micros:06}"
            ))
        }
    }
}

/// Prepare and run one statement, materializing its result.
///
/// The result's column metadata decides whether rows are collected or only
/// the affected-row count is reported.
pub(crate) fn execute(
    conn: &mut mysql::Conn,
    sql: &str,
    values: &[RowValues],
) -> Result<ResultSet, DriverErrorInfo> {
    let stmt = conn.prep(sql).map_err(|e| error_info(&e))?;
    let params = convert_params(values);

    let mut query_result = conn.exec_iter(&stmt, params).map_err(|e| error_info(&e))?;

    let column_names: Vec<String> = query_result
        .columns()
        .as_ref()
        .iter()
        .map(|col| col.name_str().to_string())
        .collect();

    if column_names.is_empty() {
        let affected = usize::try_from(query_result.affected_rows()).unwrap_or(usize::MAX);
        return Ok(ResultSet::from_rows_affected(affected));
    }

    let col_count = column_names.len();
    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(Arc::new(column_names));

    for row in query_result.by_ref() {
        let row = row.map_err(|e| error_info(&e))?;
        let mut row_values = Vec::with_capacity(col_count);
        for idx in 0..col_count {
            row_values.push(row.as_ref(idx).map_or(RowValues::Null, from_mysql_value));
        }
        result_set.add_row_values(row_values);
    }

    Ok(result_set)
}

/// Id generated by the most recent successful INSERT on this connection.
pub(crate) fn last_insert_id(conn: &mysql::Conn) -> i64 {
    i64::try_from(conn.last_insert_id()).unwrap_or(0)
}
