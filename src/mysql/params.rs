use mysql::{Params, Value};

use crate::types::RowValues;

/// Convert a single [`RowValues`] to a mysql `Value`.
#[must_use]
pub fn row_value_to_mysql_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Int(*i),
        RowValues::Float(f) => Value::Double(*f),
        RowValues::Text(s) => Value::Bytes(s.clone().into_bytes()),
        RowValues::Bool(b) => Value::Int(i64::from(*b)),
        RowValues::Timestamp(dt) => Value::Bytes(dt.format("%F %T%.f").to_string().into_bytes()),
        RowValues::Null => Value::NULL,
        RowValues::JSON(jval) => Value::Bytes(jval.to_string().into_bytes()),
        RowValues::Blob(bytes) => Value::Bytes(bytes.clone()),
    }
}

/// Convert generic row values into positional mysql parameters.
#[must_use]
pub fn convert_params(params: &[RowValues]) -> Params {
    if params.is_empty() {
        Params::Empty
    } else {
        Params::Positional(params.iter().map(row_value_to_mysql_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_map_to_native_values() {
        assert_eq!(row_value_to_mysql_value(&RowValues::Int(5)), Value::Int(5));
        assert_eq!(
            row_value_to_mysql_value(&RowValues::Bool(false)),
            Value::Int(0)
        );
        assert_eq!(row_value_to_mysql_value(&RowValues::Null), Value::NULL);
        assert_eq!(
            row_value_to_mysql_value(&RowValues::Text("abc".into())),
            Value::Bytes(b"abc".to_vec())
        );
    }

    #[test]
    fn empty_slice_converts_to_empty_params() {
        assert!(matches!(convert_params(&[]), Params::Empty));
        assert!(matches!(
            convert_params(&[RowValues::Int(1)]),
            Params::Positional(_)
        ));
    }
}
