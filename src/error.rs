use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Every driver-raised failure is normalized into [`DbError::ExecutionError`]
/// by the handle's error reporter; the other variants are raised before any
/// statement reaches a driver.
#[derive(Debug, Error)]
pub enum DbError {
    /// Required configuration was missing or invalid. Detected before any
    /// network or filesystem access.
    #[error("{0}")]
    ConfigError(String),

    /// The driver failed to open a connection.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The driver rejected or failed a statement. `message` is
    /// `"<sqlstate-or-code>: <driver message>"` and `vendor_code` the
    /// driver's numeric error code (0 where the driver has none).
    #[error("{message}")]
    ExecutionError { message: String, vendor_code: i64 },
}

impl DbError {
    /// Numeric vendor code for driver-raised errors, 0 otherwise.
    #[must_use]
    pub fn vendor_code(&self) -> i64 {
        match self {
            DbError::ExecutionError { vendor_code, .. } => *vendor_code,
            _ => 0,
        }
    }
}

/// Normalized driver error tuple, extracted per backend before it is routed
/// through the handle's error reporter.
#[derive(Debug, Clone)]
pub struct DriverErrorInfo {
    /// SQLSTATE where the driver provides one, otherwise the driver's own
    /// primary result code rendered as a string.
    pub code: String,
    /// Driver-specific numeric code, 0 where unavailable.
    pub vendor_code: i64,
    pub message: String,
}

impl DriverErrorInfo {
    /// The `"<code>: <message>"` form appended to a handle's error record.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_literal_message() {
        let err = DbError::ConfigError("Invalid connection parameters.".to_string());
        assert_eq!(err.to_string(), "Invalid connection parameters.");
        assert_eq!(err.vendor_code(), 0);
    }

    #[test]
    fn execution_error_carries_vendor_code() {
        let info = DriverErrorInfo {
            code: "42S02".to_string(),
            vendor_code: 1146,
            message: "Table 'x.t' doesn't exist".to_string(),
        };
        let err = DbError::ExecutionError {
            message: info.formatted(),
            vendor_code: info.vendor_code,
        };
        assert_eq!(err.to_string(), "42S02: Table 'x.t' doesn't exist");
        assert_eq!(err.vendor_code(), 1146);
    }
}
