//! Administrative statements: ALTER, OPTIMIZE, REPAIR.

use crate::error::DbError;

use super::Database;

impl Database {
    /// Run `ALTER TABLE <table> <alter_fragment>` verbatim.
    ///
    /// # Errors
    /// Propagates execution failures; a malformed fragment surfaces as a
    /// driver error.
    pub fn raw_alter(&mut self, table: &str, alter_fragment: &str) -> Result<(), DbError> {
        let sql = format!("ALTER TABLE {table} {alter_fragment}");
        self.execute(&sql, &[]).map(|_| ())
    }

    /// Optimize a table where the dialect supports it.
    ///
    /// Returns whether the optimization was performed; unsupporting dialects
    /// log a warning and return `Ok(false)` rather than an error.
    ///
    /// # Errors
    /// Propagates execution failures on supporting dialects.
    pub fn raw_optimize(&mut self, table: &str) -> Result<bool, DbError> {
        if !self.dialect().supports_optimize {
            tracing::warn!(table = %table, "optimize is not available for this dialect");
            self.log("Optimize is not available for this dialect.", Some("Warning"));
            return Ok(false);
        }

        let table = self.dialect().quote_identifier(table);
        self.execute(&format!("OPTIMIZE TABLE {table}"), &[])?;
        Ok(true)
    }

    /// Repair a table where the dialect supports it.
    ///
    /// Returns whether the repair was performed; unsupporting dialects log a
    /// warning and return `Ok(false)` rather than an error.
    ///
    /// # Errors
    /// Propagates execution failures on supporting dialects.
    pub fn raw_repair(&mut self, table: &str) -> Result<bool, DbError> {
        if !self.dialect().supports_repair {
            tracing::warn!(table = %table, "repair is not available for this dialect");
            self.log("Repair is not available for this dialect.", Some("Warning"));
            return Ok(false);
        }

        let table = self.dialect().quote_identifier(table);
        self.execute(&format!("REPAIR TABLE {table}"), &[])?;
        Ok(true)
    }
}
