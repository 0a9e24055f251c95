//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing for nullable and JSON columns.

use crate::error::DatabaseError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`;
/// nullable columns must go through `get::<Option<String>>()`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Read a nullable TEXT column holding JSON.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty value contains invalid JSON.
pub fn get_opt_json(row: &libsql::Row, idx: i32) -> Result<Option<serde_json::Value>, DatabaseError> {
    match get_opt_string(row, idx)? {
        Some(text) => {
            let value = serde_json::from_str(&text)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column {idx}: {e}")))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serialize an optional JSON value for a TEXT column.
#[must_use]
pub fn json_to_column(value: Option<&serde_json::Value>) -> Option<String> {
    value.map(std::string::ToString::to_string)
}
