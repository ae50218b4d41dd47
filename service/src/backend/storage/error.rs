//! Failures raised by the record store.
//!
//! These are surfaced verbatim to callers. Nothing in the store retries,
//! a retried append could register the same sign-in twice.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record store CSV failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row {row} in '{table}': {reason}")]
    MalformedRow {
        table: &'static str,
        row: usize,
        reason: String,
    },

    #[error("Row {row} does not exist in '{table}'")]
    RowOutOfRange { table: &'static str, row: usize },

    #[error("Column {column} does not exist in '{table}'")]
    ColumnOutOfRange { table: &'static str, column: usize },

    #[error("No open record for {key} in '{table}'")]
    RecordNotFound { table: &'static str, key: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
