//! FILENAME: records/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("row has {found} cells but the schema declares {expected} columns")]
    ColumnCount { expected: usize, found: usize },

    #[error("column '{column}': cannot coerce '{value}' to a number")]
    InvalidNumber { column: String, value: String },

    #[error("column '{column}': cannot coerce '{value}' to a boolean")]
    InvalidBoolean { column: String, value: String },
}
