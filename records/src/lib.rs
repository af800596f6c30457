//! FILENAME: records/src/lib.rs
//! PURPOSE: Shared data model for the chart-data workspace.
//! CONTEXT: Typed field values, column schemas, and record storage.
//!          This crate is the coercion boundary: loaders feed it raw
//!          string cells, everything downstream sees typed values.

pub mod error;
pub mod record;
pub mod schema;
pub mod value;

// Re-export commonly used types at the crate root
pub use error::RecordError;
pub use record::{Record, RecordBatch};
pub use schema::{Column, ColumnIndex, ColumnKind, Schema};
pub use value::FieldValue;
