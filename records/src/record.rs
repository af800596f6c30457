//! FILENAME: records/src/record.rs
//! Typed rows and the batch container handed to aggregation.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::schema::{ColumnIndex, Schema};
use crate::value::FieldValue;

/// A single typed row. Values are positional, indexed by the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<FieldValue>,
}

impl Record {
    pub fn new(values: Vec<FieldValue>) -> Self {
        Record { values }
    }

    pub fn get(&self, index: ColumnIndex) -> Option<&FieldValue> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A schema plus its rows: one loaded dataset, ready to aggregate.
///
/// The batch is immutable after loading apart from appending rows; every
/// row is arity-checked against the schema on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBatch {
    schema: Schema,
    records: Vec<Record>,
}

impl RecordBatch {
    pub fn new(schema: Schema) -> Self {
        RecordBatch {
            schema,
            records: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends an already-typed record (arity-checked).
    pub fn push(&mut self, record: Record) -> Result<(), RecordError> {
        if record.len() != self.schema.len() {
            return Err(RecordError::ColumnCount {
                expected: self.schema.len(),
                found: record.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Coerces a raw string row through the schema and appends it.
    pub fn push_raw(&mut self, raw: &[&str]) -> Result<(), RecordError> {
        let record = self.schema.coerce_row(raw)?;
        self.records.push(record);
        Ok(())
    }

    /// By-name field access for a given row.
    pub fn value(&self, row: usize, column: &str) -> Option<&FieldValue> {
        let index = self.schema.column_index(column)?;
        self.records.get(row)?.get(index)
    }
}
