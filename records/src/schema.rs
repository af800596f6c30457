//! FILENAME: records/src/schema.rs
//! Column schema and the string-to-typed coercion boundary.
//!
//! CSV loading itself lives outside this crate: whatever reads the file
//! hands us the header names (as a schema) and each row as raw string
//! cells. `Schema::coerce_row` is where "25" becomes the number 25.0,
//! once, so downstream code never parses strings again.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::record::Record;
use crate::value::FieldValue;

/// Index into the schema's columns (0-based).
pub type ColumnIndex = usize;

/// The declared type of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Number,
    Text,
    Boolean,
}

/// One declared column: a name plus the type its cells coerce to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Column {
            name: name.into(),
            kind,
        }
    }
}

/// An ordered set of typed columns with O(1) lookup by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,

    /// Map from column name to its index (for by-name field access).
    index: FxHashMap<String, ColumnIndex>,
}

impl Schema {
    /// Builds a schema from declared columns.
    /// Fails if two columns share a name.
    pub fn new(columns: Vec<Column>) -> Result<Self, RecordError> {
        let mut index = FxHashMap::default();
        for (i, column) in columns.iter().enumerate() {
            if index.insert(column.name.clone(), i).is_some() {
                return Err(RecordError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Schema { columns, index })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<ColumnIndex> {
        self.index.get(name).copied()
    }

    /// Coerces one raw row of string cells into a typed record.
    ///
    /// Blank cells become `FieldValue::Empty` regardless of column kind.
    /// Number columns parse as `f64`; boolean columns accept
    /// true/false/yes/no (case-insensitive). Anything else is an error,
    /// never a silent pass-through.
    pub fn coerce_row(&self, raw: &[&str]) -> Result<Record, RecordError> {
        if raw.len() != self.columns.len() {
            return Err(RecordError::ColumnCount {
                expected: self.columns.len(),
                found: raw.len(),
            });
        }

        let mut values = Vec::with_capacity(raw.len());
        for (cell, column) in raw.iter().zip(&self.columns) {
            let trimmed = cell.trim();
            if trimmed.is_empty() {
                values.push(FieldValue::Empty);
                continue;
            }
            let value = match column.kind {
                ColumnKind::Text => FieldValue::Text(trimmed.to_string()),
                ColumnKind::Number => match trimmed.parse::<f64>() {
                    Ok(n) => FieldValue::Number(n),
                    Err(_) => {
                        return Err(RecordError::InvalidNumber {
                            column: column.name.clone(),
                            value: trimmed.to_string(),
                        })
                    }
                },
                ColumnKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                    "true" | "yes" => FieldValue::Boolean(true),
                    "false" | "no" => FieldValue::Boolean(false),
                    _ => {
                        return Err(RecordError::InvalidBoolean {
                            column: column.name.clone(),
                            value: trimmed.to_string(),
                        })
                    }
                },
            };
            values.push(value);
        }

        Ok(Record::new(values))
    }
}
