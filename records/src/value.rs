//! FILENAME: records/src/value.rs
//! Typed field values - what a record holds after coercion.

use serde::{Deserialize, Serialize};

/// A single typed value within a record.
///
/// Loaders produce these from raw string cells via `Schema::coerce_row`;
/// the aggregation engine consumes them without further parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Missing value (blank cell in the source data).
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl FieldValue {
    /// Returns the numeric content, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text content, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}
