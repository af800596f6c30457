//! FILENAME: agg-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("bin set declares no ranges")]
    EmptyBinSet,

    #[error("bin '{first}' overlaps bin '{second}'")]
    OverlappingBins { first: String, second: String },

    #[error("dimension '{0}' declares no buckets")]
    EmptyDimension(String),

    #[error("aggregation supports 1 to 3 dimensions, got {0}")]
    DimensionCount(usize),

    #[error("field '{0}' is not in the schema")]
    UnknownField(String),

    #[error("nothing to aggregate: no records and no dimensions")]
    EmptyInput,
}

impl AggregateError {
    /// True for malformed-configuration variants (as opposed to the
    /// degenerate empty-input call).
    pub fn is_configuration(&self) -> bool {
        !matches!(self, AggregateError::EmptyInput)
    }
}
