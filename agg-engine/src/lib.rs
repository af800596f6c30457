//! FILENAME: agg-engine/src/lib.rs
//! Aggregation subsystem for chart data.
//!
//! This crate provides the client-side aggregation and binning pipeline
//! as a standalone module: it takes typed records (from `records`) plus
//! dimension and measure definitions, and produces a dense aggregation
//! table - every declared bucket combination present, zero counts
//! included - ready for a chart to bind.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the aggregation IS)
//! - `engine`: Calculation core (HOW we calculate)
//! - `table`: Dense output structure (WHAT a chart consumes)
//! - `view`: Series extraction with explicit percentage bases
//! - `stats`: Scalar summaries and trend-line fitting

pub mod definition;
pub mod engine;
pub mod error;
pub mod stats;
pub mod table;
pub mod view;

pub use definition::*;
pub use engine::{aggregate, MAX_DIMENSIONS};
pub use error::AggregateError;
pub use stats::{linear_fit, summarize, LinearFit, Summary};
pub use table::{AggCell, AggregationTable, BucketLabels};
pub use view::{grouped_series, series, PercentBasis, Series, SeriesPoint};
