//! FILENAME: agg-engine/src/engine.rs
//! Aggregation Engine - The calculation core that fills the dense grid.
//!
//! This module takes a record batch (data) and dimension/measure
//! definitions (configuration) and produces an AggregationTable.
//!
//! Algorithm:
//! 1. Resolve dimension and measure fields against the batch schema
//! 2. Classify each record into a bucket-index tuple per dimension;
//!    records with any unmatched bucket are counted as unclassified
//! 3. Group classified records, accumulating count and measure state
//! 4. Emit the full Cartesian product of declared buckets in order
//!    (first dimension major), filling gaps with empty cells
//!
//! The engine is a pure pipeline: no retained state between calls, no
//! I/O, and identical inputs always produce an equal table.

use log::debug;
use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use records::{ColumnIndex, FieldValue, RecordBatch};

use crate::definition::{Dimension, Measure, Overflow, Reducer};
use crate::error::AggregateError;
use crate::table::{AggCell, AggregationTable, BucketLabels};

/// Maximum number of dimensions in one aggregation.
pub const MAX_DIMENSIONS: usize = 3;

/// Bucket indices addressing one group, one entry per dimension.
type BucketKey = SmallVec<[u32; 3]>;

// ============================================================================
// MEASURE ACCUMULATOR
// ============================================================================

/// Accumulator for computing measures incrementally over one group.
/// Only numeric values feed the accumulator; text and empty values in a
/// measure field contribute nothing.
#[derive(Debug, Clone, Default)]
struct MeasureAccumulator {
    sum: f64,
    count: u64,
    min: Option<f64>,
    max: Option<f64>,
}

impl MeasureAccumulator {
    fn add_number(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Computes the final measure value. `None` when the reducer is
    /// undefined for the accumulated state (no numeric values seen).
    fn compute(&self, reducer: Reducer) -> Option<f64> {
        match reducer {
            Reducer::Count => Some(self.count as f64),
            Reducer::Sum => {
                if self.count > 0 {
                    Some(self.sum)
                } else {
                    None
                }
            }
            Reducer::Mean => {
                if self.count > 0 {
                    Some(self.sum / self.count as f64)
                } else {
                    None
                }
            }
            Reducer::Min => self.min,
            Reducer::Max => self.max,
        }
    }
}

/// Per-group state: record count plus one accumulator per measure.
#[derive(Debug, Clone)]
struct GroupState {
    count: u64,
    accumulators: Vec<MeasureAccumulator>,
}

impl GroupState {
    fn new(measure_count: usize) -> Self {
        GroupState {
            count: 0,
            accumulators: vec![MeasureAccumulator::default(); measure_count],
        }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Normalizes a field value to a categorical bucket label.
/// Whole numbers render without a fractional part so a numeric column
/// can match declared buckets like "1", "2", "3".
fn category_label(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Empty => None,
        FieldValue::Text(s) => Some(s.clone()),
        FieldValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(format!("{}", n))
            }
        }
        FieldValue::Boolean(b) => Some(b.to_string()),
    }
}

/// Resolves a record's value on one dimension to a bucket index into the
/// dimension's `bucket_labels()`, or `None` when the record is
/// unclassifiable on this axis.
fn bucket_of(dimension: &Dimension, value: Option<&FieldValue>) -> Option<usize> {
    match dimension {
        Dimension::Categorical { buckets, other, .. } => {
            let label = value.and_then(category_label);
            match label.and_then(|l| buckets.iter().position(|b| *b == l)) {
                Some(index) => Some(index),
                // Catch-all bucket sits right after the declared ones
                None => other.as_ref().map(|_| buckets.len()),
            }
        }
        Dimension::Binned { bins, overflow, .. } => {
            let matched = value
                .and_then(|v| v.as_number())
                .and_then(|n| bins.classify_index(n));
            match matched {
                Some(index) => Some(index),
                None => match overflow {
                    Overflow::Drop => None,
                    Overflow::Sentinel(_) => Some(bins.len()),
                },
            }
        }
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Aggregates a record batch along 1-3 dimensions.
///
/// The result is dense: one cell per combination of declared buckets,
/// whether or not any record matched it. Records that match no bucket on
/// some dimension are excluded from every cell and reported via the
/// table's `unclassified` count.
///
/// Fails with a configuration error when a dimension declares no
/// buckets, the dimension count is outside 1-3, or a field is missing
/// from the schema. The fully degenerate call (no records AND no
/// dimensions) fails with `EmptyInput`; an empty batch with valid
/// dimensions yields an all-zero table, which is valid output.
pub fn aggregate(
    batch: &RecordBatch,
    dimensions: &[Dimension],
    measures: &[Measure],
) -> Result<AggregationTable, AggregateError> {
    if batch.is_empty() && dimensions.is_empty() {
        return Err(AggregateError::EmptyInput);
    }
    if dimensions.is_empty() || dimensions.len() > MAX_DIMENSIONS {
        return Err(AggregateError::DimensionCount(dimensions.len()));
    }

    // Resolve configuration against the schema up front: all-or-nothing,
    // no partial tables on error.
    let mut axes: Vec<Vec<String>> = Vec::with_capacity(dimensions.len());
    let mut dimension_columns: Vec<ColumnIndex> = Vec::with_capacity(dimensions.len());
    for dimension in dimensions {
        if dimension.declared_bucket_count() == 0 {
            return Err(AggregateError::EmptyDimension(dimension.field().to_string()));
        }
        let column = batch
            .schema()
            .column_index(dimension.field())
            .ok_or_else(|| AggregateError::UnknownField(dimension.field().to_string()))?;
        dimension_columns.push(column);
        axes.push(dimension.bucket_labels());
    }

    let mut measure_columns: Vec<ColumnIndex> = Vec::with_capacity(measures.len());
    for measure in measures {
        let column = batch
            .schema()
            .column_index(&measure.field)
            .ok_or_else(|| AggregateError::UnknownField(measure.field.clone()))?;
        measure_columns.push(column);
    }

    // Classify and group.
    let mut groups: FxHashMap<BucketKey, GroupState> = FxHashMap::default();
    let mut unclassified = 0u64;

    'records: for record in batch.records() {
        let mut key = BucketKey::new();
        for (dimension, column) in dimensions.iter().zip(&dimension_columns) {
            match bucket_of(dimension, record.get(*column)) {
                Some(index) => key.push(index as u32),
                None => {
                    unclassified += 1;
                    continue 'records;
                }
            }
        }

        let group = groups
            .entry(key)
            .or_insert_with(|| GroupState::new(measures.len()));
        group.count += 1;
        for (accumulator, column) in group.accumulators.iter_mut().zip(&measure_columns) {
            if let Some(n) = record.get(*column).and_then(|v| v.as_number()) {
                accumulator.add_number(n);
            }
        }
    }

    debug!(
        "aggregated {} records into {} groups across {} dimensions ({} unclassified)",
        batch.len(),
        groups.len(),
        dimensions.len(),
        unclassified
    );

    // Emit the dense Cartesian product in declared bucket order.
    let cell_total: usize = axes.iter().map(|axis| axis.len()).product();
    let mut cells = Vec::with_capacity(cell_total);
    let mut odometer: BucketKey = smallvec![0u32; axes.len()];

    for _ in 0..cell_total {
        let keys: BucketLabels = odometer
            .iter()
            .zip(&axes)
            .map(|(&i, axis)| axis[i as usize].clone())
            .collect();

        let cell = match groups.get(&odometer) {
            Some(group) => AggCell {
                keys,
                count: group.count,
                measures: group
                    .accumulators
                    .iter()
                    .zip(measures)
                    .map(|(accumulator, measure)| accumulator.compute(measure.reducer))
                    .collect(),
            },
            None => AggCell {
                keys,
                count: 0,
                measures: vec![None; measures.len()],
            },
        };
        cells.push(cell);

        // Advance the odometer: last dimension fastest, so the first
        // dimension is major in the output order.
        for d in (0..axes.len()).rev() {
            odometer[d] += 1;
            if (odometer[d] as usize) < axes[d].len() {
                break;
            }
            odometer[d] = 0;
        }
    }

    Ok(AggregationTable {
        axes,
        measure_names: measures.iter().map(|m| m.name.clone()).collect(),
        cells,
        unclassified,
    })
}
