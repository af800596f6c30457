//! FILENAME: agg-engine/src/table.rs
//! Aggregation Table - The dense output consumed by renderers.
//!
//! Density is the invariant here: the table always contains one cell for
//! every combination of declared buckets across all dimensions, zero
//! counts included, so a chart never silently omits a category.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Bucket labels addressing one cell, one entry per dimension.
/// Inline storage covers the supported 1-3 dimensions.
pub type BucketLabels = SmallVec<[String; 3]>;

/// One cell: a bucket combination with its aggregated measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggCell {
    /// Bucket label per dimension, in dimension declaration order.
    pub keys: BucketLabels,

    /// Number of records classified into this cell.
    pub count: u64,

    /// One slot per declared measure, in declaration order.
    /// `None` when the cell holds no value for that measure (empty cell,
    /// or no numeric values for the field) - never coerced to zero.
    pub measures: Vec<Option<f64>>,
}

impl AggCell {
    /// Share of a caller-supplied total, as a value in 0..=100.
    ///
    /// The denominator is always explicit: callers choose between a grand
    /// total, a per-group total, or anything else. A zero total yields
    /// `0.0` rather than a NaN display value.
    pub fn percentage(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 / total as f64 * 100.0
    }

    /// The computed value of the measure at `index`, if defined.
    pub fn measure(&self, index: usize) -> Option<f64> {
        self.measures.get(index).copied().flatten()
    }
}

/// The dense set of all cells for the declared dimensions.
///
/// Cells are ordered lexicographically by declared bucket order, first
/// dimension major, which is the order consumers render axes in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationTable {
    /// Declared bucket labels per dimension (catch-all buckets included),
    /// in render order.
    pub axes: Vec<Vec<String>>,

    /// Display names of the declared measures, parallel to each cell's
    /// `measures` slots.
    pub measure_names: Vec<String>,

    /// All cells, `axes` lengths multiplied together of them.
    pub cells: Vec<AggCell>,

    /// Records that matched no bucket on some dimension. Exposed for
    /// diagnostics; callers can surface a coverage disclaimer.
    pub unclassified: u64,
}

impl AggregationTable {
    pub fn dimension_count(&self) -> usize {
        self.axes.len()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total count across all cells (i.e., the classified record count).
    pub fn total_count(&self) -> u64 {
        self.cells.iter().map(|c| c.count).sum()
    }

    /// Looks up the cell for an exact bucket-label tuple.
    pub fn cell_at(&self, keys: &[&str]) -> Option<&AggCell> {
        if keys.len() != self.axes.len() {
            return None;
        }
        let mut index = 0usize;
        for (axis, key) in self.axes.iter().zip(keys) {
            let pos = axis.iter().position(|label| label.as_str() == *key)?;
            index = index * axis.len() + pos;
        }
        self.cells.get(index)
    }

    /// Total count across cells whose bucket on `dimension` equals
    /// `label` (e.g., a per-column total for percentage denominators).
    pub fn total_where(&self, dimension: usize, label: &str) -> u64 {
        self.cells
            .iter()
            .filter(|c| c.keys.get(dimension).map(|k| k.as_str()) == Some(label))
            .map(|c| c.count)
            .sum()
    }
}
