//! FILENAME: agg-engine/src/view.rs
//! Series View - Render-ready output derived from a table.
//!
//! This module flattens an AggregationTable into series structures a
//! chart can bind directly: ordered labels, counts, measure values, and
//! percentages. It owns no rendering; it is pure data for the frontend.
//!
//! Percentages always name their denominator explicitly via
//! `PercentBasis` - the engine never guesses whether a share is of the
//! grand total or of the enclosing group.

use serde::{Deserialize, Serialize};

use crate::table::AggregationTable;

/// Which total a percentage is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentBasis {
    /// Share of all classified records in the table.
    GrandTotal,
    /// Share of the records in the same outer-dimension bucket.
    /// For a one-dimension table this equals `GrandTotal`.
    OuterTotal,
}

/// One drawable point: a bucket with its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Innermost bucket label.
    pub label: String,

    /// Record count for the bucket.
    pub count: u64,

    /// Share of the chosen basis, 0..=100.
    pub percentage: f64,

    /// Measure values, parallel to the table's `measure_names`.
    pub measures: Vec<Option<f64>>,
}

/// An ordered run of points sharing one outer bucket (or the whole
/// table, for one-dimension aggregations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Outer bucket label, or the lone dimension's field-agnostic name.
    pub name: String,

    pub points: Vec<SeriesPoint>,
}

/// Flattens a one-dimension table into a single series, in declared
/// bucket order. Returns `None` for any other dimensionality.
pub fn series(table: &AggregationTable, name: impl Into<String>) -> Option<Series> {
    if table.dimension_count() != 1 {
        return None;
    }
    let total = table.total_count();
    let points = table
        .cells
        .iter()
        .map(|cell| SeriesPoint {
            label: cell.keys[0].clone(),
            count: cell.count,
            percentage: cell.percentage(total),
            measures: cell.measures.clone(),
        })
        .collect();
    Some(Series {
        name: name.into(),
        points,
    })
}

/// Flattens a two-dimension table into one series per outer bucket, each
/// holding the inner buckets in declared order (the grouped/stacked bar
/// shape). Returns `None` for any other dimensionality.
pub fn grouped_series(table: &AggregationTable, basis: PercentBasis) -> Option<Vec<Series>> {
    if table.dimension_count() != 2 {
        return None;
    }
    let inner_len = table.axes[1].len();
    let grand_total = table.total_count();

    let mut result = Vec::with_capacity(table.axes[0].len());
    for (outer_index, outer_label) in table.axes[0].iter().enumerate() {
        let slice = &table.cells[outer_index * inner_len..(outer_index + 1) * inner_len];
        let denominator = match basis {
            PercentBasis::GrandTotal => grand_total,
            PercentBasis::OuterTotal => slice.iter().map(|c| c.count).sum(),
        };
        let points = slice
            .iter()
            .map(|cell| SeriesPoint {
                label: cell.keys[1].clone(),
                count: cell.count,
                percentage: cell.percentage(denominator),
                measures: cell.measures.clone(),
            })
            .collect();
        result.push(Series {
            name: outer_label.clone(),
            points,
        });
    }
    Some(result)
}
