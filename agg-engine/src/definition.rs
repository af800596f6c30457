//! FILENAME: agg-engine/src/definition.rs
//! Aggregation Definition - The serializable configuration.
//!
//! This module contains all the types needed to DESCRIBE an aggregation:
//! which fields become axes, how numeric values bucket into ranges, and
//! which measures are computed per cell. These structures are designed
//! to be serializable and to act as immutable snapshots of caller intent.

use serde::{Deserialize, Serialize};

use crate::error::AggregateError;

// ============================================================================
// REDUCERS AND MEASURES
// ============================================================================

/// Supported reducers for measure fields.
///
/// A record count per cell is always available on the cell itself, even
/// when no measures are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Reducer {
    #[default]
    Count,
    Sum,
    Mean,
    Min,
    Max,
}

impl Reducer {
    pub fn label(&self) -> &'static str {
        match self {
            Reducer::Count => "Count",
            Reducer::Sum => "Sum",
            Reducer::Mean => "Mean",
            Reducer::Min => "Min",
            Reducer::Max => "Max",
        }
    }
}

/// A numeric field to reduce per cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measure {
    /// Source field name.
    pub field: String,

    /// Display name (e.g., "Mean of Stress_Level").
    pub name: String,

    /// The reducer to apply.
    pub reducer: Reducer,
}

impl Measure {
    pub fn new(field: impl Into<String>, reducer: Reducer) -> Self {
        let field = field.into();
        let name = format!("{} of {}", reducer.label(), field);
        Measure {
            field,
            name,
            reducer,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

// ============================================================================
// NUMERIC BINNING
// ============================================================================

/// One named numeric range: a closed interval `[min, max]`, or `[min, ∞)`
/// when `max` is `None` (e.g. the "60+" age bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinRange {
    /// Display label for the bucket (e.g., "20-29").
    pub label: String,

    /// Inclusive lower bound.
    pub min: f64,

    /// Inclusive upper bound; `None` means unbounded above.
    pub max: Option<f64>,
}

impl BinRange {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        BinRange {
            label: label.into(),
            min,
            max: Some(max),
        }
    }

    /// A range with no upper bound.
    pub fn open(label: impl Into<String>, min: f64) -> Self {
        BinRange {
            label: label.into(),
            min,
            max: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    fn overlaps(&self, other: &BinRange) -> bool {
        let self_max = self.max.unwrap_or(f64::INFINITY);
        let other_max = other.max.unwrap_or(f64::INFINITY);
        self.min <= other_max && other.min <= self_max
    }
}

/// An ordered set of named ranges used to classify numeric values.
///
/// Gaps between ranges are permitted; a value falling in a gap classifies
/// to no bucket and the owning dimension decides whether that drops the
/// record or routes it to a sentinel bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSet {
    ranges: Vec<BinRange>,
}

impl BinSet {
    /// Builds a bin set, rejecting overlapping ranges.
    pub fn strict(ranges: Vec<BinRange>) -> Result<Self, AggregateError> {
        if ranges.is_empty() {
            return Err(AggregateError::EmptyBinSet);
        }
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                if a.overlaps(b) {
                    return Err(AggregateError::OverlappingBins {
                        first: a.label.clone(),
                        second: b.label.clone(),
                    });
                }
            }
        }
        Ok(BinSet { ranges })
    }

    /// Builds a bin set without the overlap check. When ranges overlap,
    /// `classify` resolves by first match in declaration order.
    pub fn lenient(ranges: Vec<BinRange>) -> Result<Self, AggregateError> {
        if ranges.is_empty() {
            return Err(AggregateError::EmptyBinSet);
        }
        Ok(BinSet { ranges })
    }

    pub fn ranges(&self) -> &[BinRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the label of the first range containing `value`,
    /// or `None` when no range matches.
    pub fn classify(&self, value: f64) -> Option<&str> {
        self.classify_index(value)
            .map(|i| self.ranges[i].label.as_str())
    }

    /// Like `classify`, but returns the range's declaration index.
    pub fn classify_index(&self, value: f64) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(value))
    }
}

// ============================================================================
// DIMENSIONS
// ============================================================================

/// What happens to a binned value that matches no declared range
/// (including non-numeric values in a binned dimension).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Overflow {
    /// Exclude the record from the table; it is counted as unclassified.
    #[default]
    Drop,
    /// Route the record to an extra named bucket appended after the
    /// declared ranges.
    Sentinel(String),
}

fn default_other_name() -> String {
    "Other".to_string()
}

/// One axis of aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dimension {
    /// Values are matched against a declared bucket list as-is.
    Categorical {
        /// Source field name.
        field: String,

        /// Declared buckets, in render order.
        buckets: Vec<String>,

        /// Optional catch-all bucket for values outside the declared
        /// list. `None` sends such records to the unclassified count.
        #[serde(default)]
        other: Option<String>,
    },

    /// Numeric values are classified into named ranges.
    Binned {
        /// Source field name.
        field: String,

        /// The range classifier.
        bins: BinSet,

        /// Out-of-range handling; an explicit choice, never implied.
        #[serde(default)]
        overflow: Overflow,
    },
}

impl Dimension {
    pub fn categorical(field: impl Into<String>, buckets: Vec<String>) -> Self {
        Dimension::Categorical {
            field: field.into(),
            buckets,
            other: None,
        }
    }

    pub fn binned(field: impl Into<String>, bins: BinSet) -> Self {
        Dimension::Binned {
            field: field.into(),
            bins,
            overflow: Overflow::Drop,
        }
    }

    /// Adds the default "Other" catch-all to a categorical dimension,
    /// or the equivalent sentinel bucket to a binned one.
    pub fn with_catch_all(self) -> Self {
        self.with_catch_all_named(default_other_name())
    }

    pub fn with_catch_all_named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        match self {
            Dimension::Categorical { field, buckets, .. } => Dimension::Categorical {
                field,
                buckets,
                other: Some(name),
            },
            Dimension::Binned { field, bins, .. } => Dimension::Binned {
                field,
                bins,
                overflow: Overflow::Sentinel(name),
            },
        }
    }

    /// The source field this dimension reads.
    pub fn field(&self) -> &str {
        match self {
            Dimension::Categorical { field, .. } => field,
            Dimension::Binned { field, .. } => field,
        }
    }

    /// The number of buckets declared by the caller, excluding any
    /// catch-all bucket.
    pub fn declared_bucket_count(&self) -> usize {
        match self {
            Dimension::Categorical { buckets, .. } => buckets.len(),
            Dimension::Binned { bins, .. } => bins.len(),
        }
    }

    /// The full ordered bucket labels for this axis: declared buckets,
    /// then the catch-all bucket if one is configured.
    pub fn bucket_labels(&self) -> Vec<String> {
        match self {
            Dimension::Categorical { buckets, other, .. } => {
                let mut labels = buckets.clone();
                if let Some(name) = other {
                    labels.push(name.clone());
                }
                labels
            }
            Dimension::Binned { bins, overflow, .. } => {
                let mut labels: Vec<String> =
                    bins.ranges().iter().map(|r| r.label.clone()).collect();
                if let Overflow::Sentinel(name) = overflow {
                    labels.push(name.clone());
                }
                labels
            }
        }
    }
}
