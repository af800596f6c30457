//! FILENAME: agg-engine/src/stats.rs
//! Scalar summaries and trend-line fitting for chart annotations.
//!
//! Covers the two calculations charts need beside the table itself:
//! a field summary for scale domains and caption text, and a
//! least-squares line for scatter-plot trend overlays.

use serde::{Deserialize, Serialize};

/// Count, mean, and extrema of a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarizes a sample, ignoring non-finite values.
/// Returns `None` when no finite values remain.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &v in values {
        if !v.is_finite() {
            continue;
        }
        count += 1;
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }

    if count == 0 {
        return None;
    }
    Some(Summary {
        count,
        mean: sum / count as f64,
        min,
        max,
    })
}

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the line at `x` (e.g., the two endpoints of a trend
    /// overlay at the x-scale extremes).
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares fit over (x, y) points.
/// Returns `None` with fewer than two points or zero x-variance
/// (a vertical line has no finite slope).
pub fn linear_fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let x_mean = points.iter().map(|p| p.0).sum::<f64>() / n;
    let y_mean = points.iter().map(|p| p.1).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for &(x, y) in points {
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean).powi(2);
    }

    if denominator == 0.0 {
        return None;
    }

    let slope = numerator / denominator;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}
