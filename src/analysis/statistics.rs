//! Descriptive statistics and pairwise correlations over cleaned records
//!
//! Every function here is a pure function of its input slice: nothing is
//! cached between calls. Each statistic is a single O(n) pass except the
//! median, which sorts a copy of the values (O(n log n)).

use crate::models::{NumericField, Record};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::measure::Measure;

/// Descriptive statistics for one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatSummary {
    pub count: usize,
    pub mean: Measure,
    pub median: Measure,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: Measure,
    pub min: Measure,
    pub max: Measure,
}

impl StatSummary {
    /// Summarise a sequence of values
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            count: values.len(),
            mean: mean(values).into(),
            median: median(values).into(),
            std_dev: sample_std_dev(values).into(),
            min: values.iter().copied().reduce(f64::min).into(),
            max: values.iter().copied().reduce(f64::max).into(),
        }
    }
}

/// Per-field statistics, keyed by field
pub fn compute_statistics(
    records: &[Record],
    fields: &[NumericField],
) -> BTreeMap<NumericField, StatSummary> {
    fields
        .iter()
        .map(|field| {
            let summary = StatSummary::from_values(&field.values(records));
            debug!(
                "Statistics for {}: n={}, mean={}, std_dev={}",
                field, summary.count, summary.mean, summary.std_dev
            );
            (*field, summary)
        })
        .collect()
}

/// Key under which a correlation between two fields is reported
pub fn correlation_key(a: NumericField, b: NumericField) -> String {
    format!("{}_vs_{}", a, b)
}

/// Pearson correlation for each requested field pair, keyed by [`correlation_key`]
///
/// Pairs where either field is constant come back as `Undefined(ZeroVariance)`,
/// never as a computed `0.0`.
pub fn compute_correlations(
    records: &[Record],
    pairs: &[(NumericField, NumericField)],
) -> BTreeMap<String, Measure> {
    pairs
        .iter()
        .map(|&(a, b)| {
            let r = pearson(&a.values(records), &b.values(records));
            debug!("Correlation {} vs {}: {}", a, b, r);
            (correlation_key(a, b), r)
        })
        .collect()
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Median; the midpoint average of the two central values for even counts
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation; `None` with fewer than two values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    if is_constant(values) {
        return Some(0.0);
    }

    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Pearson correlation coefficient of two paired sequences
///
/// Sequences are paired by position; both must have the same length.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Measure {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Measure::insufficient_data();
    }

    let (xs, ys) = (&xs[..n], &ys[..n]);
    // Decided on the raw values: a rounded mean leaves residual variance
    if is_constant(xs) || is_constant(ys) {
        return Measure::zero_variance();
    }

    let (Some(mean_x), Some(mean_y)) = (mean(xs), mean(ys)) else {
        return Measure::insufficient_data();
    };

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Measure::zero_variance();
    }

    // The (n - 1) factors cancel between covariance and the standard deviations
    let r = covariance / (var_x.sqrt() * var_y.sqrt());
    Measure::Value(r.clamp(-1.0, 1.0))
}

/// Whether every value equals the first
fn is_constant(values: &[f64]) -> bool {
    values.split_first().is_none_or(|(first, rest)| rest.iter().all(|v| v == first))
}
