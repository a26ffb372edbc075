//! Fixed-width histogram binning for distribution reporting
//!
//! The observed range `[min, max]` is split into `bin_count` equal-width
//! intervals. Every interval is half-open `[low, high)` except the last,
//! which is closed so that the maximum lands in it. A degenerate range
//! (`min == max`) produces a single bin holding every value.

use crate::error::{CollegeError, Result};
use crate::models::{NumericField, Record};
use serde::Serialize;
use tracing::debug;

/// One histogram interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub range_low: f64,
    pub range_high: f64,
    pub count: usize,
    /// Interval midpoint, rounded to the nearest integer
    pub midpoint: i64,
}

impl Bin {
    fn new(range_low: f64, range_high: f64) -> Self {
        Self {
            range_low,
            range_high,
            count: 0,
            midpoint: ((range_low + range_high) / 2.0).round() as i64,
        }
    }

    /// Dashboard label with truncated integer bounds, e.g. `"400-550"`
    pub fn label(&self) -> String {
        format!("{}-{}", self.range_low as i64, self.range_high as i64)
    }

    /// Whether `value` falls in this bin; `is_last` closes the interval on the right
    pub fn contains(&self, value: f64, is_last: bool) -> bool {
        value >= self.range_low
            && (value < self.range_high || (is_last && value <= self.range_high))
    }
}

/// Histogram of one numeric field over the cleaned records
pub fn histogram(records: &[Record], field: NumericField, bin_count: usize) -> Result<Vec<Bin>> {
    let bins = bin_values(&field.values(records), bin_count)?;
    debug!(
        "Histogram for {}: {} values in {} bins",
        field,
        records.len(),
        bins.len()
    );
    Ok(bins)
}

/// Bin a sequence of values into `bin_count` equal-width intervals
pub fn bin_values(values: &[f64], bin_count: usize) -> Result<Vec<Bin>> {
    if bin_count == 0 {
        return Err(CollegeError::configuration(
            "Bin count must be greater than 0",
        ));
    }

    let Some((min, max)) = values.iter().fold(None, |range, &v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    }) else {
        return Ok(Vec::new());
    };

    if min == max {
        let mut bin = Bin::new(min, max);
        bin.count = values.len();
        return Ok(vec![bin]);
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|i| {
            let low = min + width * i as f64;
            let high = if i + 1 == bin_count {
                max
            } else {
                min + width * (i + 1) as f64
            };
            Bin::new(low, high)
        })
        .collect();

    let last = bin_count - 1;
    for &value in values {
        let mut index = (((value - min) / width).floor() as usize).min(last);
        // Rounding can place a value just across a computed edge
        if !bins[index].contains(value, index == last) {
            if value < bins[index].range_low {
                index -= 1;
            } else {
                index += 1;
            }
        }
        bins[index].count += 1;
    }

    Ok(bins)
}
