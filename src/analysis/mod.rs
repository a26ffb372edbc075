//! Statistical aggregation over cleaned college records
//!
//! All computations assume their input is already the cleaned set produced by
//! [`crate::validation::clean_records`]; none of them re-validate.
//!
//! - [`statistics`] - Mean, median, sample standard deviation, min, max and Pearson correlation
//! - [`regional`] - Per-region aggregates and demographic averages
//! - [`histogram`] - Equal-width binning of a numeric field
//! - [`measure`] - Values that may be undefined (insufficient data, zero variance)

pub mod histogram;
pub mod measure;
pub mod regional;
pub mod statistics;

#[cfg(test)]
pub mod tests;

pub use histogram::{Bin, bin_values, histogram};
pub use measure::{Measure, UndefinedReason};
pub use regional::{
    RegionalDemographics, RegionalSummary, aggregate_by_region, demographics_by_region,
    group_by_region,
};
pub use statistics::{
    StatSummary, compute_correlations, compute_statistics, correlation_key, pearson,
};
