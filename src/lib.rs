//! College Insights Library
//!
//! A Rust library for validating college admissions records and deriving
//! the statistics shown on an admissions dashboard.
//!
//! This library provides tools for:
//! - Loading a JSON collection of college records
//! - Validating every record with errors and warnings, and detecting duplicate names
//! - Cleaning the collection down to records without errors
//! - Descriptive statistics and Pearson correlations with explicit undefined results
//! - Regional aggregates in first-seen region order
//! - Fixed-width histogram binning
//! - Exporting dashboard data and processed records as JSON, CSV or Parquet

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod validation;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{CollegeError, Result};
pub use models::{Location, NumericField, RawRecord, Record, RecordSource};
pub use pipeline::{AnalysisOutcome, CollegeAnalyzer};
pub use validation::{ValidationIssue, ValidationReport};
