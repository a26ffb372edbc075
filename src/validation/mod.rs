//! Record and dataset validation for college data
//!
//! This module decides whether records are well-formed and which of them may
//! take part in downstream aggregation.
//!
//! # Architecture
//!
//! - [`record_validator`] - Field presence, kind and range checks for one record
//! - [`dataset_validator`] - Runs record checks over a collection and detects duplicate names
//! - [`report`] - Issues, severities and the derived validation report
//! - [`cleaning`] - Filters the collection down to records without errors
//!
//! # Severity
//!
//! Errors exclude a record from the cleaned set. Warnings (high tuition,
//! demographics off by more than the tolerance, duplicate names) are
//! informational and the record still participates in aggregation.
//!
//! # Example Usage
//!
//! ```rust
//! use college_insights::models::{RawRecord, RecordSource};
//! use college_insights::validation::{DatasetValidator, clean_records};
//! use serde_json::json;
//!
//! let records = vec![RawRecord::new(json!({
//!     "name": "Example College",
//!     "acceptance_rate": 42.0,
//!     "tuition": 38000,
//!     "sat_average": 1310,
//!     "enrollment": 9000,
//!     "demographics": {"white": 55.0, "asian": 20.0, "other": 25.0},
//!     "location": {"state": "IL", "region": "Midwest"}
//! }))];
//!
//! let validator = DatasetValidator::default();
//! let report = validator.validate_source(&RecordSource::Loaded(records.clone()));
//! assert!(report.is_valid());
//!
//! let cleaned = clean_records(&records, &report).unwrap();
//! assert_eq!(cleaned.len(), 1);
//! ```

pub mod cleaning;
pub mod dataset_validator;
pub mod record_validator;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use cleaning::clean_records;
pub use dataset_validator::{DatasetValidator, find_duplicate_names};
pub use record_validator::{RecordIssues, RecordValidator, ValidationRules};
pub use report::{IssueCategory, Severity, ValidationIssue, ValidationReport, ValidationSummary};
