//! Dataset-level validation
//!
//! Runs the record validator over every record without short-circuiting,
//! detects duplicate names, and assembles the [`ValidationReport`].
//!
//! Duplicate names are matched exactly and case-sensitively. Records whose
//! `name` is missing or not a string are left out of duplicate detection;
//! the record validator already reports an error for each of them.

use crate::models::{RawRecord, RecordSource};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::record_validator::{RecordValidator, ValidationRules};
use super::report::{ValidationIssue, ValidationReport};

/// Validator for a complete record collection
#[derive(Debug, Clone, Default)]
pub struct DatasetValidator {
    record_validator: RecordValidator,
}

impl DatasetValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            record_validator: RecordValidator::new(rules),
        }
    }

    /// Validate whatever the loader produced
    ///
    /// A missing or malformed source produces a report holding a single
    /// structural error and no record-level findings.
    pub fn validate_source(&self, source: &RecordSource) -> ValidationReport {
        match source.failure_message() {
            None => self.validate(source.records()),
            Some(message) => {
                warn!("Structural validation failure: {}", message);
                ValidationReport::from_issues(0, vec![ValidationIssue::structural(message)])
            }
        }
    }

    /// Validate an ordered record collection
    pub fn validate(&self, records: &[RawRecord]) -> ValidationReport {
        let mut issues = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let record_issues = self.record_validator.validate(record, index);
            if !record_issues.is_clean() {
                debug!(
                    "Record {} ({}): {} errors, {} warnings",
                    index,
                    record.name().unwrap_or("Unknown"),
                    record_issues.errors.len(),
                    record_issues.warnings.len()
                );
            }
            issues.extend(record_issues.into_issues());
        }

        issues.extend(find_duplicate_names(records));

        let report = ValidationReport::from_issues(records.len(), issues);
        let summary = report.summary();
        info!(
            "Validation complete: {} records, {} errors across {} records, {} warnings across {} records",
            summary.total_records,
            summary.total_errors,
            summary.records_with_errors,
            summary.total_warnings,
            summary.records_with_warnings
        );

        report
    }
}

/// One warning per name that occurs more than once, in first-seen order
///
/// Matching is exact and case-sensitive. Records without a string name are
/// not considered, since each already carries a record-level error.
pub fn find_duplicate_names(records: &[RawRecord]) -> Vec<ValidationIssue> {
    let mut order: Vec<&str> = Vec::new();
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        if let Some(name) = record.name() {
            let entry = positions.entry(name).or_default();
            if entry.is_empty() {
                order.push(name);
            }
            entry.push(index);
        }
    }

    order
        .into_iter()
        .filter_map(|name| {
            let indexes = &positions[name];
            (indexes.len() > 1).then(|| ValidationIssue::duplicate_name(name, indexes))
        })
        .collect()
}
