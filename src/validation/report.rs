//! Validation issues and the dataset validation report
//!
//! A [`ValidationReport`] is derived entirely from its issue list: validity and
//! summary counts are computed once, at construction, and never edited.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Severity levels for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; the record still participates in aggregation
    Warning,
    /// The record is excluded from the cleaned set
    Error,
}

/// What kind of check produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// The source collection itself is missing or not list-shaped
    Structural,
    /// A single record field failed a check
    Field,
    /// A record name occurs more than once
    Duplicate,
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub category: IssueCategory,
    /// Position of the record in the source collection (none for structural issues)
    pub record_index: Option<usize>,
    pub record_name: Option<String>,
    pub field: Option<String>,
    /// Offending value, when there is one
    pub value: Option<Value>,
    pub message: String,
}

impl ValidationIssue {
    /// Error-level finding on one record field
    pub fn field_error(
        index: usize,
        name: Option<&str>,
        field: &str,
        value: Option<&Value>,
        message: impl Into<String>,
    ) -> Self {
        Self::field_issue(Severity::Error, index, name, field, value, message)
    }

    /// Warning-level finding on one record field
    pub fn field_warning(
        index: usize,
        name: Option<&str>,
        field: &str,
        value: Option<&Value>,
        message: impl Into<String>,
    ) -> Self {
        Self::field_issue(Severity::Warning, index, name, field, value, message)
    }

    fn field_issue(
        severity: Severity,
        index: usize,
        name: Option<&str>,
        field: &str,
        value: Option<&Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: IssueCategory::Field,
            record_index: Some(index),
            record_name: name.map(str::to_string),
            field: Some(field.to_string()),
            value: value.cloned(),
            message: message.into(),
        }
    }

    /// Whole-record error not tied to a single field
    pub fn record_error(index: usize, value: &Value, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category: IssueCategory::Field,
            record_index: Some(index),
            record_name: None,
            field: None,
            value: Some(value.clone()),
            message: message.into(),
        }
    }

    /// Warning for a name shared by several records, attached to the first occurrence
    pub fn duplicate_name(name: &str, indexes: &[usize]) -> Self {
        let positions: Vec<String> = indexes.iter().map(|i| i.to_string()).collect();
        Self {
            severity: Severity::Warning,
            category: IssueCategory::Duplicate,
            record_index: indexes.first().copied(),
            record_name: Some(name.to_string()),
            field: Some(crate::constants::fields::NAME.to_string()),
            value: Some(Value::String(name.to_string())),
            message: format!(
                "Duplicate college name: {} (records {})",
                name,
                positions.join(", ")
            ),
        }
    }

    /// Fatal source-level error
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category: IssueCategory::Structural,
            record_index: None,
            record_name: None,
            field: None,
            value: None,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record_index {
            Some(index) if self.category != IssueCategory::Duplicate => write!(
                f,
                "College {} ({}): {}",
                index,
                self.record_name.as_deref().unwrap_or("Unknown"),
                self.message
            ),
            _ => f.write_str(&self.message),
        }
    }
}

/// Summary counts over a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_records: usize,
    /// Distinct records with at least one error
    pub records_with_errors: usize,
    /// Distinct records with at least one warning
    pub records_with_warnings: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

/// Result of validating a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    valid: bool,
    issues: Vec<ValidationIssue>,
    summary: ValidationSummary,
}

impl ValidationReport {
    /// Build a report from an ordered issue list
    pub fn from_issues(total_records: usize, issues: Vec<ValidationIssue>) -> Self {
        let error_records: BTreeSet<usize> = issues
            .iter()
            .filter(|issue| issue.is_error())
            .filter_map(|issue| issue.record_index)
            .collect();
        let warning_records: BTreeSet<usize> = issues
            .iter()
            .filter(|issue| issue.is_warning())
            .filter_map(|issue| issue.record_index)
            .collect();

        let total_errors = issues.iter().filter(|issue| issue.is_error()).count();
        let total_warnings = issues.len() - total_errors;

        Self {
            valid: total_errors == 0,
            summary: ValidationSummary {
                total_records,
                records_with_errors: error_records.len(),
                records_with_warnings: warning_records.len(),
                total_errors,
                total_warnings,
            },
            issues,
        }
    }

    /// True when no error-level issue is present
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn summary(&self) -> &ValidationSummary {
        &self.summary
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_warning())
    }

    /// Whether the source itself failed (missing or not list-shaped)
    pub fn is_structural_failure(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.category == IssueCategory::Structural)
    }

    /// Indexes of records carrying at least one error
    pub fn rejected_indexes(&self) -> BTreeSet<usize> {
        self.errors().filter_map(|issue| issue.record_index).collect()
    }
}
