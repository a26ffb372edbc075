//! Field-level validation of a single college record
//!
//! Checks presence of required fields, value kinds and domain ranges. The
//! validator never fails: every problem becomes an error or warning issue.

use crate::constants::{
    ACCEPTANCE_RATE_MAX, ACCEPTANCE_RATE_MIN, DEFAULT_DEMOGRAPHICS_TOLERANCE,
    DEFAULT_TUITION_WARNING_THRESHOLD, DEMOGRAPHIC_PERCENT_MAX, DEMOGRAPHIC_PERCENT_MIN,
    DEMOGRAPHICS_EXPECTED_TOTAL, REQUIRED_FIELDS, SAT_MAX, SAT_MIN, fields,
};
use crate::models::{FieldValue, RawRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use super::report::ValidationIssue;

/// Thresholds that can be tuned from configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Tuition above this raises a warning
    pub tuition_warning_threshold: f64,
    /// Allowed deviation of the demographics total from 100
    pub demographics_tolerance: f64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            tuition_warning_threshold: DEFAULT_TUITION_WARNING_THRESHOLD,
            demographics_tolerance: DEFAULT_DEMOGRAPHICS_TOLERANCE,
        }
    }
}

/// Errors and warnings found on one record, each in check order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordIssues {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl RecordIssues {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors followed by warnings
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        let mut issues = self.errors;
        issues.extend(self.warnings);
        issues
    }
}

/// Validator for individual college records
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    rules: ValidationRules,
}

/// Context shared by the checks of one record
struct Checker<'a> {
    record: &'a RawRecord,
    index: usize,
    name: Option<&'a str>,
    issues: RecordIssues,
}

impl<'a> Checker<'a> {
    fn error(&mut self, field: &str, value: Option<&Value>, message: String) {
        self.issues.errors.push(ValidationIssue::field_error(
            self.index, self.name, field, value, message,
        ));
    }

    fn warning(&mut self, field: &str, value: Option<&Value>, message: String) {
        self.issues.warnings.push(ValidationIssue::field_warning(
            self.index, self.name, field, value, message,
        ));
    }

    /// Numeric value of a field that must lie in `[min, max]`; reports an error otherwise
    fn ranged_number(&mut self, field: &str, label: &str, min: f64, max: f64) -> Option<f64> {
        match self.record.number(field) {
            FieldValue::Missing => None,
            FieldValue::Number(n) if (min..=max).contains(&n) => Some(n),
            FieldValue::Number(n) => {
                let value = self.record.field(field);
                self.error(field, value, format!("Invalid {} {}", label, format_number(n)));
                None
            }
            FieldValue::Other(value) => {
                self.error(field, Some(value), format!("Invalid {} {}", label, value));
                None
            }
        }
    }
}

impl RecordValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate one record at its position in the source collection
    pub fn validate(&self, record: &RawRecord, index: usize) -> RecordIssues {
        if !record.is_object() {
            return RecordIssues {
                errors: vec![ValidationIssue::record_error(
                    index,
                    record.value(),
                    "Record is not an object",
                )],
                warnings: Vec::new(),
            };
        }

        let mut checker = Checker {
            record,
            index,
            name: record.name(),
            issues: RecordIssues::default(),
        };

        for field in REQUIRED_FIELDS {
            if !record.has_field(field) {
                checker.error(field, None, format!("Missing required field '{}'", field));
            }
        }

        self.check_name(&mut checker);
        checker.ranged_number(
            fields::ACCEPTANCE_RATE,
            "acceptance rate",
            ACCEPTANCE_RATE_MIN,
            ACCEPTANCE_RATE_MAX,
        );
        self.check_tuition(&mut checker);
        checker.ranged_number(fields::SAT_AVERAGE, "SAT score", SAT_MIN, SAT_MAX);
        checker.ranged_number(fields::ENROLLMENT, "enrollment", 0.0, f64::INFINITY);
        self.check_demographics(&mut checker);
        self.check_location(&mut checker);

        trace!(
            "Record {} validated: {} errors, {} warnings",
            index,
            checker.issues.errors.len(),
            checker.issues.warnings.len()
        );

        checker.issues
    }

    fn check_name(&self, checker: &mut Checker<'_>) {
        if let Some(value) = checker.record.field(fields::NAME) {
            if !value.is_string() {
                checker.error(fields::NAME, Some(value), format!("Invalid name {}", value));
            }
        }
    }

    fn check_tuition(&self, checker: &mut Checker<'_>) {
        let value = checker.record.field(fields::TUITION);
        match checker.record.number(fields::TUITION) {
            FieldValue::Missing => {}
            FieldValue::Number(tuition) if tuition <= 0.0 => checker.error(
                fields::TUITION,
                value,
                format!("Invalid tuition {}", format_number(tuition)),
            ),
            FieldValue::Number(tuition) => {
                if tuition > self.rules.tuition_warning_threshold {
                    checker.warning(
                        fields::TUITION,
                        value,
                        format!("Very high tuition ${}", format_thousands(tuition)),
                    );
                }
            }
            FieldValue::Other(other) => checker.error(
                fields::TUITION,
                Some(other),
                format!("Invalid tuition {}", other),
            ),
        }
    }

    fn check_demographics(&self, checker: &mut Checker<'_>) {
        let Some(value) = checker.record.field(fields::DEMOGRAPHICS) else {
            return;
        };
        let Some(categories) = value.as_object() else {
            checker.error(
                fields::DEMOGRAPHICS,
                Some(value),
                format!("Invalid demographics {}", value),
            );
            return;
        };

        let mut total = 0.0;
        for (category, percent) in categories {
            let field = format!("{}.{}", fields::DEMOGRAPHICS, category);
            match percent.as_f64() {
                Some(p) => {
                    total += p;
                    if !(DEMOGRAPHIC_PERCENT_MIN..=DEMOGRAPHIC_PERCENT_MAX).contains(&p) {
                        checker.error(
                            &field,
                            Some(percent),
                            format!(
                                "Invalid demographic percentage for {}: {}",
                                category,
                                format_number(p)
                            ),
                        );
                    }
                }
                None => checker.error(
                    &field,
                    Some(percent),
                    format!("Invalid demographic percentage for {}: {}", category, percent),
                ),
            }
        }

        if (total - DEMOGRAPHICS_EXPECTED_TOTAL).abs() > self.rules.demographics_tolerance {
            checker.warning(
                fields::DEMOGRAPHICS,
                Some(value),
                format!("Demographics don't sum to 100% (sum: {:.1}%)", total),
            );
        }
    }

    fn check_location(&self, checker: &mut Checker<'_>) {
        let Some(value) = checker.record.field(fields::LOCATION) else {
            return;
        };
        let Some(location) = value.as_object() else {
            checker.error(
                fields::LOCATION,
                Some(value),
                format!("Invalid location {}", value),
            );
            return;
        };

        for key in [fields::STATE, fields::REGION] {
            let field = format!("{}.{}", fields::LOCATION, key);
            match location.get(key) {
                Some(Value::String(_)) => {}
                Some(other) => {
                    checker.error(&field, Some(other), format!("Invalid {} {}", key, other))
                }
                None => checker.error(&field, None, format!("Missing location field '{}'", key)),
            }
        }
    }
}

/// Render a number without a trailing `.0` for whole values
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Render a whole amount with thousands separators, e.g. `85,000`
pub(crate) fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
