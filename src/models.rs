//! Core data structures for college records.
//!
//! Records enter the crate as [`RawRecord`]s (untyped JSON objects) so that
//! validation can report every missing field and wrong value kind. Only records
//! that pass all error-level checks are converted into typed [`Record`]s.

use crate::constants::fields;
use crate::error::{CollegeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Geographic location of a college
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub state: String,
    pub region: String,
}

/// A validated college record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub acceptance_rate: f64,
    pub tuition: f64,
    pub sat_average: f64,
    pub enrollment: f64,
    /// Demographic category -> percentage of the student body
    pub demographics: BTreeMap<String, f64>,
    pub location: Location,
}

impl Record {
    /// Convert a raw record that passed validation into a typed record
    pub fn from_raw(raw: &RawRecord, index: usize) -> Result<Self> {
        serde_json::from_value(raw.value().clone()).map_err(|e| CollegeError::RecordConversion {
            index,
            reason: e.to_string(),
        })
    }

    /// Region used for grouping
    pub fn region(&self) -> &str {
        &self.location.region
    }
}

/// Result of looking up a numeric field on a raw record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Field is absent
    Missing,
    /// Field holds a JSON number
    Number(f64),
    /// Field holds something other than a number
    Other(&'a Value),
}

/// One element of the loaded top-level collection, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    value: Value,
}

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Underlying JSON value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the record is a JSON object at all
    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    /// Look up a top-level field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.value.as_object().and_then(|map| map.get(key))
    }

    /// Whether a top-level field is present (a JSON null counts as present)
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Look up a numeric field, distinguishing absence from a wrong value kind
    pub fn number(&self, key: &str) -> FieldValue<'_> {
        match self.field(key) {
            None => FieldValue::Missing,
            Some(value) => match value.as_f64() {
                Some(number) => FieldValue::Number(number),
                None => FieldValue::Other(value),
            },
        }
    }

    /// Record name when present and a string
    pub fn name(&self) -> Option<&str> {
        self.field(fields::NAME).and_then(Value::as_str)
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Outcome of obtaining the record collection from its source
///
/// Loader failures never surface as errors: a missing file, a malformed
/// document and an empty collection are all distinct, inspectable states.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    /// Source parsed into an ordered collection (possibly empty)
    Loaded(Vec<RawRecord>),
    /// Source could not be read
    Unavailable { location: String, reason: String },
    /// Source was read but is not a list of records
    Malformed { reason: String },
}

impl RecordSource {
    /// Records when the source loaded, empty otherwise
    pub fn records(&self) -> &[RawRecord] {
        match self {
            RecordSource::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, RecordSource::Loaded(_))
    }

    /// Human-readable description of a structural failure, if any
    pub fn failure_message(&self) -> Option<String> {
        match self {
            RecordSource::Loaded(_) => None,
            RecordSource::Unavailable { location, reason } => {
                Some(format!("Data file {} not available: {}", location, reason))
            }
            RecordSource::Malformed { reason } => Some(reason.clone()),
        }
    }

    /// Convert a structural failure into an error, for callers that cannot continue
    pub fn into_records(self) -> Result<Vec<RawRecord>> {
        match self {
            RecordSource::Loaded(records) => Ok(records),
            RecordSource::Unavailable { location, reason } => {
                Err(CollegeError::SourceUnavailable { location, reason })
            }
            RecordSource::Malformed { reason } => Err(CollegeError::MalformedSource { reason }),
        }
    }
}

/// Numeric record fields available to statistics, correlation and binning
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    AcceptanceRate,
    Tuition,
    SatAverage,
    Enrollment,
}

impl NumericField {
    pub const ALL: [NumericField; 4] = [
        NumericField::AcceptanceRate,
        NumericField::Tuition,
        NumericField::SatAverage,
        NumericField::Enrollment,
    ];

    /// Source field name
    pub fn name(&self) -> &'static str {
        match self {
            NumericField::AcceptanceRate => fields::ACCEPTANCE_RATE,
            NumericField::Tuition => fields::TUITION,
            NumericField::SatAverage => fields::SAT_AVERAGE,
            NumericField::Enrollment => fields::ENROLLMENT,
        }
    }

    /// Extract this field from a record
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            NumericField::AcceptanceRate => record.acceptance_rate,
            NumericField::Tuition => record.tuition,
            NumericField::SatAverage => record.sat_average,
            NumericField::Enrollment => record.enrollment,
        }
    }

    /// Values of this field across records, in record order
    pub fn values(&self, records: &[Record]) -> Vec<f64> {
        records.iter().map(|record| self.value(record)).collect()
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericField {
    type Err = CollegeError;

    fn from_str(s: &str) -> Result<Self> {
        NumericField::ALL
            .into_iter()
            .find(|field| field.name() == s.trim())
            .ok_or_else(|| {
                CollegeError::configuration(format!(
                    "Unknown numeric field '{}'. Available fields: {}",
                    s,
                    NumericField::ALL.map(|f| f.name()).join(", ")
                ))
            })
    }
}
