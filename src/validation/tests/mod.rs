//! Tests for record and dataset validation
//!
//! Shared fixture builders live here; each component has its own test file.


use crate::models::RawRecord;
use crate::validation::ValidationIssue;
use serde_json::{Value, json};

/// JSON for a college record that passes every check
pub fn valid_college_json(name: &str) -> Value {
    json!({
        "name": name,
        "acceptance_rate": 35.2,
        "tuition": 48000,
        "sat_average": 1390,
        "enrollment": 12000,
        "demographics": {
            "white": 45.0,
            "asian": 25.0,
            "hispanic": 15.0,
            "black": 10.0,
            "other": 5.0
        },
        "location": {"state": "CA", "region": "West"}
    })
}

/// A valid raw record
pub fn create_valid_record(name: &str) -> RawRecord {
    RawRecord::new(valid_college_json(name))
}

/// A valid raw record with one field replaced
pub fn create_record_with(name: &str, field: &str, value: Value) -> RawRecord {
    let mut json = valid_college_json(name);
    json[field] = value;
    RawRecord::new(json)
}

/// A valid raw record with one field removed
pub fn create_record_without(name: &str, field: &str) -> RawRecord {
    let mut json = valid_college_json(name);
    if let Some(map) = json.as_object_mut() {
        map.remove(field);
    }
    RawRecord::new(json)
}

/// Issues concerning the given field
pub fn issues_for_field<'a>(issues: &'a [ValidationIssue], field: &str) -> Vec<&'a ValidationIssue> {
    issues
        .iter()
        .filter(|issue| issue.field.as_deref() == Some(field))
        .collect()
}
