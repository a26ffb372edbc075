//! Tests for statistics, regional aggregation and histogram binning

pub mod histogram_tests;
pub mod statistics_tests;

use crate::models::{Location, Record};
use std::collections::BTreeMap;

/// Create a cleaned record with the given numeric fields
pub fn create_record(
    name: &str,
    region: &str,
    acceptance_rate: f64,
    tuition: f64,
    sat_average: f64,
    enrollment: f64,
) -> Record {
    let demographics = BTreeMap::from([
        ("white".to_string(), 50.0),
        ("asian".to_string(), 20.0),
        ("hispanic".to_string(), 15.0),
        ("black".to_string(), 10.0),
        ("other".to_string(), 5.0),
    ]);

    Record {
        name: name.to_string(),
        acceptance_rate,
        tuition,
        sat_average,
        enrollment,
        demographics,
        location: Location {
            state: "NY".to_string(),
            region: region.to_string(),
        },
    }
}

/// Records that differ only in region and enrollment
pub fn create_enrollment_record(name: &str, region: &str, enrollment: f64) -> Record {
    create_record(name, region, 50.0, 40000.0, 1300.0, enrollment)
}

/// Small mixed dataset spanning three regions
pub fn create_sample_records() -> Vec<Record> {
    vec![
        create_record("Harvard University", "Northeast", 4.0, 57000.0, 1520.0, 21000.0),
        create_record("Stanford University", "West", 4.5, 58000.0, 1510.0, 17000.0),
        create_record("UCLA", "West", 11.0, 44000.0, 1400.0, 45000.0),
        create_record("Duke University", "Southeast", 8.0, 60000.0, 1500.0, 16000.0),
        create_record("Cornell University", "Northeast", 11.0, 61000.0, 1480.0, 24000.0),
    ]
}

/// Approximate float comparison for computed statistics
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
