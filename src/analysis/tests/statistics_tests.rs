//! Tests for descriptive statistics and correlations

use super::*;
use crate::analysis::statistics::{mean, median, sample_std_dev};
use crate::analysis::{
    Measure, StatSummary, UndefinedReason, compute_correlations, compute_statistics,
    correlation_key, pearson,
};
use crate::models::NumericField;

#[test]
fn test_single_record_statistics() {
    let records = vec![create_record("Only", "West", 30.0, 45000.0, 1350.0, 9000.0)];
    let stats = compute_statistics(&records, &[NumericField::SatAverage]);
    let sat = &stats[&NumericField::SatAverage];

    assert_eq!(sat.count, 1);
    assert_eq!(sat.mean, Measure::Value(1350.0));
    assert_eq!(sat.median, Measure::Value(1350.0));
    assert_eq!(sat.min, Measure::Value(1350.0));
    assert_eq!(sat.max, Measure::Value(1350.0));
    assert_eq!(sat.std_dev, Measure::Undefined(UndefinedReason::InsufficientData));
}

#[test]
fn test_empty_statistics_are_undefined() {
    let summary = StatSummary::from_values(&[]);

    assert_eq!(summary.count, 0);
    for measure in [summary.mean, summary.median, summary.std_dev, summary.min, summary.max] {
        assert_eq!(measure, Measure::insufficient_data());
    }
}

#[test]
fn test_statistics_known_values() {
    let summary = StatSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

    assert_eq!(summary.count, 8);
    assert_close(summary.mean.value().unwrap(), 5.0);
    assert_close(summary.median.value().unwrap(), 4.5);
    // sum of squared deviations = 32, sample variance = 32 / 7
    assert_close(summary.std_dev.value().unwrap(), (32.0f64 / 7.0).sqrt());
    assert_eq!(summary.min, Measure::Value(2.0));
    assert_eq!(summary.max, Measure::Value(9.0));
}

#[test]
fn test_median_odd_and_even() {
    assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    assert_eq!(median(&[]), None);
}

#[test]
fn test_median_does_not_reorder_input() {
    let values = vec![9.0, 1.0, 5.0];
    let _ = median(&values);
    assert_eq!(values, vec![9.0, 1.0, 5.0]);
}

#[test]
fn test_mean_and_std_dev_helpers() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    assert_eq!(sample_std_dev(&[5.0]), None);
    assert_eq!(sample_std_dev(&[5.0, 5.0]), Some(0.0));
    assert_close(sample_std_dev(&[1.0, 3.0]).unwrap(), 2.0f64.sqrt());
}

#[test]
fn test_compute_statistics_selected_fields_only() {
    let records = create_sample_records();
    let stats = compute_statistics(&records, &[NumericField::Tuition, NumericField::Enrollment]);

    assert_eq!(stats.len(), 2);
    assert!(stats.contains_key(&NumericField::Tuition));
    assert!(!stats.contains_key(&NumericField::SatAverage));

    let tuition = &stats[&NumericField::Tuition];
    assert_close(tuition.mean.value().unwrap(), 56000.0);
    assert_eq!(tuition.median, Measure::Value(58000.0));
    assert_eq!(tuition.min, Measure::Value(44000.0));
    assert_eq!(tuition.max, Measure::Value(61000.0));
}

#[test]
fn test_statistics_are_idempotent() {
    let records = create_sample_records();
    let first = compute_statistics(&records, &NumericField::ALL);
    let second = compute_statistics(&records, &NumericField::ALL);
    assert_eq!(first, second);
}

#[test]
fn test_pearson_perfect_correlations() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    assert_close(pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).value().unwrap(), 1.0);
    assert_close(pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).value().unwrap(), -1.0);
}

#[test]
fn test_pearson_known_value() {
    // r = 0.8 for this classic example
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [2.0, 1.0, 4.0, 3.0, 5.0];
    assert_close(pearson(&xs, &ys).value().unwrap(), 0.8);
}

#[test]
fn test_pearson_constant_field_is_undefined() {
    let r = pearson(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]);
    assert_eq!(r, Measure::Undefined(UndefinedReason::ZeroVariance));
    assert_ne!(r, Measure::Value(0.0));
}

#[test]
fn test_pearson_fractional_constant_field_is_undefined() {
    // The mean of ten 0.1s is not exactly 0.1 in binary floating point
    let xs = [0.1; 10];
    let ys = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.5];

    assert_eq!(pearson(&xs, &ys), Measure::zero_variance());
    assert_eq!(pearson(&ys, &xs), Measure::zero_variance());
    assert_eq!(pearson(&[7.15; 3], &[1.0, 2.0, 3.0]), Measure::zero_variance());
}

#[test]
fn test_fractional_constant_std_dev_is_exactly_zero() {
    assert_eq!(sample_std_dev(&[0.1; 10]), Some(0.0));
    assert_eq!(
        StatSummary::from_values(&[7.15; 4]).std_dev,
        Measure::Value(0.0)
    );
}

#[test]
fn test_pearson_insufficient_data() {
    assert_eq!(pearson(&[1.0], &[2.0]), Measure::insufficient_data());
    assert_eq!(pearson(&[], &[]), Measure::insufficient_data());
}

#[test]
fn test_compute_correlations_with_constant_field() {
    // Every record shares the same tuition
    let records = vec![
        create_record("A", "West", 10.0, 50000.0, 1200.0, 1000.0),
        create_record("B", "West", 20.0, 50000.0, 1300.0, 2000.0),
        create_record("C", "West", 30.0, 50000.0, 1400.0, 3000.0),
    ];
    let correlations = compute_correlations(
        &records,
        &[
            (NumericField::Tuition, NumericField::SatAverage),
            (NumericField::AcceptanceRate, NumericField::SatAverage),
        ],
    );

    assert_eq!(
        correlations["tuition_vs_sat_average"],
        Measure::zero_variance()
    );
    assert_close(
        correlations["acceptance_rate_vs_sat_average"].value().unwrap(),
        1.0,
    );
}

#[test]
fn test_correlation_key_format() {
    assert_eq!(
        correlation_key(NumericField::Enrollment, NumericField::AcceptanceRate),
        "enrollment_vs_acceptance_rate"
    );
}

#[test]
fn test_correlations_with_shared_fractional_acceptance_rate() {
    let records: Vec<_> = (0..10)
        .map(|i| {
            create_record(
                &format!("College {}", i),
                "West",
                0.1,
                40000.0 + 1000.0 * i as f64,
                1100.0 + 35.0 * i as f64,
                5000.0,
            )
        })
        .collect();
    let correlations = compute_correlations(
        &records,
        &[
            (NumericField::AcceptanceRate, NumericField::SatAverage),
            (NumericField::Tuition, NumericField::SatAverage),
        ],
    );

    assert_eq!(
        correlations["acceptance_rate_vs_sat_average"],
        Measure::zero_variance()
    );
    assert_close(correlations["tuition_vs_sat_average"].value().unwrap(), 1.0);
}
