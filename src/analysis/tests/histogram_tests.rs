//! Tests for histogram binning

use super::*;
use crate::analysis::{Bin, bin_values, histogram};
use crate::error::CollegeError;
use crate::models::NumericField;

#[test]
fn test_sat_range_eight_bins() {
    let bins = bin_values(&[400.0, 1600.0], 8).unwrap();

    assert_eq!(bins.len(), 8);
    for bin in &bins {
        assert_close(bin.range_high - bin.range_low, 150.0);
    }

    assert_eq!(bins[0].range_low, 400.0);
    assert_eq!(bins[0].range_high, 550.0);
    assert_eq!(bins[0].count, 1);
    assert_eq!(bins[0].midpoint, 475);

    assert_eq!(bins[7].range_low, 1450.0);
    assert_eq!(bins[7].range_high, 1600.0);
    assert_eq!(bins[7].count, 1);

    let middle: usize = bins[1..7].iter().map(|b| b.count).sum();
    assert_eq!(middle, 0);
}

#[test]
fn test_interior_edges_are_half_open() {
    // 550 sits on the edge between the first and second bins
    let bins = bin_values(&[400.0, 550.0, 1600.0], 8).unwrap();
    assert_eq!(bins[0].count, 1);
    assert_eq!(bins[1].count, 1);
}

#[test]
fn test_counts_sum_to_input_length() {
    let values = [1200.0, 1310.0, 1455.0, 1580.0, 1299.5, 1400.0, 1200.0, 1333.3];
    let bins = bin_values(&values, 5).unwrap();

    assert_eq!(bins.len(), 5);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    assert_eq!(bins.last().unwrap().range_high, 1580.0);
}

#[test]
fn test_counts_agree_with_bin_intervals() {
    let values = [
        400.0, 0.1 + 0.2, 1000.3, 1123.45, 1299.99, 1300.0, 1450.7, 1599.9, 1600.0, 700.0,
    ];
    let bins = bin_values(&values, 7).unwrap();
    let last = bins.len() - 1;

    for (index, bin) in bins.iter().enumerate() {
        let inside = values
            .iter()
            .filter(|&&v| bin.contains(v, index == last))
            .count();
        assert_eq!(bin.count, inside, "bin {} ({})", index, bin.label());
    }
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
}

#[test]
fn test_degenerate_range_single_bin() {
    let bins = bin_values(&[1400.0, 1400.0, 1400.0], 8).unwrap();

    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].range_low, 1400.0);
    assert_eq!(bins[0].range_high, 1400.0);
    assert_eq!(bins[0].count, 3);
    assert_eq!(bins[0].midpoint, 1400);
}

#[test]
fn test_empty_values_no_bins() {
    assert!(bin_values(&[], 8).unwrap().is_empty());
}

#[test]
fn test_zero_bins_rejected() {
    let result = bin_values(&[1.0, 2.0], 0);
    assert!(matches!(result, Err(CollegeError::Configuration { .. })));
}

#[test]
fn test_midpoint_rounding() {
    let bins = bin_values(&[0.0, 3.0], 2).unwrap();
    // [0, 1.5) -> 0.75 rounds to 1, [1.5, 3] -> 2.25 rounds to 2
    assert_eq!(bins[0].midpoint, 1);
    assert_eq!(bins[1].midpoint, 2);
}

#[test]
fn test_bin_label_and_contains() {
    let bin = Bin {
        range_low: 1450.0,
        range_high: 1600.0,
        count: 0,
        midpoint: 1525,
    };

    assert_eq!(bin.label(), "1450-1600");
    assert!(bin.contains(1450.0, false));
    assert!(!bin.contains(1600.0, false));
    assert!(bin.contains(1600.0, true));
    assert!(!bin.contains(1449.9, true));
}

#[test]
fn test_histogram_over_records() {
    let records = create_sample_records();
    let bins = histogram(&records, NumericField::SatAverage, 4).unwrap();

    assert_eq!(bins.len(), 4);
    assert_eq!(bins[0].range_low, 1400.0);
    assert_eq!(bins[3].range_high, 1520.0);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), records.len());
    // width 30: [1400, 1430) [1430, 1460) [1460, 1490) [1490, 1520]
    assert_eq!(
        bins.iter().map(|b| b.count).collect::<Vec<_>>(),
        vec![1, 0, 1, 3]
    );
}
