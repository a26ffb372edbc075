//! Grouped aggregation of cleaned records by region
//!
//! Groups are emitted in first-seen order, so repeated runs over the same
//! input always produce the same sequence. Every group holds at least one
//! record by construction.

use crate::models::Record;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Aggregates for one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalSummary {
    pub region: String,
    pub count: usize,
    pub avg_acceptance_rate: f64,
    pub avg_tuition: f64,
    pub avg_sat: f64,
    pub total_enrollment: f64,
}

/// Mean demographic composition for one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalDemographics {
    pub region: String,
    /// Category -> mean percentage over the region's records that report it
    pub averages: BTreeMap<String, f64>,
}

/// Partition records by region, preserving first-seen region order
pub fn group_by_region(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let region = record.region();
        let position = *positions.entry(region).or_insert_with(|| {
            groups.push((region, Vec::new()));
            groups.len() - 1
        });
        groups[position].1.push(record);
    }

    groups
}

/// Per-region count, mean acceptance rate, tuition and SAT, and total enrollment
pub fn aggregate_by_region(records: &[Record]) -> Vec<RegionalSummary> {
    let summaries: Vec<RegionalSummary> = group_by_region(records)
        .into_iter()
        .map(|(region, group)| {
            let count = group.len() as f64;
            let sum = |f: fn(&Record) -> f64| group.iter().map(|r| f(r)).sum::<f64>();

            RegionalSummary {
                region: region.to_string(),
                count: group.len(),
                avg_acceptance_rate: sum(|r| r.acceptance_rate) / count,
                avg_tuition: sum(|r| r.tuition) / count,
                avg_sat: sum(|r| r.sat_average) / count,
                total_enrollment: sum(|r| r.enrollment),
            }
        })
        .collect();

    debug!("Aggregated {} records into {} regions", records.len(), summaries.len());
    summaries
}

/// Mean percentage of each demographic category per region
pub fn demographics_by_region(records: &[Record]) -> Vec<RegionalDemographics> {
    group_by_region(records)
        .into_iter()
        .map(|(region, group)| {
            let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
            for record in &group {
                for (category, percent) in &record.demographics {
                    let entry = totals.entry(category.clone()).or_insert((0.0, 0));
                    entry.0 += percent;
                    entry.1 += 1;
                }
            }

            RegionalDemographics {
                region: region.to_string(),
                averages: totals
                    .into_iter()
                    .map(|(category, (sum, n))| (category, sum / n as f64))
                    .collect(),
            }
        })
        .collect()
}
