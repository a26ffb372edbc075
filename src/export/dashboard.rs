//! Dashboard payload assembled from the cleaned records
//!
//! The layout matches what the dashboard charts consume: a top-N acceptance
//! rate chart, a tuition/SAT scatter, the SAT distribution, regional
//! demographics, headline averages and per-region aggregates.

use crate::analysis::statistics::mean;
use crate::analysis::{RegionalSummary, aggregate_by_region, demographics_by_region, histogram};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::{NumericField, Record};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Entry in the acceptance rate chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptanceRateEntry {
    pub name: String,
    pub acceptance_rate: f64,
}

/// Point in the tuition versus SAT scatter plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuitionPoint {
    pub name: String,
    pub tuition: f64,
    pub sat_average: f64,
    pub acceptance_rate: f64,
}

/// One bar of the SAT distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionBar {
    pub range: String,
    pub count: usize,
    pub midpoint: i64,
}

/// Average demographic composition of one region, rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicsEntry {
    pub region: String,
    #[serde(flatten)]
    pub percentages: BTreeMap<String, f64>,
}

/// Headline averages; `None` when there are no cleaned records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub avg_acceptance_rate: Option<f64>,
    pub avg_tuition: Option<i64>,
    pub avg_sat: Option<i64>,
}

/// Per-region aggregates keyed by region name in the output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalEntry {
    pub count: usize,
    pub avg_acceptance_rate: f64,
    pub avg_tuition: f64,
    pub avg_sat: f64,
    pub total_enrollment: f64,
}

impl From<&RegionalSummary> for RegionalEntry {
    fn from(summary: &RegionalSummary) -> Self {
        Self {
            count: summary.count,
            avg_acceptance_rate: summary.avg_acceptance_rate,
            avg_tuition: summary.avg_tuition,
            avg_sat: summary.avg_sat,
            total_enrollment: summary.total_enrollment,
        }
    }
}

/// Complete dashboard payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub acceptance_rates: Vec<AcceptanceRateEntry>,
    pub tuition_analysis: Vec<TuitionPoint>,
    pub sat_distribution: Vec<DistributionBar>,
    pub demographics: Vec<DemographicsEntry>,
    pub summary_stats: SummaryStats,
    #[serde(serialize_with = "serialize_regions")]
    pub regional_analysis: Vec<(String, RegionalEntry)>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardData {
    /// Assemble the dashboard from cleaned records
    pub fn build(cleaned: &[Record], config: &AnalysisConfig) -> Result<Self> {
        let sat_distribution = histogram(cleaned, NumericField::SatAverage, config.bin_count)?
            .iter()
            .map(|bin| DistributionBar {
                range: bin.label(),
                count: bin.count,
                midpoint: bin.midpoint,
            })
            .collect();

        let demographics = demographics_by_region(cleaned)
            .into_iter()
            .map(|region| DemographicsEntry {
                region: region.region,
                percentages: region
                    .averages
                    .into_iter()
                    .map(|(category, average)| (category, round_to_tenth(average)))
                    .collect(),
            })
            .collect();

        let regional_analysis = aggregate_by_region(cleaned)
            .iter()
            .map(|summary| (summary.region.clone(), RegionalEntry::from(summary)))
            .collect();

        Ok(Self {
            acceptance_rates: top_acceptance_rates(cleaned, config.top_acceptance_count),
            tuition_analysis: cleaned
                .iter()
                .map(|record| TuitionPoint {
                    name: record.name.clone(),
                    tuition: record.tuition,
                    sat_average: record.sat_average,
                    acceptance_rate: record.acceptance_rate,
                })
                .collect(),
            sat_distribution,
            demographics,
            summary_stats: SummaryStats::from_records(cleaned),
            regional_analysis,
            generated_at: Utc::now(),
        })
    }
}

impl SummaryStats {
    pub fn from_records(records: &[Record]) -> Self {
        let field_mean = |field: NumericField| mean(&field.values(records));

        Self {
            avg_acceptance_rate: field_mean(NumericField::AcceptanceRate).map(round_to_tenth),
            avg_tuition: field_mean(NumericField::Tuition).map(|m| m.trunc() as i64),
            avg_sat: field_mean(NumericField::SatAverage).map(|m| m.trunc() as i64),
        }
    }
}

/// The `count` records with the highest acceptance rate, highest first
///
/// Ties keep their input order.
pub fn top_acceptance_rates(records: &[Record], count: usize) -> Vec<AcceptanceRateEntry> {
    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| b.acceptance_rate.total_cmp(&a.acceptance_rate));

    ranked
        .into_iter()
        .take(count)
        .map(|record| AcceptanceRateEntry {
            name: record.name.clone(),
            acceptance_rate: record.acceptance_rate,
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Region order is significant, so emit a map from the ordered pairs
fn serialize_regions<S>(
    regions: &[(String, RegionalEntry)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(regions.iter().map(|(region, entry)| (region, entry)))
}
