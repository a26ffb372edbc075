//! End-to-end analysis pipeline
//!
//! Runs validation, cleaning and every aggregation over one loaded source.
//! The statistics, regional and histogram stages only ever see the cleaned
//! records.
//!
//! # Example Usage
//!
//! ```
//! use college_insights::config::AnalysisConfig;
//! use college_insights::loader::parse_records;
//! use college_insights::pipeline::CollegeAnalyzer;
//!
//! let source = parse_records("[]");
//! let outcome = CollegeAnalyzer::new(AnalysisConfig::default())
//!     .analyze(&source)
//!     .unwrap();
//! assert!(outcome.report.is_valid());
//! assert!(outcome.cleaned.is_empty());
//! ```

use crate::analysis::{
    Bin, Measure, RegionalDemographics, RegionalSummary, StatSummary, aggregate_by_region,
    compute_correlations, compute_statistics, demographics_by_region, histogram,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::{NumericField, Record, RecordSource};
use crate::validation::{DatasetValidator, ValidationReport, clean_records};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Everything derived from one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    pub report: ValidationReport,
    pub cleaned: Vec<Record>,
    pub statistics: BTreeMap<NumericField, StatSummary>,
    pub correlations: BTreeMap<String, Measure>,
    pub regions: Vec<RegionalSummary>,
    pub regional_demographics: Vec<RegionalDemographics>,
    pub histogram_field: NumericField,
    pub histogram: Vec<Bin>,
}

/// Orchestrates validation and analysis with a fixed configuration
#[derive(Debug, Clone)]
pub struct CollegeAnalyzer {
    config: AnalysisConfig,
    validator: DatasetValidator,
}

impl CollegeAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        let validator = DatasetValidator::new(config.validation_rules());
        Self { config, validator }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validate only, without cleaning or aggregation
    pub fn validate(&self, source: &RecordSource) -> ValidationReport {
        self.validator.validate_source(source)
    }

    /// Validate, clean and aggregate the source
    pub fn analyze(&self, source: &RecordSource) -> Result<AnalysisOutcome> {
        self.config.validate()?;

        let report = self.validate(source);
        info!(
            "Validation complete: {} records, {} errors, {} warnings",
            report.summary().total_records,
            report.summary().total_errors,
            report.summary().total_warnings
        );

        let cleaned = clean_records(source.records(), &report)?;
        self.analyze_cleaned(report, cleaned)
    }

    /// Run the aggregation stages over an already-cleaned record set
    fn analyze_cleaned(
        &self,
        report: ValidationReport,
        cleaned: Vec<Record>,
    ) -> Result<AnalysisOutcome> {
        let statistics = compute_statistics(&cleaned, &self.config.statistics_fields);
        let correlations = compute_correlations(&cleaned, &self.config.correlation_pairs);
        debug!(
            "Computed statistics for {} fields and {} correlations",
            statistics.len(),
            correlations.len()
        );

        let regions = aggregate_by_region(&cleaned);
        let regional_demographics = demographics_by_region(&cleaned);
        let histogram = histogram(&cleaned, self.config.histogram_field, self.config.bin_count)?;

        info!(
            "Analysis complete: {} cleaned records across {} regions",
            cleaned.len(),
            regions.len()
        );

        Ok(AnalysisOutcome {
            report,
            cleaned,
            statistics,
            correlations,
            regions,
            regional_demographics,
            histogram_field: self.config.histogram_field,
            histogram,
        })
    }
}

impl Default for CollegeAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
