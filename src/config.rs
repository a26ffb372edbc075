//! Configuration management and validation.
//!
//! Provides the analysis configuration: validation thresholds, histogram
//! settings and the field selections used for statistics and correlations.
//! Configuration is layered: defaults, then an optional JSON file, then
//! command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BIN_COUNT, DEFAULT_DEMOGRAPHICS_TOLERANCE,
    DEFAULT_TOP_ACCEPTANCE_COUNT, DEFAULT_TUITION_WARNING_THRESHOLD,
};
use crate::error::{CollegeError, Result};
use crate::models::NumericField;
use crate::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for college data analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of histogram bins
    pub bin_count: usize,

    /// Field whose distribution is binned
    pub histogram_field: NumericField,

    /// Fields summarised by the statistics engine
    pub statistics_fields: Vec<NumericField>,

    /// Field pairs for Pearson correlation
    pub correlation_pairs: Vec<(NumericField, NumericField)>,

    /// Number of colleges in the acceptance rate chart
    pub top_acceptance_count: usize,

    /// Tuition above this raises a warning
    pub tuition_warning_threshold: f64,

    /// Allowed deviation of the demographics total from 100
    pub demographics_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            histogram_field: NumericField::SatAverage,
            statistics_fields: NumericField::ALL.to_vec(),
            correlation_pairs: vec![
                (NumericField::Tuition, NumericField::SatAverage),
                (NumericField::AcceptanceRate, NumericField::SatAverage),
                (NumericField::Tuition, NumericField::AcceptanceRate),
                (NumericField::Enrollment, NumericField::AcceptanceRate),
            ],
            top_acceptance_count: DEFAULT_TOP_ACCEPTANCE_COUNT,
            tuition_warning_threshold: DEFAULT_TUITION_WARNING_THRESHOLD,
            demographics_tolerance: DEFAULT_DEMOGRAPHICS_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Create configuration with a custom bin count
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Create configuration binning a different field
    pub fn with_histogram_field(mut self, field: NumericField) -> Self {
        self.histogram_field = field;
        self
    }

    /// Restrict statistics to the given fields
    pub fn with_statistics_fields(mut self, fields: Vec<NumericField>) -> Self {
        self.statistics_fields = fields;
        self
    }

    /// Replace the correlation pairs
    pub fn with_correlation_pairs(mut self, pairs: Vec<(NumericField, NumericField)>) -> Self {
        self.correlation_pairs = pairs;
        self
    }

    /// Set the tuition warning threshold
    pub fn with_tuition_warning_threshold(mut self, threshold: f64) -> Self {
        self.tuition_warning_threshold = threshold;
        self
    }

    /// Set the demographics sum tolerance
    pub fn with_demographics_tolerance(mut self, tolerance: f64) -> Self {
        self.demographics_tolerance = tolerance;
        self
    }

    /// Validation thresholds derived from this configuration
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            tuition_warning_threshold: self.tuition_warning_threshold,
            demographics_tolerance: self.demographics_tolerance,
        }
    }

    /// Check the configuration for values the analysis cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.bin_count == 0 {
            return Err(CollegeError::configuration(
                "Bin count must be greater than 0",
            ));
        }

        if self.statistics_fields.is_empty() {
            return Err(CollegeError::configuration(
                "At least one statistics field must be selected",
            ));
        }

        if !self.tuition_warning_threshold.is_finite() || self.tuition_warning_threshold <= 0.0 {
            return Err(CollegeError::configuration(format!(
                "Tuition warning threshold must be positive, got {}",
                self.tuition_warning_threshold
            )));
        }

        if !self.demographics_tolerance.is_finite() || self.demographics_tolerance < 0.0 {
            return Err(CollegeError::configuration(format!(
                "Demographics tolerance must be non-negative, got {}",
                self.demographics_tolerance
            )));
        }

        Ok(())
    }

    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CollegeError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: AnalysisConfig = serde_json::from_str(&contents).map_err(|e| {
            CollegeError::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Default location of the user configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| CollegeError::configuration("Could not determine config directory"))
    }

    /// Load layered configuration: explicit file, else the default file if present, else defaults
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            return Self::load(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bin_count, 8);
        assert_eq!(config.histogram_field, NumericField::SatAverage);
        assert_eq!(config.statistics_fields.len(), 4);
        assert_eq!(config.correlation_pairs.len(), 4);
    }

    #[test]
    fn test_builder_methods() {
        let config = AnalysisConfig::default()
            .with_bin_count(12)
            .with_histogram_field(NumericField::Tuition)
            .with_tuition_warning_threshold(90_000.0)
            .with_demographics_tolerance(2.0);

        assert_eq!(config.bin_count, 12);
        assert_eq!(config.histogram_field, NumericField::Tuition);

        let rules = config.validation_rules();
        assert_eq!(rules.tuition_warning_threshold, 90_000.0);
        assert_eq!(rules.demographics_tolerance, 2.0);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(AnalysisConfig::default().with_bin_count(0).validate().is_err());
        assert!(
            AnalysisConfig::default()
                .with_statistics_fields(Vec::new())
                .validate()
                .is_err()
        );
        assert!(
            AnalysisConfig::default()
                .with_demographics_tolerance(-1.0)
                .validate()
                .is_err()
        );
        assert!(
            AnalysisConfig::default()
                .with_tuition_warning_threshold(0.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_load_partial_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"bin_count": 10, "histogram_field": "acceptance_rate"}}"#).unwrap();

        let config = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(config.bin_count, 10);
        assert_eq!(config.histogram_field, NumericField::AcceptanceRate);
        assert_eq!(config.top_acceptance_count, 15);
    }

    #[test]
    fn test_load_invalid_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"bin_count": 0}}"#).unwrap();
        assert!(AnalysisConfig::load(file.path()).is_err());

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(AnalysisConfig::load(garbage.path()).is_err());
    }

    #[test]
    fn test_load_layered_explicit_missing_file() {
        let result = AnalysisConfig::load_layered(Some(Path::new("/nonexistent/config.json")));
        assert!(result.is_err());
    }
}
