//! Export of analysis results for downstream consumers
//!
//! Two artifacts are written into an output directory:
//!
//! - [`dashboard`] - `dashboard_data.json`, the payload read by the dashboard charts
//! - [`processed`] - `processed_college_data.<ext>`, the cleaned records as flat rows
//!
//! # Example Usage
//!
//! ```no_run
//! use college_insights::config::AnalysisConfig;
//! use college_insights::export::{ExportFormat, Exporter};
//! use std::path::PathBuf;
//!
//! # async fn run(cleaned: Vec<college_insights::models::Record>) -> college_insights::Result<()> {
//! let exporter = Exporter::new(PathBuf::from("output"), ExportFormat::Csv);
//! let summary = exporter.export(&cleaned, &AnalysisConfig::default()).await?;
//! println!("Wrote {}", summary.processed_path.display());
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod processed;

#[cfg(test)]
pub mod tests;

pub use dashboard::{DashboardData, SummaryStats, top_acceptance_rates};
pub use processed::{ProcessedRow, flatten_records, to_dataframe};

use crate::config::AnalysisConfig;
use crate::constants::{DASHBOARD_FILE_NAME, PROCESSED_FILE_STEM};
use crate::error::{CollegeError, Result};
use crate::models::Record;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File format for the processed records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Parquet,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Paths and counts from a completed export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub processed_path: PathBuf,
    pub dashboard_path: PathBuf,
    pub rows_written: usize,
}

/// Writes processed records and the dashboard payload into one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    format: ExportFormat,
}

impl Exporter {
    pub fn new(output_dir: PathBuf, format: ExportFormat) -> Self {
        Self { output_dir, format }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the processed data file for the configured format
    pub fn processed_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", PROCESSED_FILE_STEM, self.format.extension()))
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir.join(DASHBOARD_FILE_NAME)
    }

    /// Write both artifacts, creating the output directory if needed
    pub async fn export(&self, cleaned: &[Record], config: &AnalysisConfig) -> Result<ExportSummary> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            CollegeError::export(&self.output_dir, format!("Cannot create output directory: {}", e))
        })?;

        let rows_written = self.write_processed(cleaned)?;
        let dashboard = DashboardData::build(cleaned, config)?;
        self.write_dashboard(&dashboard).await?;

        Ok(ExportSummary {
            processed_path: self.processed_path(),
            dashboard_path: self.dashboard_path(),
            rows_written,
        })
    }

    /// Write the cleaned records in the configured format
    pub fn write_processed(&self, cleaned: &[Record]) -> Result<usize> {
        let path = self.processed_path();
        let rows = flatten_records(cleaned);
        debug!("Writing {} rows as {} to {}", rows.len(), self.format, path.display());

        let written = match self.format {
            ExportFormat::Json => processed::write_json(&rows, &path),
            ExportFormat::Csv => processed::write_csv(&rows, &path),
            ExportFormat::Parquet => processed::write_parquet(&rows, &path),
        };
        written.map_err(|e| CollegeError::export(&path, e.to_string()))?;

        info!("Processed data exported to {}", path.display());
        Ok(rows.len())
    }

    /// Write the dashboard payload as pretty-printed JSON
    pub async fn write_dashboard(&self, dashboard: &DashboardData) -> Result<()> {
        let path = self.dashboard_path();
        let contents = serde_json::to_string_pretty(dashboard)?;
        fs::write(&path, contents)
            .await
            .map_err(|e| CollegeError::export(&path, e.to_string()))?;

        info!(
            "Dashboard data exported to {} ({} colleges, {} SAT ranges, {} regions)",
            path.display(),
            dashboard.tuition_analysis.len(),
            dashboard.sat_distribution.len(),
            dashboard.demographics.len()
        );
        Ok(())
    }
}
