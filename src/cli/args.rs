//! Command-line argument definitions for the college insights tool
//!
//! Defines the complete CLI interface using the clap derive API. Every
//! subcommand takes the path of the JSON record collection plus a shared set
//! of configuration and logging options.

use crate::error::{CollegeError, Result};
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the college admissions analyzer
///
/// Validates college admissions records and derives descriptive statistics,
/// regional aggregates and histograms for dashboard reporting.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "college-insights",
    version,
    about = "Validate college admissions data and compute dashboard statistics",
    long_about = "Validates a JSON collection of college admissions records, reports every \
                  error and warning, and computes descriptive statistics, correlations, \
                  regional aggregates and an SAT histogram over the records that pass \
                  validation. Results can be exported for the dashboard as JSON, CSV or Parquet."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate the record collection and print the report
    Validate(ValidateArgs),
    /// Validate, clean and print statistics, correlations and regional aggregates
    Analyze(AnalyzeArgs),
    /// Write the processed records and the dashboard payload
    Export(ExportArgs),
}

/// Options accepted by every subcommand
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// JSON configuration file with validation thresholds and analysis
    /// settings. If not specified, looks for ~/.config/college-insights/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of histogram bins, overriding the configuration file
    #[arg(long = "bins", value_name = "COUNT", help = "Number of histogram bins")]
    pub bins: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress and log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// JSON file holding the list of college records
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// JSON file holding the list of college records
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the analysis results"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// JSON file holding the list of college records
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory receiving the processed data and dashboard files
    ///
    /// Will be created if it doesn't exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory for exported files"
    )]
    pub output_dir: PathBuf,

    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "json",
        help = "File format for the processed records"
    )]
    pub format: ExportFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// How results are printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl CommonArgs {
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(CollegeError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.bins == Some(0) {
            return Err(CollegeError::configuration(
                "Number of bins must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
