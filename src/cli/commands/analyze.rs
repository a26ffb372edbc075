//! Analyze command implementation
//!
//! Runs the full pipeline and prints statistics, correlations, regional
//! aggregates and the histogram for the cleaned records.

use super::shared::{CommandStatus, create_spinner, load_configuration, load_source, setup_logging};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::cli::output::{render_analysis, render_validation_report};
use crate::error::Result;
use crate::pipeline::CollegeAnalyzer;
use tracing::{debug, warn};

pub async fn run_analyze(args: AnalyzeArgs) -> Result<CommandStatus> {
    setup_logging(&args.common)?;
    debug!("Analyze arguments: {:?}", args);

    args.common.validate()?;
    let config = load_configuration(&args.common)?;

    let source = load_source(&args.input, args.common.show_progress()).await;

    let spinner = create_spinner(args.common.show_progress(), "Analyzing records...");
    let outcome = CollegeAnalyzer::new(config).analyze(&source)?;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if outcome.report.is_structural_failure() {
        warn!("Nothing to analyze: the data source could not be used");
        match args.output_format {
            OutputFormat::Human => print!("{}", render_validation_report(&outcome.report)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome.report)?),
        }
        return Ok(CommandStatus::Invalid);
    }

    match args.output_format {
        OutputFormat::Human => print!("{}", render_analysis(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(CommandStatus::Success)
}
