//! Validate command implementation
//!
//! Loads the record collection, runs every record and dataset check and
//! prints the report. The command fails when any error-level issue exists.

use super::shared::{CommandStatus, load_configuration, load_source, setup_logging};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::output::render_validation_report;
use crate::error::Result;
use crate::pipeline::CollegeAnalyzer;
use std::time::Instant;
use tracing::{debug, info};

pub async fn run_validate(args: ValidateArgs) -> Result<CommandStatus> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    debug!("Validation arguments: {:?}", args);

    args.common.validate()?;
    let config = load_configuration(&args.common)?;

    let source = load_source(&args.input, args.common.show_progress()).await;
    let report = CollegeAnalyzer::new(config).validate(&source);

    match args.output_format {
        OutputFormat::Human => print!("{}", render_validation_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!(
        "Validation finished in {:.2}s: {}",
        start_time.elapsed().as_secs_f64(),
        if report.is_valid() { "passed" } else { "failed" }
    );

    Ok(if report.is_valid() {
        CommandStatus::Success
    } else {
        CommandStatus::Invalid
    })
}
