//! Export command implementation
//!
//! Cleans the record collection and writes the processed records and the
//! dashboard payload into the output directory.

use super::shared::{CommandStatus, create_spinner, load_configuration, load_source, setup_logging};
use crate::cli::args::ExportArgs;
use crate::cli::output::{render_export_summary, render_validation_report};
use crate::error::Result;
use crate::export::Exporter;
use crate::pipeline::CollegeAnalyzer;
use tracing::{debug, info, warn};

pub async fn run_export(args: ExportArgs) -> Result<CommandStatus> {
    setup_logging(&args.common)?;
    debug!("Export arguments: {:?}", args);

    args.common.validate()?;
    let config = load_configuration(&args.common)?;

    let source = load_source(&args.input, args.common.show_progress()).await;
    let outcome = CollegeAnalyzer::new(config.clone()).analyze(&source)?;

    if outcome.report.is_structural_failure() {
        warn!("Export skipped: the data source could not be used");
        eprint!("{}", render_validation_report(&outcome.report));
        return Ok(CommandStatus::Invalid);
    }

    let exporter = Exporter::new(args.output_dir.clone(), args.format);
    info!(
        "Exporting {} cleaned records to {}",
        outcome.cleaned.len(),
        exporter.output_dir().display()
    );

    let spinner = create_spinner(args.common.show_progress(), "Writing export files...");
    let summary = exporter.export(&outcome.cleaned, &config).await?;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    print!("{}", render_export_summary(&summary));
    Ok(CommandStatus::Success)
}
