//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and the progress spinner
//! used by every command.

use crate::cli::args::CommonArgs;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::load_records;
use crate::models::RecordSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// How a command finished, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Command completed and the data passed
    Success,
    /// Command completed but the data failed validation
    Invalid,
}

impl CommandStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::Invalid => 1,
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("college_insights={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut AnalysisConfig, args: &CommonArgs) {
    if let Some(bins) = args.bins {
        debug!("Overriding bin count from CLI: {}", bins);
        config.bin_count = bins;
    }
}

/// Spinner for a long-running stage, or `None` when progress is hidden
pub fn create_spinner(show_progress: bool, message: &str) -> Option<ProgressBar> {
    if !show_progress {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Load the record collection behind a spinner
pub async fn load_source(input: &Path, show_progress: bool) -> RecordSource {
    info!("Loading records from {}", input.display());
    let spinner = create_spinner(show_progress, "Loading college records...");

    let source = load_records(input).await;

    if let Some(pb) = spinner {
        match &source {
            RecordSource::Loaded(records) => {
                pb.finish_with_message(format!("Loaded {} college records", records.len()))
            }
            _ => pb.finish_and_clear(),
        }
    }

    source
}
