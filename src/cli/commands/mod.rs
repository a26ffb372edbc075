//! Command implementations for the college insights CLI
//!
//! Each command is implemented in its own module:
//! - `validate`: Validation report with exit status
//! - `analyze`: Statistics, correlations, regional aggregates and histogram
//! - `export`: Processed data and dashboard payload files

pub mod analyze;
pub mod export;
pub mod shared;
pub mod validate;

pub use shared::CommandStatus;

use crate::cli::args::Commands;
use crate::error::Result;

/// Dispatch to the handler for the selected subcommand
pub async fn run(command: Commands) -> Result<CommandStatus> {
    match command {
        Commands::Validate(args) => validate::run_validate(args).await,
        Commands::Analyze(args) => analyze::run_analyze(args).await,
        Commands::Export(args) => export::run_export(args).await,
    }
}
