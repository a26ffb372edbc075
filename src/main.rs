use clap::Parser;
use college_insights::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(command) => Some(result),
            Ok(()) = tokio::signal::ctrl_c() => None,
        }
    });

    match result {
        Some(Ok(status)) => process::exit(status.exit_code()),
        Some(Err(error)) => {
            let error = anyhow::Error::from(error).context("college-insights failed");
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
        None => {
            eprintln!("\nReceived CTRL+C, shutting down...");
            process::exit(130);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("College Insights - Admissions Data Validation and Analysis");
    println!("==========================================================");
    println!();
    println!("Validate a JSON collection of college admissions records and compute");
    println!("statistics, correlations, regional aggregates and an SAT histogram.");
    println!();
    println!("USAGE:");
    println!("    college-insights <COMMAND> <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate the records and print the report (exit 1 if invalid)");
    println!("    analyze     Print statistics, correlations and regional aggregates");
    println!("    export      Write processed records and dashboard_data.json");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    college-insights validate data/college_admissions_data.json");
    println!("    college-insights analyze data/college_admissions_data.json --bins 10");
    println!("    college-insights export data/college_admissions_data.json -o out --format csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    college-insights <COMMAND> --help");
}
