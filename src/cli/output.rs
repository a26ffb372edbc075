//! Human-readable rendering of validation and analysis results
//!
//! Renderers return strings so commands decide where they go; colour is
//! applied with `colored` and disappears when output is not a terminal.

use crate::analysis::Bin;
use crate::export::ExportSummary;
use crate::pipeline::AnalysisOutcome;
use crate::validation::ValidationReport;
use crate::validation::record_validator::format_thousands;
use colored::*;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;
const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Render the validation report with summary counts, errors and warnings
pub fn render_validation_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let summary = report.summary();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", "COLLEGE ADMISSIONS DATA VALIDATION REPORT".bold());
    let _ = writeln!(out, "{}", rule);

    let _ = writeln!(out, "\n{}", "Dataset Summary:".bright_white().bold());
    let _ = writeln!(out, "  Total Colleges: {}", summary.total_records);
    let _ = writeln!(out, "  Total Errors: {}", summary.total_errors);
    let _ = writeln!(out, "  Total Warnings: {}", summary.total_warnings);
    let _ = writeln!(out, "  Colleges with Errors: {}", summary.records_with_errors);
    let _ = writeln!(out, "  Colleges with Warnings: {}", summary.records_with_warnings);

    if report.is_valid() {
        let _ = writeln!(out, "\n{}", "VALIDATION PASSED - Dataset is valid!".bright_green().bold());
    } else {
        let _ = writeln!(
            out,
            "\n{}",
            format!("VALIDATION FAILED - {} errors found", summary.total_errors)
                .bright_red()
                .bold()
        );
    }

    if summary.total_errors > 0 {
        let _ = writeln!(out, "\n{}", "ERRORS:".red().bold());
        for issue in report.errors() {
            let _ = writeln!(out, "  {} {}", "✗".red(), issue);
        }
    }

    if summary.total_warnings > 0 {
        let _ = writeln!(out, "\n{}", "WARNINGS:".yellow().bold());
        for issue in report.warnings() {
            let _ = writeln!(out, "  {} {}", "!".yellow(), issue);
        }
    }

    let _ = writeln!(out, "\n{}", rule);
    out
}

/// Render statistics, regional aggregates, correlations and the histogram
pub fn render_analysis(outcome: &AnalysisOutcome) -> String {
    let mut out = String::new();
    let summary = outcome.report.summary();

    let _ = writeln!(
        out,
        "{} {} of {} records passed validation ({} errors, {} warnings)",
        "Cleaned:".bright_green().bold(),
        outcome.cleaned.len(),
        summary.total_records,
        summary.total_errors,
        summary.total_warnings
    );

    let _ = writeln!(out, "\n{}", "Dataset Statistics:".bright_white().bold());
    for (field, stats) in &outcome.statistics {
        let _ = writeln!(out, "\n{}:", title_case(field.name()).bright_cyan());
        let _ = writeln!(out, "  count: {}", stats.count);
        let _ = writeln!(out, "  mean: {:.2}", stats.mean);
        let _ = writeln!(out, "  median: {:.2}", stats.median);
        let _ = writeln!(out, "  std: {:.2}", stats.std_dev);
        let _ = writeln!(out, "  min: {:.2}", stats.min);
        let _ = writeln!(out, "  max: {:.2}", stats.max);
    }

    let _ = writeln!(out, "\n{}", "Regional Analysis:".bright_white().bold());
    if outcome.regions.is_empty() {
        let _ = writeln!(out, "  {}", "No records to aggregate".bright_black());
    }
    for region in &outcome.regions {
        let _ = writeln!(out, "\n{}:", region.region.bright_cyan());
        let _ = writeln!(out, "  Colleges: {}", region.count);
        let _ = writeln!(out, "  Avg Acceptance Rate: {:.1}%", region.avg_acceptance_rate);
        let _ = writeln!(out, "  Avg Tuition: ${}", format_thousands(region.avg_tuition));
        let _ = writeln!(out, "  Avg SAT: {:.0}", region.avg_sat);
        let _ = writeln!(out, "  Total Enrollment: {}", format_thousands(region.total_enrollment));
    }

    let _ = writeln!(out, "\n{}", "Key Correlations:".bright_white().bold());
    for (key, value) in &outcome.correlations {
        let _ = writeln!(out, "  {}: {:.3}", title_case(key), value);
    }

    let _ = writeln!(
        out,
        "\n{}",
        format!("{} Distribution:", title_case(outcome.histogram_field.name()))
            .bright_white()
            .bold()
    );
    out.push_str(&render_histogram(&outcome.histogram));

    out
}

/// Render histogram bins as labelled horizontal bars
pub fn render_histogram(bins: &[Bin]) -> String {
    let mut out = String::new();
    let largest = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    let label_width = bins.iter().map(|bin| bin.label().len()).max().unwrap_or(0);

    for bin in bins {
        let bar_len = if largest == 0 {
            0
        } else {
            (bin.count * HISTOGRAM_BAR_WIDTH).div_ceil(largest)
        };
        let _ = writeln!(
            out,
            "  {:>width$} {:>5} {}",
            bin.label(),
            bin.count,
            "#".repeat(bar_len).green(),
            width = label_width
        );
    }

    out
}

/// Render the paths written by an export
pub fn render_export_summary(summary: &ExportSummary) -> String {
    format!(
        "{} {} records to {}\n{} {}\n",
        "Exported".bright_green().bold(),
        summary.rows_written,
        summary.processed_path.display(),
        "Dashboard data:".bright_green().bold(),
        summary.dashboard_path.display()
    )
}

/// `"tuition_vs_sat_average"` -> `"Tuition Vs Sat Average"`
fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
