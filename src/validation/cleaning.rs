//! Cleaning: keep only records that passed every error-level check
//!
//! Warning-level findings do not exclude a record.

use crate::error::Result;
use crate::models::{RawRecord, Record};
use tracing::info;

use super::report::ValidationReport;

/// Convert the records of `records` that carry no errors in `report`, preserving order
pub fn clean_records(records: &[RawRecord], report: &ValidationReport) -> Result<Vec<Record>> {
    if report.is_structural_failure() {
        return Ok(Vec::new());
    }

    let rejected = report.rejected_indexes();
    let cleaned = records
        .iter()
        .enumerate()
        .filter(|(index, _)| !rejected.contains(index))
        .map(|(index, raw)| Record::from_raw(raw, index))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Data cleaned. {} of {} records remain after validation",
        cleaned.len(),
        records.len()
    );

    Ok(cleaned)
}
