//! Flattened export of the cleaned records
//!
//! Each record becomes one row: the scalar fields, the location split into
//! `state` and `region`, and one `<category>_percent` column per demographic
//! category seen anywhere in the cleaned set. Demographic columns follow the
//! fixed columns in category name order.

use crate::constants::DEMOGRAPHIC_COLUMN_SUFFIX;
use crate::error::Result;
use crate::models::Record;
use polars::prelude::{Column, CsvWriter, DataFrame, ParquetWriter, SerWriter};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// One flattened output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRow {
    pub name: String,
    pub acceptance_rate: f64,
    pub tuition: f64,
    pub sat_average: f64,
    pub enrollment: f64,
    pub state: String,
    pub region: String,
    /// Column name (`<category>_percent`) -> percentage
    #[serde(flatten)]
    pub demographics: BTreeMap<String, f64>,
}

impl ProcessedRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            acceptance_rate: record.acceptance_rate,
            tuition: record.tuition,
            sat_average: record.sat_average,
            enrollment: record.enrollment,
            state: record.location.state.clone(),
            region: record.location.region.clone(),
            demographics: record
                .demographics
                .iter()
                .map(|(category, percent)| (demographic_column(category), *percent))
                .collect(),
        }
    }
}

/// Output column name for a demographic category
pub fn demographic_column(category: &str) -> String {
    format!("{}{}", category, DEMOGRAPHIC_COLUMN_SUFFIX)
}

pub fn flatten_records(records: &[Record]) -> Vec<ProcessedRow> {
    records.iter().map(ProcessedRow::from_record).collect()
}

/// Build a DataFrame from flattened rows
///
/// A row without a given demographic category gets a null in that column.
pub fn to_dataframe(rows: &[ProcessedRow]) -> Result<DataFrame> {
    let demographic_columns: BTreeSet<&String> =
        rows.iter().flat_map(|row| row.demographics.keys()).collect();

    let text = |f: fn(&ProcessedRow) -> &String| -> Vec<String> {
        rows.iter().map(|row| f(row).clone()).collect()
    };
    let number = |f: fn(&ProcessedRow) -> f64| -> Vec<f64> { rows.iter().map(f).collect() };

    let mut columns = vec![
        Column::new("name".into(), text(|row| &row.name)),
        Column::new("acceptance_rate".into(), number(|row| row.acceptance_rate)),
        Column::new("tuition".into(), number(|row| row.tuition)),
        Column::new("sat_average".into(), number(|row| row.sat_average)),
        Column::new("enrollment".into(), number(|row| row.enrollment)),
        Column::new("state".into(), text(|row| &row.state)),
        Column::new("region".into(), text(|row| &row.region)),
    ];

    for column in demographic_columns {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|row| row.demographics.get(column).copied())
            .collect();
        columns.push(Column::new(column.as_str().into(), values));
    }

    let df = DataFrame::new(columns)?;
    debug!("Built frame with {} rows and {} columns", df.height(), df.width());
    Ok(df)
}

/// Write rows as a pretty-printed JSON array
pub fn write_json(rows: &[ProcessedRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, rows)?;
    Ok(())
}

/// Write rows as CSV with a header line
pub fn write_csv(rows: &[ProcessedRow], path: &Path) -> Result<()> {
    let mut df = to_dataframe(rows)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}

/// Write rows as a Parquet file
pub fn write_parquet(rows: &[ProcessedRow], path: &Path) -> Result<()> {
    let mut df = to_dataframe(rows)?;
    let file = File::create(path)?;
    ParquetWriter::new(file).finish(&mut df)?;
    Ok(())
}
