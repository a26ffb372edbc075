//! Tests for dashboard assembly and processed data export


use crate::models::Record;

pub use crate::analysis::tests::{create_record, create_sample_records};

/// Sample records where one college reports an extra demographic category
pub fn create_records_with_extra_category() -> Vec<Record> {
    let mut records = create_sample_records();
    records[1].demographics.insert("pacific".to_string(), 1.0);
    records
}
