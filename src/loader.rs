//! Loading the college record collection from JSON
//!
//! The loader never fails with an error. A file that cannot be read becomes
//! [`RecordSource::Unavailable`]; a document that is not valid JSON or whose
//! top-level value is not a list becomes [`RecordSource::Malformed`]; an
//! empty list is a successfully loaded, empty collection.

use crate::models::{RawRecord, RecordSource};
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Read and parse a record collection from a JSON file
pub async fn load_records(path: &Path) -> RecordSource {
    debug!("Loading records from {}", path.display());

    match fs::read_to_string(path).await {
        Ok(contents) => {
            let source = parse_records(&contents);
            if let RecordSource::Loaded(records) = &source {
                info!("Loaded data for {} colleges", records.len());
            }
            source
        }
        Err(e) => {
            warn!("Data file {} could not be read: {}", path.display(), e);
            RecordSource::Unavailable {
                location: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// Parse a record collection from JSON text
pub fn parse_records(contents: &str) -> RecordSource {
    let document: Value = match serde_json::from_str(contents) {
        Ok(value) => value,
        Err(e) => {
            return RecordSource::Malformed {
                reason: format!("Invalid JSON format: {}", e),
            };
        }
    };

    match document {
        Value::Array(items) => {
            RecordSource::Loaded(items.into_iter().map(RawRecord::new).collect())
        }
        _ => RecordSource::Malformed {
            reason: "Data should be a list of college entries".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_list() {
        let source = parse_records(r#"[{"name": "A"}, {"name": "B"}, 3]"#);
        assert!(source.is_loaded());
        assert_eq!(source.records().len(), 3);
        assert_eq!(source.records()[1].name(), Some("B"));
    }

    #[test]
    fn test_parse_empty_list_is_not_a_failure() {
        let source = parse_records("[]");
        assert_eq!(source, RecordSource::Loaded(Vec::new()));
    }

    #[test]
    fn test_parse_non_list_is_malformed() {
        for document in [r#"{"name": "A"}"#, "42", "\"colleges\"", "null"] {
            let source = parse_records(document);
            assert_eq!(
                source,
                RecordSource::Malformed {
                    reason: "Data should be a list of college entries".to_string()
                },
                "document {}",
                document
            );
        }
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        let source = parse_records("[{\"name\": ");
        match source {
            RecordSource::Malformed { reason } => {
                assert!(reason.starts_with("Invalid JSON format"))
            }
            other => panic!("expected malformed source, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_unavailable() {
        let source = load_records(Path::new("/nonexistent/college_admissions_data.json")).await;
        assert!(matches!(source, RecordSource::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Rice University"}}]"#).unwrap();

        let source = load_records(file.path()).await;
        assert_eq!(source.records().len(), 1);
        assert_eq!(source.records()[0].name(), Some("Rice University"));
    }
}
