//! JSON intake for audit snapshots, violation lists, and audit series.
//!
//! All parse failures are labelled with the offending path so a batch caller
//! can tell which file broke.

use std::path::Path;

use serde::Deserialize;

use crate::error::{A11yError, Result};
use crate::types::{AuditSnapshot, Violation};

/// A snapshot bundled with its violations, as one series entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    #[serde(flatten)]
    pub audit: AuditSnapshot,
    #[serde(default)]
    pub violations: Vec<Violation>,
}

pub fn load_audit(path: &Path) -> Result<AuditSnapshot> {
    parse_file(path)
}

pub fn load_violations(path: &Path) -> Result<Vec<Violation>> {
    parse_file(path)
}

/// Load a series file: a JSON array of audit records, oldest first.
pub fn load_series(path: &Path) -> Result<Vec<AuditRecord>> {
    let records: Vec<AuditRecord> = parse_file(path)?;
    if records.is_empty() {
        return Err(A11yError::input(format!(
            "{}: series contains no audits",
            path.display()
        )));
    }
    Ok(records)
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| A11yError::input(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| A11yError::input(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_violations_accepts_minimal_records() {
        let file = write_temp(
            r##"[{
                "ruleId": "image-alt",
                "impact": "critical",
                "description": "Images must have alternate text",
                "wcagTags": ["wcag2a"],
                "uniqueElements": [{"selector": "#hero img"}]
            }]"##,
        );

        let violations = load_violations(file.path()).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, "image-alt");
    }

    #[test]
    fn unknown_impact_is_a_labelled_input_error() {
        let file = write_temp(
            r##"[{
                "ruleId": "image-alt",
                "impact": "blocker",
                "description": "x",
                "wcagTags": [],
                "uniqueElements": []
            }]"##,
        );

        let err = load_violations(file.path()).unwrap_err();
        match err {
            A11yError::Input(msg) => assert!(msg.contains(
                file.path().file_name().unwrap().to_str().unwrap()
            )),
            other => panic!("expected input error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = load_audit(Path::new("/nonexistent/audit.json")).unwrap_err();
        assert!(matches!(err, A11yError::Input(_)));
    }

    #[test]
    fn empty_series_is_rejected() {
        let file = write_temp("[]");
        let err = load_series(file.path()).unwrap_err();
        assert!(matches!(err, A11yError::Input(_)));
    }

    #[test]
    fn series_records_default_missing_violations() {
        let file = write_temp(
            r##"[{
                "id": "a1",
                "createdAt": "2024-05-01T08:00:00Z",
                "totalPages": 10,
                "processedPages": 10
            }]"##,
        );

        let records = load_series(file.path()).unwrap();
        assert_eq!(records[0].audit.id, "a1");
        assert!(records[0].violations.is_empty());
    }
}
