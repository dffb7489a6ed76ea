use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ApiError, Result};

/// Outcome of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UploadSummary {
    #[serde(default)]
    pub message: String,
    pub total_records: u64,
    pub success_records: u64,
    pub failed_records: u64,
    pub pending_records: u64,
}

impl UploadSummary {
    /// True when some records were rejected or still await settlement.
    pub fn has_issues(&self) -> bool {
        self.failed_records > 0 || self.pending_records > 0
    }
}

/// Checks a statement file before it is sent to the server.
///
/// Only the extension, emptiness and size are inspected; the CSV content is
/// validated server-side.
pub fn validate_statement_file(name: &str, size: u64, max_size: u64) -> Result<()> {
    debug!(name, size, "Validating statement file");

    let is_csv = name
        .rsplit_once('.')
        .map(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(ApiError::validation("Invalid file type. Please upload a CSV file."));
    }
    if size == 0 {
        return Err(ApiError::validation("The selected file is empty."));
    }
    if size > max_size {
        return Err(ApiError::validation(format!(
            "File size exceeds maximum allowed size of {}MB",
            max_size / (1024 * 1024)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 10 * 1024 * 1024;

    #[test]
    fn test_accepts_csv() {
        assert!(validate_statement_file("statement.csv", 120, MAX).is_ok());
        assert!(validate_statement_file("STATEMENT.CSV", 120, MAX).is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        let err = validate_statement_file("statement.xlsx", 120, MAX).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type. Please upload a CSV file.");
        assert!(validate_statement_file("csv", 120, MAX).is_err());
        assert!(validate_statement_file(".csv", 120, MAX).is_err());
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(validate_statement_file("a.csv", 0, MAX).is_err());
        let err = validate_statement_file("a.csv", MAX + 1, MAX).unwrap_err();
        assert!(err.to_string().contains("10MB"));
    }

    #[test]
    fn test_upload_summary_issues() {
        let mut summary = UploadSummary {
            total_records: 3,
            success_records: 3,
            ..Default::default()
        };
        assert!(!summary.has_issues());
        summary.pending_records = 1;
        assert!(summary.has_issues());
    }
}
