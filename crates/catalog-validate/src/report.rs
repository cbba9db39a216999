//! JSON validation report

use std::fs;
use std::path::Path;

use catalog_types::{CatalogError, Result, ValidationIssue};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::catalog::CatalogValidation;

/// The artifact written after a full validation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// When the pass ran, RFC 3339 UTC with milliseconds
    pub timestamp: String,
    /// Files examined
    pub total_files: usize,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// The issues themselves
    pub details: ReportDetails,
}

/// Issue lists split by severity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDetails {
    /// Blocking issues
    pub errors: Vec<ValidationIssue>,
    /// Advisory issues
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Summarize a validation pass
    pub fn new(validation: &CatalogValidation, generated_at: DateTime<Utc>) -> Self {
        let errors: Vec<ValidationIssue> = validation.errors().cloned().collect();
        let warnings: Vec<ValidationIssue> = validation.warnings().cloned().collect();

        Self {
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_files: validation.total_files,
            errors: errors.len(),
            warnings: warnings.len(),
            details: ReportDetails { errors, warnings },
        }
    }

    /// Write the report as pretty JSON, replacing any previous report
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| CatalogError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote validation report to {:?}", path);
        Ok(())
    }
}
