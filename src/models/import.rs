//! Bulk catalog import models.
//!
//! Rows mirror the spreadsheet layout used for catalog loads: scalar movie
//! fields plus director and genre names resolved (or created) during import.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One movie row in a bulk import request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportRow {
    pub title: String,
    pub release_year: i32,
    pub description: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Bulk import request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportRequest {
    pub rows: Vec<ImportRow>,
}

/// What happened to a single row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportAction {
    Created,
    /// Movie with the same title and release year already existed;
    /// missing director/genre links were still added.
    Merged,
    Skipped,
}

/// Report returned after a bulk import
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    pub created: usize,
    pub merged: usize,
    pub skipped: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ImportReport {
    pub fn record(&mut self, action: ImportAction) {
        match action {
            ImportAction::Created => self.created += 1,
            ImportAction::Merged => self.merged += 1,
            ImportAction::Skipped => self.skipped += 1,
        }
    }

    pub fn new() -> Self {
        Self {
            created: 0,
            merged: 0,
            skipped: 0,
            warnings: Vec::new(),
        }
    }
}

impl Default for ImportReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_tallies_actions() {
        let mut report = ImportReport::new();
        report.record(ImportAction::Created);
        report.record(ImportAction::Created);
        report.record(ImportAction::Skipped);
        assert_eq!(report.created, 2);
        assert_eq!(report.merged, 0);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn row_deserializes_with_defaults() {
        let row: ImportRow =
            serde_json::from_str(r#"{"title":"Solaris","release_year":1972}"#).unwrap();
        assert!(row.directors.is_empty());
        assert!(row.genres.is_empty());
    }
}
