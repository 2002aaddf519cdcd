//! Export data types.

use crate::filter::FilterState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The record set an export or print operation applies to.
///
/// A non-empty `selection` restricts the export to exactly those ids out of
/// the full collections, ignoring the filter; an empty selection exports the
/// full filtered set. Pagination never participates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportScope {
    /// Filter applied when no explicit selection exists.
    #[serde(default)]
    pub filter: FilterState,
    /// Explicit record selection; empty means "use the filter".
    #[serde(default)]
    pub selection: Vec<Uuid>,
}

impl ExportScope {
    /// Scope over the full filtered set.
    #[must_use]
    pub fn filtered(filter: FilterState) -> Self {
        Self {
            filter,
            selection: Vec::new(),
        }
    }

    /// Scope over an explicit selection.
    #[must_use]
    pub fn selection(ids: Vec<Uuid>) -> Self {
        Self {
            filter: FilterState::default(),
            selection: ids,
        }
    }

    /// Scope over a single record, the print-one-receipt case.
    #[must_use]
    pub fn single(id: Uuid) -> Self {
        Self::selection(vec![id])
    }
}

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Spreadsheet CSV.
    Csv,
    /// Print-ready HTML.
    Html,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}
