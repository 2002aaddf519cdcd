//! Template data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which document a template renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// The filtered-ledger report (print and bulk export).
    BulkReport,
    /// A single-record receipt.
    Receipt,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BulkReport => f.write_str("bulk_report"),
            Self::Receipt => f.write_str("receipt"),
        }
    }
}

/// A stored document template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template ID.
    pub id: Uuid,
    /// Which document this template renders.
    pub kind: TemplateKind,
    /// Display name.
    pub name: String,
    /// HTML body with `{{name}}` tokens.
    pub html_body: String,
    /// Stylesheet inlined into the rendered document.
    pub css_text: String,
    /// Whether this is the default for its kind. At most one template per
    /// kind is default at a time; the set-default operation unsets siblings
    /// first.
    pub is_default: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Document header/footer values substituted into templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Company display name.
    pub company_name: String,
    /// Tagline printed under the name.
    pub tagline: String,
    /// Logo URL or data URI.
    pub logo: String,
    /// Human-readable period label ("2024-01", "All months").
    pub period: String,
    /// Locale-formatted print timestamp.
    pub printed_at: String,
}

/// A ledger column the caller selected for export.
///
/// The caller supplies columns as an ordered list; header and cell
/// generation honor that order exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportColumn {
    /// Record date.
    Date,
    /// Counterparty name.
    Name,
    /// Counterparty number.
    Number,
    /// Category label.
    Category,
    /// Worked hours.
    Hours,
    /// Hourly rate.
    HourlyRate,
    /// Amount.
    Amount,
    /// Currency code.
    Currency,
    /// Paid/unpaid status.
    Payment,
    /// Record type.
    Kind,
    /// Free-text description.
    Description,
}

impl ExportColumn {
    /// Every column, in the report view's order.
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::Date,
            Self::Name,
            Self::Number,
            Self::Category,
            Self::Hours,
            Self::HourlyRate,
            Self::Amount,
            Self::Currency,
            Self::Payment,
            Self::Kind,
            Self::Description,
        ]
    }

    /// Column header label.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Name => "Name",
            Self::Number => "Number",
            Self::Category => "Category",
            Self::Hours => "Hours",
            Self::HourlyRate => "Hourly rate",
            Self::Amount => "Amount",
            Self::Currency => "Currency",
            Self::Payment => "Status",
            Self::Kind => "Type",
            Self::Description => "Description",
        }
    }

    /// Stable key used in column selections and the CLI.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Number => "number",
            Self::Category => "category",
            Self::Hours => "hours",
            Self::HourlyRate => "hourly_rate",
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::Payment => "payment",
            Self::Kind => "kind",
            Self::Description => "description",
        }
    }

    /// Whether this is one of the hour columns; their presence triggers the
    /// hours-total row.
    #[must_use]
    pub const fn is_hours(&self) -> bool {
        matches!(self, Self::Hours | Self::HourlyRate)
    }
}

impl std::str::FromStr for ExportColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportColumn::all()
            .into_iter()
            .find(|c| c.key() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown column: {s}"))
    }
}

/// A synthesized totals row appended after the record rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalRow {
    /// Row label ("Total IQD", "Total hours", ...).
    pub label: String,
    /// Formatted value.
    pub value: String,
}

impl TotalRow {
    /// Creates a totals row.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
