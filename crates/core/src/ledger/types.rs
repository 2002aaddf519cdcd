//! Ledger data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sanad_shared::types::{CurrencyCode, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A raw expense transaction as the data-access collaborator returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExpense {
    /// Expense ID.
    pub id: Uuid,
    /// Date the expense occurred.
    pub expense_date: NaiveDate,
    /// Driver the expense belongs to, if any.
    pub driver_id: Option<Uuid>,
    /// Driver display name.
    pub driver_name: String,
    /// Driver number (badge/phone identifier).
    pub driver_number: String,
    /// Category label (fuel, trailer fee, repair, ...).
    pub expense_type: String,
    /// Worked hours, when the expense is hour-based.
    pub hours: Option<Decimal>,
    /// Hourly rate, when the expense is hour-based.
    pub hourly_rate: Option<Decimal>,
    /// Whether this is an overtime entry.
    #[serde(default)]
    pub is_overtime: bool,
    /// Amount; negative values pass through unchanged.
    pub amount: Decimal,
    /// Currency; absent means IQD.
    #[serde(default)]
    pub currency: Option<CurrencyCode>,
    /// Whether the expense has been paid out.
    #[serde(default)]
    pub is_paid: bool,
    /// Soft-deletion flag.
    #[serde(default)]
    pub is_deleted: bool,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Owner identity.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A raw employee salary entry as the data-access collaborator returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEmployee {
    /// Employee ID.
    pub id: Uuid,
    /// Employee display name.
    pub employee_name: String,
    /// Employee number.
    pub employee_number: String,
    /// Monthly salary; negative values pass through unchanged.
    pub salary: Decimal,
    /// Currency; absent means IQD.
    #[serde(default)]
    pub currency: Option<CurrencyCode>,
    /// Date the salary is paid.
    pub payment_date: NaiveDate,
    /// Whether the salary has been paid out.
    #[serde(default)]
    pub is_paid: bool,
    /// Soft-deletion flag.
    #[serde(default)]
    pub is_deleted: bool,
    /// Months this employee is assigned to. An empty set means the employee
    /// is not assigned to any month and never matches a specific-month
    /// filter in this view.
    #[serde(default)]
    pub assigned_months: BTreeSet<YearMonth>,
    /// Owner identity.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Which raw source a ledger record came from.
///
/// Exactly one source produces each record; the merge never fabricates
/// cross-type fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// An expense transaction.
    Expense,
    /// An employee salary entry.
    Employee,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expense => f.write_str("expense"),
            Self::Employee => f.write_str("employee"),
        }
    }
}

/// An hours or hourly-rate cell.
///
/// Records without hour data carry the `—` sentinel, not zero; aggregation
/// special-cases it so an absent value never contributes to totals as if it
/// were a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum HoursCell {
    /// A recorded value.
    Value(Decimal),
    /// No value; displays as `—`.
    Empty,
}

impl HoursCell {
    /// The numeric value, if present.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Empty => None,
        }
    }

    /// The numeric value, with the sentinel contributing zero.
    #[must_use]
    pub fn numeric_or_zero(&self) -> Decimal {
        self.as_decimal().unwrap_or(Decimal::ZERO)
    }
}

impl From<Option<Decimal>> for HoursCell {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }
}

impl From<HoursCell> for Option<Decimal> {
    fn from(cell: HoursCell) -> Self {
        cell.as_decimal()
    }
}

impl std::fmt::Display for HoursCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", value.normalize()),
            Self::Empty => f.write_str("\u{2014}"),
        }
    }
}

/// A normalized ledger record. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Which raw source produced this record.
    pub kind: RecordKind,
    /// Source entity ID.
    pub id: Uuid,
    /// Date the record is reported under.
    pub record_date: NaiveDate,
    /// Counterparty display name.
    pub name: String,
    /// Counterparty number.
    pub number: String,
    /// Category label; `Salary` for employee records.
    pub category: String,
    /// Worked hours or the `—` sentinel.
    pub hours: HoursCell,
    /// Hourly rate or the `—` sentinel.
    pub hourly_rate: HoursCell,
    /// Amount; negative values pass through unchanged.
    pub amount: Decimal,
    /// Currency, defaulted to IQD during normalization.
    pub currency: CurrencyCode,
    /// Whether the record has been paid out.
    pub is_paid: bool,
    /// Whether this is an overtime entry; always false for employees.
    pub is_overtime: bool,
    /// Free-text description.
    pub description: String,
}
