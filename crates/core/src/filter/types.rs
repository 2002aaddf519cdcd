//! Filter state for the report view.

use crate::ledger::RecordKind;
use sanad_shared::types::{CurrencyCode, YearMonth};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Month dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFilter {
    /// All months.
    #[default]
    All,
    /// A specific year-month.
    Month(YearMonth),
}

/// Counterparty (driver) dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyFilter {
    /// All counterparties.
    #[default]
    All,
    /// A specific driver.
    Id(Uuid),
}

/// Category (expense type) dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// All categories.
    #[default]
    All,
    /// A specific category label.
    Name(String),
}

/// Currency dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyFilter {
    /// All currencies.
    #[default]
    All,
    /// A specific currency code.
    Code(CurrencyCode),
}

/// Payment status dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFilter {
    /// Paid and unpaid records.
    #[default]
    All,
    /// Paid records only.
    Paid,
    /// Unpaid records only.
    Unpaid,
}

/// Record-type dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Both record types.
    #[default]
    All,
    /// Expense transactions only.
    Expense,
    /// Employee salary entries only.
    Employee,
}

impl KindFilter {
    /// Whether a record of `kind` passes this filter.
    #[must_use]
    pub fn admits(&self, kind: RecordKind) -> bool {
        match self {
            Self::All => true,
            Self::Expense => kind == RecordKind::Expense,
            Self::Employee => kind == RecordKind::Employee,
        }
    }
}

/// The active filter set for one report-view session.
///
/// Constructed fresh per session, mutated by user interaction, never
/// persisted. Callers reset pagination to the first page whenever any field
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Month dimension.
    #[serde(default)]
    pub month: MonthFilter,
    /// Counterparty dimension.
    #[serde(default)]
    pub counterparty: CounterpartyFilter,
    /// Category dimension.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Currency dimension.
    #[serde(default)]
    pub currency: CurrencyFilter,
    /// Payment status dimension.
    #[serde(default)]
    pub payment: PaymentFilter,
    /// Case-insensitive substring search over name, number, category, and
    /// description.
    #[serde(default)]
    pub search: String,
    /// Record-type dimension.
    #[serde(default)]
    pub kind: KindFilter,
    /// When true the view shows soft-deleted records instead of active ones,
    /// never both.
    #[serde(default)]
    pub show_deleted: bool,
}

impl FilterState {
    /// Creates a filter that matches every active record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a specific month.
    #[must_use]
    pub fn with_month(mut self, month: YearMonth) -> Self {
        self.month = MonthFilter::Month(month);
        self
    }

    /// Restricts to a specific driver.
    #[must_use]
    pub fn with_counterparty(mut self, id: Uuid) -> Self {
        self.counterparty = CounterpartyFilter::Id(id);
        self
    }

    /// Restricts to a specific category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Name(category.into());
        self
    }

    /// Restricts to a specific currency.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = CurrencyFilter::Code(currency);
        self
    }

    /// Restricts by payment status.
    #[must_use]
    pub const fn with_payment(mut self, payment: PaymentFilter) -> Self {
        self.payment = payment;
        self
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts by record type.
    #[must_use]
    pub const fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Selects the soft-deleted complement instead of active records.
    #[must_use]
    pub const fn show_deleted(mut self, show: bool) -> Self {
        self.show_deleted = show;
        self
    }

    /// Whether the counterparty or category dimension is active.
    ///
    /// Employees have neither dimension, so an active one empties the
    /// employee side of the view.
    #[must_use]
    pub fn narrows_by_dimension(&self) -> bool {
        self.counterparty != CounterpartyFilter::All || self.category != CategoryFilter::All
    }
}
