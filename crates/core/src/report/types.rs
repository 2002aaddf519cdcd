//! Report data types.

use crate::ledger::LedgerRecord;
use rust_decimal::Decimal;
use sanad_shared::types::{CurrencyCode, PageMeta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-currency and hours totals over a filtered, normalized record set.
///
/// Totals are re-derived from the current set on every call; nothing here is
/// cached or carried between filter states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Amount sum per currency bucket.
    pub by_currency: BTreeMap<CurrencyCode, Decimal>,
    /// Paid amount sum per currency bucket.
    pub paid_by_currency: BTreeMap<CurrencyCode, Decimal>,
    /// Unpaid amount sum per currency bucket.
    pub unpaid_by_currency: BTreeMap<CurrencyCode, Decimal>,
    /// Sum of numeric hours over expense records; the `—` sentinel
    /// contributes zero.
    pub total_hours: Decimal,
    /// Sum of numeric hours over overtime expense records.
    pub overtime_hours: Decimal,
    /// Amount sum per currency over overtime expense records.
    pub overtime_by_currency: BTreeMap<CurrencyCode, Decimal>,
    /// Number of overtime expense records.
    pub overtime_count: u64,
}

impl LedgerTotals {
    /// Whether any overtime aggregate is non-zero.
    #[must_use]
    pub fn has_overtime(&self) -> bool {
        self.overtime_count > 0
    }
}

/// One page of the filtered ledger plus the totals over the whole
/// filtered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerView {
    /// The records on the requested page, date-descending.
    pub records: Vec<LedgerRecord>,
    /// Totals over the entire filtered set, not just this page.
    pub totals: LedgerTotals,
    /// Pagination metadata.
    pub meta: PageMeta,
}
