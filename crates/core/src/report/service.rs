//! Ledger report assembly.

use super::types::{LedgerTotals, LedgerView};
use crate::filter::{FilterService, FilterState, FilteredSet};
use crate::ledger::{self, LedgerRecord, RawEmployee, RawExpense, RecordKind};
use rust_decimal::Decimal;
use sanad_shared::types::{PageMeta, PageRequest};

/// Service assembling the unified ledger view.
pub struct ReportService;

impl ReportService {
    /// Normalizes a filtered set into one merged record list.
    ///
    /// Expenses come first, then employees; the relative order within each
    /// collection is kept so the later stable date sort breaks ties by
    /// original collection order.
    #[must_use]
    pub fn merge(filtered: &FilteredSet) -> Vec<LedgerRecord> {
        filtered
            .expenses
            .iter()
            .map(ledger::normalize_expense)
            .chain(filtered.employees.iter().map(ledger::normalize_employee))
            .collect()
    }

    /// Sorts records by `record_date` descending; stable, so ties keep the
    /// merge order.
    pub fn sort_records(records: &mut [LedgerRecord]) {
        records.sort_by(|a, b| b.record_date.cmp(&a.record_date));
    }

    /// Computes per-currency and hours totals over a record set.
    #[must_use]
    pub fn aggregate(records: &[LedgerRecord]) -> LedgerTotals {
        let mut totals = LedgerTotals::default();

        for record in records {
            let bucket = totals
                .by_currency
                .entry(record.currency.clone())
                .or_insert(Decimal::ZERO);
            *bucket += record.amount;

            let paid_bucket = if record.is_paid {
                &mut totals.paid_by_currency
            } else {
                &mut totals.unpaid_by_currency
            };
            *paid_bucket
                .entry(record.currency.clone())
                .or_insert(Decimal::ZERO) += record.amount;

            if record.kind == RecordKind::Expense {
                totals.total_hours += record.hours.numeric_or_zero();

                if record.is_overtime {
                    totals.overtime_count += 1;
                    totals.overtime_hours += record.hours.numeric_or_zero();
                    *totals
                        .overtime_by_currency
                        .entry(record.currency.clone())
                        .or_insert(Decimal::ZERO) += record.amount;
                }
            }
        }

        totals
    }

    /// Slices one page out of a sorted record list.
    #[must_use]
    pub fn paginate(records: &[LedgerRecord], page: &PageRequest) -> Vec<LedgerRecord> {
        let page = page.normalized();
        records
            .iter()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect()
    }

    /// Builds the report view: filter, normalize, sort, aggregate, paginate.
    ///
    /// Totals always cover the whole filtered set; only `records` is a page
    /// slice.
    #[must_use]
    pub fn build_ledger(
        expenses: &[RawExpense],
        employees: &[RawEmployee],
        filter: &FilterState,
        page: &PageRequest,
    ) -> LedgerView {
        let filtered = FilterService::filter(expenses, employees, filter);
        let mut records = Self::merge(&filtered);
        Self::sort_records(&mut records);

        let totals = Self::aggregate(&records);
        let page = page.normalized();
        let meta = PageMeta::new(page.page, page.per_page, records.len() as u64);

        LedgerView {
            records: Self::paginate(&records, &page),
            totals,
            meta,
        }
    }
}
