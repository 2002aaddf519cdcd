//! Filter evaluation over the raw collections.

use super::types::{
    CategoryFilter, CounterpartyFilter, CurrencyFilter, FilterState, MonthFilter, PaymentFilter,
};
use crate::ledger::{RawEmployee, RawExpense, RecordKind};
use sanad_shared::types::YearMonth;

/// The filtered raw collections, ready for normalization.
#[derive(Debug, Clone, Default)]
pub struct FilteredSet {
    /// Expenses that passed the filter.
    pub expenses: Vec<RawExpense>,
    /// Employees that passed the filter.
    pub employees: Vec<RawEmployee>,
}

/// Stateless filter engine.
pub struct FilterService;

impl FilterService {
    /// Applies the filter state to both raw collections.
    ///
    /// Filters only narrow: every returned record is a member of the input.
    /// Two observed behaviors of the report view are preserved on purpose:
    ///
    /// - An active counterparty or category filter also applies to
    ///   employees, which have neither dimension, so the employee side is
    ///   empty whenever either is set.
    /// - For expenses, an active currency filter is applied *instead of*
    ///   the counterparty/category predicates, not in addition to them.
    #[must_use]
    pub fn filter(
        expenses: &[RawExpense],
        employees: &[RawEmployee],
        state: &FilterState,
    ) -> FilteredSet {
        FilteredSet {
            expenses: expenses
                .iter()
                .filter(|e| Self::expense_matches(e, state))
                .cloned()
                .collect(),
            employees: employees
                .iter()
                .filter(|e| Self::employee_matches(e, state))
                .cloned()
                .collect(),
        }
    }

    fn expense_matches(expense: &RawExpense, state: &FilterState) -> bool {
        if expense.is_deleted != state.show_deleted {
            return false;
        }
        if !state.kind.admits(RecordKind::Expense) {
            return false;
        }
        if let MonthFilter::Month(month) = state.month
            && YearMonth::from(expense.expense_date) != month
        {
            return false;
        }

        if let CurrencyFilter::Code(code) = &state.currency {
            if expense.effective_currency() != *code {
                return false;
            }
        } else {
            if let CounterpartyFilter::Id(id) = state.counterparty
                && expense.driver_id != Some(id)
            {
                return false;
            }
            if let CategoryFilter::Name(name) = &state.category
                && expense.expense_type != *name
            {
                return false;
            }
        }

        Self::payment_matches(expense.is_paid, state.payment)
            && Self::search_matches(
                state,
                [
                    expense.driver_name.as_str(),
                    expense.driver_number.as_str(),
                    expense.expense_type.as_str(),
                    expense.description.as_str(),
                ],
            )
    }

    fn employee_matches(employee: &RawEmployee, state: &FilterState) -> bool {
        if employee.is_deleted != state.show_deleted {
            return false;
        }
        if !state.kind.admits(RecordKind::Employee) {
            return false;
        }
        if let MonthFilter::Month(month) = state.month
            && !employee.assigned_months.contains(&month)
        {
            return false;
        }
        // Employees have no counterparty or category dimension.
        if state.narrows_by_dimension() {
            return false;
        }
        if let CurrencyFilter::Code(code) = &state.currency
            && employee.effective_currency() != *code
        {
            return false;
        }

        Self::payment_matches(employee.is_paid, state.payment)
            && Self::search_matches(
                state,
                [
                    employee.employee_name.as_str(),
                    employee.employee_number.as_str(),
                ],
            )
    }

    fn payment_matches(is_paid: bool, filter: PaymentFilter) -> bool {
        match filter {
            PaymentFilter::All => true,
            PaymentFilter::Paid => is_paid,
            PaymentFilter::Unpaid => !is_paid,
        }
    }

    fn search_matches<'a>(
        state: &FilterState,
        fields: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        let term = state.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}
