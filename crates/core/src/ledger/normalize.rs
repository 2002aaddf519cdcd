//! Normalization of raw entities into [`LedgerRecord`]s.

use super::types::{HoursCell, LedgerRecord, RawEmployee, RawExpense, RecordKind};
use sanad_shared::types::CurrencyCode;

/// Category label employee salary entries are reported under.
pub const SALARY_CATEGORY: &str = "Salary";

/// Normalizes an expense transaction into a ledger record.
///
/// Missing currency defaults to IQD; missing hours and hourly rate become
/// the `—` sentinel, never zero.
#[must_use]
pub fn normalize_expense(expense: &RawExpense) -> LedgerRecord {
    LedgerRecord {
        kind: RecordKind::Expense,
        id: expense.id,
        record_date: expense.expense_date,
        name: expense.driver_name.clone(),
        number: expense.driver_number.clone(),
        category: expense.expense_type.clone(),
        hours: expense.hours.into(),
        hourly_rate: expense.hourly_rate.into(),
        amount: expense.amount,
        currency: expense.currency.clone().unwrap_or_default(),
        is_paid: expense.is_paid,
        is_overtime: expense.is_overtime,
        description: expense.description.clone(),
    }
}

/// Normalizes an employee salary entry into a ledger record.
///
/// Employee records never carry hour data or overtime: both hour cells are
/// the `—` sentinel and `is_overtime` is always false.
#[must_use]
pub fn normalize_employee(employee: &RawEmployee) -> LedgerRecord {
    LedgerRecord {
        kind: RecordKind::Employee,
        id: employee.id,
        record_date: employee.payment_date,
        name: employee.employee_name.clone(),
        number: employee.employee_number.clone(),
        category: SALARY_CATEGORY.to_string(),
        hours: HoursCell::Empty,
        hourly_rate: HoursCell::Empty,
        amount: employee.salary,
        currency: employee.currency.clone().unwrap_or_default(),
        is_paid: employee.is_paid,
        is_overtime: false,
        description: String::new(),
    }
}

impl RawExpense {
    /// The expense currency with the IQD default applied.
    #[must_use]
    pub fn effective_currency(&self) -> CurrencyCode {
        self.currency.clone().unwrap_or_default()
    }
}

impl RawEmployee {
    /// The employee currency with the IQD default applied.
    #[must_use]
    pub fn effective_currency(&self) -> CurrencyCode {
        self.currency.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn make_expense() -> RawExpense {
        RawExpense {
            id: Uuid::new_v4(),
            expense_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            driver_id: Some(Uuid::new_v4()),
            driver_name: "Karim".to_string(),
            driver_number: "D-104".to_string(),
            expense_type: "Fuel".to_string(),
            hours: None,
            hourly_rate: None,
            is_overtime: false,
            amount: dec!(100),
            currency: None,
            is_paid: true,
            is_deleted: false,
            description: "Tanker refill".to_string(),
            created_by: "owner".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn make_employee() -> RawEmployee {
        RawEmployee {
            id: Uuid::new_v4(),
            employee_name: "Sara".to_string(),
            employee_number: "E-7".to_string(),
            salary: dec!(750000),
            currency: Some(CurrencyCode::iqd()),
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
            is_paid: false,
            is_deleted: false,
            assigned_months: std::collections::BTreeSet::new(),
            created_by: "owner".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_currency_defaults_to_iqd() {
        let record = normalize_expense(&make_expense());
        assert_eq!(record.currency, CurrencyCode::iqd());
    }

    #[test]
    fn test_missing_hours_become_sentinel() {
        let record = normalize_expense(&make_expense());
        assert_eq!(record.hours, HoursCell::Empty);
        assert_eq!(record.hourly_rate, HoursCell::Empty);
    }

    #[test]
    fn test_hour_based_expense_keeps_values() {
        let mut expense = make_expense();
        expense.hours = Some(dec!(8));
        expense.hourly_rate = Some(dec!(12.5));
        expense.is_overtime = true;

        let record = normalize_expense(&expense);
        assert_eq!(record.hours, HoursCell::Value(dec!(8)));
        assert_eq!(record.hourly_rate, HoursCell::Value(dec!(12.5)));
        assert!(record.is_overtime);
    }

    #[test]
    fn test_negative_amount_passes_through() {
        let mut expense = make_expense();
        expense.amount = dec!(-40);
        assert_eq!(normalize_expense(&expense).amount, dec!(-40));
    }

    #[test]
    fn test_employee_never_carries_hours_or_overtime() {
        let record = normalize_employee(&make_employee());
        assert_eq!(record.kind, RecordKind::Employee);
        assert_eq!(record.hours, HoursCell::Empty);
        assert_eq!(record.hourly_rate, HoursCell::Empty);
        assert!(!record.is_overtime);
        assert_eq!(record.category, SALARY_CATEGORY);
        assert_eq!(record.record_date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
    }
}
