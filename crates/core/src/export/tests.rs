//! Export orchestration tests.

use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::service::ExportService;
use super::types::ExportScope;
use crate::filter::FilterState;
use crate::ledger::{RawEmployee, RawExpense};
use crate::report::ReportService;
use crate::template::ExportColumn;
use sanad_shared::types::CurrencyCode;

fn expense(date: (i32, u32, u32), amount: rust_decimal::Decimal, deleted: bool) -> RawExpense {
    RawExpense {
        id: Uuid::new_v4(),
        expense_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        driver_id: None,
        driver_name: "Karim".to_string(),
        driver_number: "D-104".to_string(),
        expense_type: "Fuel".to_string(),
        hours: None,
        hourly_rate: None,
        is_overtime: false,
        amount,
        currency: None,
        is_paid: false,
        is_deleted: deleted,
        description: String::new(),
        created_by: "owner".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn employee(deleted: bool) -> RawEmployee {
    RawEmployee {
        id: Uuid::new_v4(),
        employee_name: "Sara".to_string(),
        employee_number: "E-7".to_string(),
        salary: dec!(750000),
        currency: None,
        payment_date: NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
        is_paid: false,
        is_deleted: deleted,
        assigned_months: ["2024-01".parse().unwrap()].into_iter().collect(),
        created_by: "owner".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Scenario: no selection and an all-pass filter exports the entire active
/// merged set.
#[test]
fn test_empty_selection_exports_full_active_set() {
    let expenses = vec![
        expense((2024, 1, 5), dec!(100), false),
        expense((2024, 2, 1), dec!(50), true),
    ];
    let employees = vec![employee(false), employee(true)];

    let records = ExportService::resolve_scope(
        &expenses,
        &employees,
        &ExportScope::filtered(FilterState::new()),
    );

    assert_eq!(records.len(), 2);
    assert!(records.iter().any(|r| r.id == expenses[0].id));
    assert!(records.iter().any(|r| r.id == employees[0].id));
}

#[test]
fn test_selection_overrides_filter() {
    let kept = expense((2024, 1, 5), dec!(100), false);
    let deleted = expense((2024, 2, 1), dec!(50), true);
    let expenses = vec![kept.clone(), deleted.clone()];

    // The filter would exclude the deleted record; an explicit selection
    // reaches it anyway.
    let scope = ExportScope {
        filter: FilterState::new().with_month("2024-01".parse().unwrap()),
        selection: vec![deleted.id],
    };

    let records = ExportService::resolve_scope(&expenses, &[], &scope);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, deleted.id);
}

#[test]
fn test_single_receipt_scope() {
    let target = expense((2024, 1, 5), dec!(100), false);
    let expenses = vec![target.clone(), expense((2024, 1, 6), dec!(60), false)];

    let records = ExportService::resolve_scope(&expenses, &[], &ExportScope::single(target.id));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, target.id);
}

#[test]
fn test_scope_is_sorted_date_descending() {
    let older = expense((2024, 1, 5), dec!(100), false);
    let newer = expense((2024, 3, 5), dec!(100), false);
    let expenses = vec![older.clone(), newer.clone()];

    let records = ExportService::resolve_scope(
        &expenses,
        &[],
        &ExportScope::selection(vec![older.id, newer.id]),
    );
    assert_eq!(records[0].id, newer.id);
    assert_eq!(records[1].id, older.id);
}

#[test]
fn test_csv_prefix_and_quoting() {
    let expenses = vec![expense((2024, 1, 5), dec!(100), false)];
    let records =
        ExportService::resolve_scope(&expenses, &[], &ExportScope::filtered(FilterState::new()));
    let columns = [ExportColumn::Date, ExportColumn::Amount];

    let csv = ExportService::render_csv(&records, &columns, &[]).unwrap();

    assert!(csv.starts_with("\u{feff}\u{200f}"));
    let body = csv.trim_start_matches(['\u{feff}', '\u{200f}']);
    assert!(body.starts_with("\"Date\",\"Amount\""));
    assert!(body.contains("\"2024-01-05\",\"100 IQD\""));
}

#[test]
fn test_csv_doubles_embedded_quotes() {
    let mut noisy = expense((2024, 1, 5), dec!(10), false);
    noisy.description = "the \"big\" tanker".to_string();
    let records =
        ExportService::resolve_scope(&[noisy], &[], &ExportScope::filtered(FilterState::new()));

    let csv =
        ExportService::render_csv(&records, &[ExportColumn::Description], &[]).unwrap();
    assert!(csv.contains("\"the \"\"big\"\" tanker\""));
}

#[test]
fn test_csv_round_trip() {
    let mut tricky = expense((2024, 1, 5), dec!(100), false);
    tricky.description = "line \"quoted\", with, commas".to_string();
    tricky.driver_name = "Karim, son of Omar".to_string();
    let expenses = vec![tricky, expense((2024, 1, 6), dec!(50), false)];

    let records =
        ExportService::resolve_scope(&expenses, &[], &ExportScope::filtered(FilterState::new()));
    let columns = [
        ExportColumn::Date,
        ExportColumn::Name,
        ExportColumn::Description,
    ];

    let csv = ExportService::render_csv(&records, &columns, &[]).unwrap();
    let body = csv.trim_start_matches(['\u{feff}', '\u{200f}']);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(
                row.get(i).unwrap(),
                crate::template::TemplateEngine::cell_value(record, *column)
            );
        }
    }
}

#[test]
fn test_csv_appends_total_rows() {
    let expenses = vec![
        expense((2024, 1, 5), dec!(100), false),
        expense((2024, 1, 6), dec!(200), false),
    ];
    let records =
        ExportService::resolve_scope(&expenses, &[], &ExportScope::filtered(FilterState::new()));
    let columns = [ExportColumn::Date, ExportColumn::Amount];
    let totals = ReportService::aggregate(&records);
    let total_rows = ExportService::synthesize_total_rows(&totals, &columns);

    let csv = ExportService::render_csv(&records, &columns, &total_rows).unwrap();
    assert!(csv.contains("\"Total IQD\",\"300 IQD\""));
}

#[test]
fn test_total_rows_per_currency_bucket() {
    let mut usd = expense((2024, 1, 7), dec!(50), false);
    usd.currency = Some(CurrencyCode::usd());
    let expenses = vec![expense((2024, 1, 5), dec!(100), false), usd];

    let records =
        ExportService::resolve_scope(&expenses, &[], &ExportScope::filtered(FilterState::new()));
    let totals = ReportService::aggregate(&records);
    let rows = ExportService::synthesize_total_rows(&totals, &[ExportColumn::Amount]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "Total IQD");
    assert_eq!(rows[0].value, "100 IQD");
    assert_eq!(rows[1].label, "Total USD");
    assert_eq!(rows[1].value, "50.00 USD");
}

#[test]
fn test_hours_row_requires_hours_column_and_nonzero_total() {
    let mut hour_based = expense((2024, 1, 5), dec!(96), false);
    hour_based.hours = Some(dec!(8));
    let records = ExportService::resolve_scope(
        &[hour_based],
        &[],
        &ExportScope::filtered(FilterState::new()),
    );
    let totals = ReportService::aggregate(&records);

    let with_hours =
        ExportService::synthesize_total_rows(&totals, &[ExportColumn::Hours, ExportColumn::Amount]);
    assert!(with_hours.iter().any(|r| r.label == "Total hours" && r.value == "8"));

    let without_hours = ExportService::synthesize_total_rows(&totals, &[ExportColumn::Amount]);
    assert!(!without_hours.iter().any(|r| r.label == "Total hours"));
}

#[test]
fn test_overtime_rows_only_when_nonzero() {
    let plain = expense((2024, 1, 5), dec!(100), false);
    let records =
        ExportService::resolve_scope(&[plain], &[], &ExportScope::filtered(FilterState::new()));
    let totals = ReportService::aggregate(&records);
    let rows = ExportService::synthesize_total_rows(&totals, &[ExportColumn::Amount]);
    assert!(!rows.iter().any(|r| r.label.starts_with("Overtime")));

    let mut overtime = expense((2024, 1, 6), dec!(120), false);
    overtime.is_overtime = true;
    overtime.hours = Some(dec!(3));
    let records = ExportService::resolve_scope(
        &[overtime],
        &[],
        &ExportScope::filtered(FilterState::new()),
    );
    let totals = ReportService::aggregate(&records);
    let rows = ExportService::synthesize_total_rows(&totals, &[ExportColumn::Amount]);

    assert!(rows.iter().any(|r| r.label == "Overtime entries" && r.value == "1"));
    assert!(rows.iter().any(|r| r.label == "Overtime hours" && r.value == "3"));
    assert!(rows.iter().any(|r| r.label == "Overtime IQD" && r.value == "120 IQD"));
}

#[test]
fn test_empty_column_selection_is_rejected() {
    let result = ExportService::render_csv(&[], &[], &[]);
    assert!(matches!(result, Err(super::error::ExportError::NoColumns)));
}
