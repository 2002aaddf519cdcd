//! End-to-end export tests over the in-memory store.

mod common;

use common::{employee, expense, template};
use rust_decimal_macros::dec;
use sanad_core::export::{ExportError, ExportScope, ExportService};
use sanad_core::filter::FilterState;
use sanad_core::store::LedgerStore;
use sanad_core::template::{DocumentMeta, ExportColumn, TemplateKind};
use sanad_store::{MemoryStore, Snapshot};

fn meta() -> DocumentMeta {
    DocumentMeta {
        company_name: "Al-Rafid Transport".to_string(),
        tagline: "Haulage & logistics".to_string(),
        logo: String::new(),
        period: "2024-01".to_string(),
        printed_at: "2024-02-01 09:30".to_string(),
    }
}

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.put_expense(expense((2024, 1, 5), dec!(100))).await;
    store.put_expense(expense((2024, 1, 20), dec!(200))).await;
    store.put_employee(employee(&["2024-01"])).await;
    store
        .put_template(template(TemplateKind::BulkReport, "Classic", true))
        .await;
    store
}

#[tokio::test]
async fn export_csv_covers_filtered_set() {
    let store = seeded_store().await;
    let scope = ExportScope::filtered(FilterState::new().with_month("2024-01".parse().unwrap()));
    let columns = [ExportColumn::Date, ExportColumn::Name, ExportColumn::Amount];

    let csv = ExportService::export_csv(&store, &scope, &columns).await.unwrap();

    assert!(csv.starts_with("\u{feff}\u{200f}"));
    assert!(csv.contains("\"2024-01-05\",\"Karim\",\"100 IQD\""));
    assert!(csv.contains("\"Sara\""));
    // 100 + 200 + 750,000 all land in the dinar bucket.
    assert!(csv.contains("\"Total IQD\",\"750,300 IQD\""));
}

#[tokio::test]
async fn export_csv_with_selection_ignores_filter() {
    let store = seeded_store().await;
    let expenses = store.list_expenses().await.unwrap();
    let target = expenses.first().unwrap().clone();

    let scope = ExportScope {
        filter: FilterState::new().with_month("2030-12".parse().unwrap()),
        selection: vec![target.id],
    };
    let csv = ExportService::export_csv(&store, &scope, &[ExportColumn::Date])
        .await
        .unwrap();

    let body = csv.trim_start_matches(['\u{feff}', '\u{200f}']);
    let expected = format!("\"{}\"", target.expense_date.format("%Y-%m-%d"));
    assert!(body.contains(&expected));
    // Header, the one selected record, and one totals row.
    assert_eq!(body.lines().count(), 3);
}

#[tokio::test]
async fn print_document_renders_default_template() {
    let store = seeded_store().await;
    let scope = ExportScope::filtered(FilterState::new());
    let columns = [ExportColumn::Date, ExportColumn::Name, ExportColumn::Amount];

    let html = ExportService::render_print_document(
        &store,
        &scope,
        &columns,
        TemplateKind::BulkReport,
        &meta(),
    )
    .await
    .unwrap();

    assert!(html.contains("<h1>Al-Rafid Transport</h1>"));
    assert!(html.contains("<p>2024-01</p>"));
    assert!(html.contains("<th>Date</th><th>Name</th><th>Amount</th>"));
    assert!(html.contains("class=\"total-row\""));
    assert!(html.contains(".total-row { font-weight: bold; }"));
}

#[tokio::test]
async fn print_document_without_default_template_fails() {
    let store = MemoryStore::new();
    store.put_expense(expense((2024, 1, 5), dec!(100))).await;

    let result = ExportService::render_print_document(
        &store,
        &ExportScope::filtered(FilterState::new()),
        &[ExportColumn::Date],
        TemplateKind::Receipt,
        &meta(),
    )
    .await;

    assert!(matches!(result, Err(ExportError::Template(_))));
    assert_eq!(result.unwrap_err().error_code(), "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn export_rejects_empty_column_selection() {
    let store = seeded_store().await;
    let result =
        ExportService::export_csv(&store, &ExportScope::filtered(FilterState::new()), &[]).await;
    assert!(matches!(result, Err(ExportError::NoColumns)));
}

#[tokio::test]
async fn snapshot_round_trips_through_serde() {
    let store = seeded_store().await;
    let snapshot = store.snapshot().await;

    let json = serde_json::to_string(&snapshot).unwrap();
    let reloaded: Snapshot = serde_json::from_str(&json).unwrap();
    let restored = MemoryStore::from_snapshot(reloaded);

    let scope = ExportScope::filtered(FilterState::new());
    let columns = [ExportColumn::Date, ExportColumn::Amount];
    let original = ExportService::export_csv(&store, &scope, &columns).await.unwrap();
    let replayed = ExportService::export_csv(&restored, &scope, &columns)
        .await
        .unwrap();
    assert_eq!(original, replayed);
}
