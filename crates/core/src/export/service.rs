//! Export orchestration: scope resolution, totals synthesis, rendering.

use super::error::ExportError;
use super::types::ExportScope;
use crate::filter::FilterService;
use crate::ledger::{self, LedgerRecord, RawEmployee, RawExpense};
use crate::report::{LedgerTotals, ReportService};
use crate::store::LedgerStore;
use crate::template::{
    DocumentMeta, ExportColumn, TemplateEngine, TemplateKind, TemplateService, TotalRow,
};
use rust_decimal::Decimal;
use sanad_shared::types::format_amount;
use std::collections::HashSet;

/// Byte-order mark prefixed to CSV output so spreadsheet tools detect UTF-8.
pub const CSV_BOM: char = '\u{feff}';

/// Right-to-left mark prefixed to CSV output for the target locale.
pub const CSV_RLM: char = '\u{200f}';

/// Service producing export artifacts from the ledger.
pub struct ExportService;

impl ExportService {
    /// Resolves an export scope into a sorted record set.
    ///
    /// A non-empty selection picks exactly those ids out of the full
    /// collections; the filter is ignored, which is how per-record printing
    /// reaches soft-deleted records from the deleted view. An empty
    /// selection resolves through the filter engine. Pagination never
    /// applies here.
    #[must_use]
    pub fn resolve_scope(
        expenses: &[RawExpense],
        employees: &[RawEmployee],
        scope: &ExportScope,
    ) -> Vec<LedgerRecord> {
        let mut records = if scope.selection.is_empty() {
            let filtered = FilterService::filter(expenses, employees, &scope.filter);
            ReportService::merge(&filtered)
        } else {
            let wanted: HashSet<_> = scope.selection.iter().copied().collect();
            expenses
                .iter()
                .filter(|e| wanted.contains(&e.id))
                .map(ledger::normalize_expense)
                .chain(
                    employees
                        .iter()
                        .filter(|e| wanted.contains(&e.id))
                        .map(ledger::normalize_employee),
                )
                .collect()
        };

        ReportService::sort_records(&mut records);
        records
    }

    /// Synthesizes the totals rows appended after the record rows.
    ///
    /// One row per currency bucket, an hours-total row when an hours column
    /// is selected and hours were recorded, and overtime summary rows when
    /// any overtime aggregate is non-zero.
    #[must_use]
    pub fn synthesize_total_rows(
        totals: &LedgerTotals,
        columns: &[ExportColumn],
    ) -> Vec<TotalRow> {
        let mut rows = Vec::new();

        for (currency, sum) in &totals.by_currency {
            rows.push(TotalRow::new(
                format!("Total {currency}"),
                format_amount(*sum, currency),
            ));
        }

        if columns.iter().any(ExportColumn::is_hours) && totals.total_hours > Decimal::ZERO {
            rows.push(TotalRow::new(
                "Total hours",
                totals.total_hours.normalize().to_string(),
            ));
        }

        if totals.has_overtime() {
            rows.push(TotalRow::new(
                "Overtime entries",
                totals.overtime_count.to_string(),
            ));
            if totals.overtime_hours > Decimal::ZERO {
                rows.push(TotalRow::new(
                    "Overtime hours",
                    totals.overtime_hours.normalize().to_string(),
                ));
            }
            for (currency, sum) in &totals.overtime_by_currency {
                if !sum.is_zero() {
                    rows.push(TotalRow::new(
                        format!("Overtime {currency}"),
                        format_amount(*sum, currency),
                    ));
                }
            }
        }

        rows
    }

    /// Renders records and totals rows into the CSV dialect.
    ///
    /// Output is prefixed with a byte-order mark and a right-to-left mark,
    /// every cell is quoted, and embedded quotes are doubled. Totals rows
    /// are two-cell rows (label, value).
    pub fn render_csv(
        records: &[LedgerRecord],
        columns: &[ExportColumn],
        total_rows: &[TotalRow],
    ) -> Result<String, ExportError> {
        Self::ensure_columns(columns)?;

        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .flexible(true)
            .from_writer(Vec::new());

        writer
            .write_record(columns.iter().map(ExportColumn::header))
            .map_err(|e| ExportError::Render(e.to_string()))?;

        for record in records {
            writer
                .write_record(
                    columns
                        .iter()
                        .map(|c| TemplateEngine::cell_value(record, *c)),
                )
                .map_err(|e| ExportError::Render(e.to_string()))?;
        }

        for row in total_rows {
            writer
                .write_record([row.label.as_str(), row.value.as_str()])
                .map_err(|e| ExportError::Render(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let data = String::from_utf8(bytes).map_err(|e| ExportError::Render(e.to_string()))?;

        Ok(format!("{CSV_BOM}{CSV_RLM}{data}"))
    }

    /// Exports the scoped record set as CSV.
    pub async fn export_csv<S: LedgerStore + ?Sized>(
        store: &S,
        scope: &ExportScope,
        columns: &[ExportColumn],
    ) -> Result<String, ExportError> {
        Self::ensure_columns(columns)?;

        let expenses = store.list_expenses().await?;
        let employees = store.list_employees().await?;
        let records = Self::resolve_scope(&expenses, &employees, scope);
        let totals = ReportService::aggregate(&records);
        let total_rows = Self::synthesize_total_rows(&totals, columns);

        tracing::info!(records = records.len(), "csv export rendered");
        Self::render_csv(&records, columns, &total_rows)
    }

    /// Renders the scoped record set through the default template of the
    /// requested kind.
    pub async fn render_print_document<S: LedgerStore + ?Sized>(
        store: &S,
        scope: &ExportScope,
        columns: &[ExportColumn],
        kind: TemplateKind,
        meta: &DocumentMeta,
    ) -> Result<String, ExportError> {
        Self::ensure_columns(columns)?;

        let template = TemplateService::default_template(store, kind).await?;
        let expenses = store.list_expenses().await?;
        let employees = store.list_employees().await?;
        let records = Self::resolve_scope(&expenses, &employees, scope);
        let totals = ReportService::aggregate(&records);
        let total_rows = Self::synthesize_total_rows(&totals, columns);

        tracing::info!(records = records.len(), %kind, "print document rendered");
        Ok(TemplateEngine::render(
            &template,
            &records,
            &total_rows,
            meta,
            columns,
        ))
    }

    fn ensure_columns(columns: &[ExportColumn]) -> Result<(), ExportError> {
        if columns.is_empty() {
            return Err(ExportError::NoColumns);
        }
        Ok(())
    }
}
