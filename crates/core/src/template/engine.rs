//! Placeholder substitution and markup fragment generation.

use super::types::{DocumentMeta, ExportColumn, Template, TotalRow};
use crate::ledger::{LedgerRecord, RecordKind};
use sanad_shared::types::format_amount;
use std::collections::BTreeMap;

/// Values a substitution pass replaces tokens with.
pub type TokenValues = BTreeMap<String, String>;

/// Pure string-transform engine over `{{name}}` templates.
///
/// Rendering never performs I/O; writing the result to a file, download, or
/// print window is the caller's concern.
pub struct TemplateEngine;

impl TemplateEngine {
    /// Replaces every known `{{name}}` token with its value.
    ///
    /// Unknown tokens are left as literal text: templates degrade
    /// gracefully instead of erroring when a field is omitted. Token names
    /// are trimmed, so `{{ company_name }}` and `{{company_name}}` are the
    /// same token.
    #[must_use]
    pub fn substitute(text: &str, values: &TokenValues) -> String {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let token = after_open[..end].trim();
                    match values.get(token) {
                        Some(value) => output.push_str(value),
                        None => {
                            // Unknown token: keep it verbatim.
                            output.push_str(&rest[start..start + 2 + end + 2]);
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    // Unterminated open marker: literal to the end.
                    output.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        output.push_str(rest);
        output
    }

    /// `<th>` fragments for the selected columns, in caller order.
    #[must_use]
    pub fn table_headers(columns: &[ExportColumn]) -> String {
        columns
            .iter()
            .map(|c| format!("<th>{}</th>", escape_html(c.header())))
            .collect()
    }

    /// `<tr>` fragments for the records, in caller column order.
    ///
    /// Row classes and badges derive purely from record fields: `overtime`
    /// for overtime entries, `employee` for salary entries, paid/unpaid
    /// badges in the status column.
    #[must_use]
    pub fn table_rows(records: &[LedgerRecord], columns: &[ExportColumn]) -> String {
        let mut rows = String::new();
        for record in records {
            let mut classes: Vec<&str> = Vec::new();
            if record.is_overtime {
                classes.push("overtime");
            }
            if record.kind == RecordKind::Employee {
                classes.push("employee");
            }

            if classes.is_empty() {
                rows.push_str("<tr>");
            } else {
                rows.push_str(&format!("<tr class=\"{}\">", classes.join(" ")));
            }
            for column in columns {
                rows.push_str(&Self::cell_markup(record, *column));
            }
            rows.push_str("</tr>");
        }
        rows
    }

    /// `<tr>` fragments for synthesized totals rows.
    ///
    /// The label spans every column but the last so the value lines up with
    /// the rightmost cell.
    #[must_use]
    pub fn total_rows(rows: &[TotalRow], column_count: usize) -> String {
        let label_span = column_count.saturating_sub(1).max(1);
        rows.iter()
            .map(|row| {
                format!(
                    "<tr class=\"total-row\"><td colspan=\"{label_span}\">{}</td><td>{}</td></tr>",
                    escape_html(&row.label),
                    escape_html(&row.value),
                )
            })
            .collect()
    }

    /// The display value of one record cell.
    #[must_use]
    pub fn cell_value(record: &LedgerRecord, column: ExportColumn) -> String {
        match column {
            ExportColumn::Date => record.record_date.format("%Y-%m-%d").to_string(),
            ExportColumn::Name => record.name.clone(),
            ExportColumn::Number => record.number.clone(),
            ExportColumn::Category => record.category.clone(),
            ExportColumn::Hours => record.hours.to_string(),
            ExportColumn::HourlyRate => record.hourly_rate.to_string(),
            ExportColumn::Amount => format_amount(record.amount, &record.currency),
            ExportColumn::Currency => record.currency.to_string(),
            ExportColumn::Payment => {
                if record.is_paid { "Paid" } else { "Unpaid" }.to_string()
            }
            ExportColumn::Kind => match record.kind {
                RecordKind::Expense => "Expense".to_string(),
                RecordKind::Employee => "Employee".to_string(),
            },
            ExportColumn::Description => record.description.clone(),
        }
    }

    fn cell_markup(record: &LedgerRecord, column: ExportColumn) -> String {
        if column == ExportColumn::Payment {
            let badge = if record.is_paid { "paid" } else { "unpaid" };
            return format!(
                "<td><span class=\"badge {badge}\">{}</span></td>",
                escape_html(&Self::cell_value(record, column)),
            );
        }
        format!("<td>{}</td>", escape_html(&Self::cell_value(record, column)))
    }

    /// Renders the full print document.
    ///
    /// The template body is substituted with the document meta and the
    /// generated table fragments, then wrapped with the template's
    /// stylesheet into a right-to-left HTML document.
    #[must_use]
    pub fn render(
        template: &Template,
        records: &[LedgerRecord],
        total_rows: &[TotalRow],
        meta: &DocumentMeta,
        columns: &[ExportColumn],
    ) -> String {
        let mut values = TokenValues::new();
        values.insert("company_name".into(), escape_html(&meta.company_name));
        values.insert("tagline".into(), escape_html(&meta.tagline));
        values.insert("logo".into(), meta.logo.clone());
        values.insert("period".into(), escape_html(&meta.period));
        values.insert("printed_at".into(), escape_html(&meta.printed_at));
        values.insert("table_headers".into(), Self::table_headers(columns));
        values.insert("table_rows".into(), Self::table_rows(records, columns));
        values.insert(
            "total_rows".into(),
            Self::total_rows(total_rows, columns.len()),
        );

        let body = Self::substitute(&template.html_body, &values);

        format!(
            "<!DOCTYPE html>\n<html dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
            escape_html(&template.name),
            template.css_text,
        )
    }
}

/// Escapes text for inclusion in HTML markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sanad_shared::types::CurrencyCode;
    use uuid::Uuid;

    fn record() -> LedgerRecord {
        LedgerRecord {
            kind: RecordKind::Expense,
            id: Uuid::new_v4(),
            record_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            name: "Karim".to_string(),
            number: "D-104".to_string(),
            category: "Fuel".to_string(),
            hours: crate::ledger::HoursCell::Empty,
            hourly_rate: crate::ledger::HoursCell::Empty,
            amount: dec!(12500),
            currency: CurrencyCode::iqd(),
            is_paid: true,
            is_overtime: false,
            description: "Tanker refill".to_string(),
        }
    }

    fn values(pairs: &[(&str, &str)]) -> TokenValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_known_tokens() {
        let out = TemplateEngine::substitute(
            "<h1>{{company_name}}</h1><p>{{ period }}</p>",
            &values(&[("company_name", "Sanad"), ("period", "2024-01")]),
        );
        assert_eq!(out, "<h1>Sanad</h1><p>2024-01</p>");
    }

    #[test]
    fn test_unknown_token_left_literal() {
        let out = TemplateEngine::substitute("<p>{{missing}}</p>", &TokenValues::new());
        assert_eq!(out, "<p>{{missing}}</p>");
    }

    #[test]
    fn test_unterminated_token_left_literal() {
        let out = TemplateEngine::substitute("a {{broken", &TokenValues::new());
        assert_eq!(out, "a {{broken");
    }

    #[test]
    fn test_headers_honor_caller_order() {
        let out = TemplateEngine::table_headers(&[ExportColumn::Amount, ExportColumn::Date]);
        assert_eq!(out, "<th>Amount</th><th>Date</th>");
    }

    #[test]
    fn test_row_markup_and_badges() {
        let rows = TemplateEngine::table_rows(
            &[record()],
            &[ExportColumn::Name, ExportColumn::Payment],
        );
        assert_eq!(
            rows,
            "<tr><td>Karim</td><td><span class=\"badge paid\">Paid</span></td></tr>"
        );
    }

    #[test]
    fn test_overtime_and_employee_row_classes() {
        let mut overtime = record();
        overtime.is_overtime = true;
        let mut employee = record();
        employee.kind = RecordKind::Employee;

        let rows = TemplateEngine::table_rows(&[overtime, employee], &[ExportColumn::Name]);
        assert!(rows.contains("<tr class=\"overtime\">"));
        assert!(rows.contains("<tr class=\"employee\">"));
    }

    #[test]
    fn test_cell_values_escape_markup() {
        let mut rec = record();
        rec.name = "<b>Karim & sons</b>".to_string();
        let rows = TemplateEngine::table_rows(&[rec], &[ExportColumn::Name]);
        assert_eq!(rows, "<tr><td>&lt;b&gt;Karim &amp; sons&lt;/b&gt;</td></tr>");
    }

    #[test]
    fn test_sentinel_hours_render_as_dash() {
        let rows = TemplateEngine::table_rows(&[record()], &[ExportColumn::Hours]);
        assert_eq!(rows, "<tr><td>\u{2014}</td></tr>");
    }

    #[test]
    fn test_total_rows_span_to_last_column() {
        let out = TemplateEngine::total_rows(&[TotalRow::new("Total IQD", "12,500 IQD")], 3);
        assert_eq!(
            out,
            "<tr class=\"total-row\"><td colspan=\"2\">Total IQD</td><td>12,500 IQD</td></tr>"
        );
    }

    #[test]
    fn test_render_wraps_css_and_substitutes() {
        let template = Template {
            id: Uuid::new_v4(),
            kind: crate::template::TemplateKind::BulkReport,
            name: "Monthly".to_string(),
            html_body: "<h1>{{company_name}}</h1><table>{{table_rows}}</table>{{unknown}}"
                .to_string(),
            css_text: "h1 { color: red; }".to_string(),
            is_default: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let meta = DocumentMeta {
            company_name: "Sanad".to_string(),
            ..DocumentMeta::default()
        };

        let html = TemplateEngine::render(&template, &[record()], &[], &meta, &[ExportColumn::Name]);
        assert!(html.contains("<h1>Sanad</h1>"));
        assert!(html.contains("<td>Karim</td>"));
        assert!(html.contains("h1 { color: red; }"));
        assert!(html.contains("{{unknown}}"));
        assert!(html.contains("dir=\"rtl\""));
    }
}
