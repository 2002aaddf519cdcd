//! Shared fixtures for the store integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sanad_core::auth::hash_pin;
use sanad_core::ledger::{RawEmployee, RawExpense};
use sanad_core::lifecycle::DELETE_PIN_KEY;
use sanad_core::template::{Template, TemplateKind};
use sanad_store::MemoryStore;
use uuid::Uuid;

/// The PIN every fixture store is configured with.
pub const TEST_PIN: &str = "4217";

pub fn expense(date: (i32, u32, u32), amount: Decimal) -> RawExpense {
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
        is_deleted: false,
        description: "Tanker refill".to_string(),
        created_by: "owner".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn employee(months: &[&str]) -> RawEmployee {
    RawEmployee {
        id: Uuid::new_v4(),
        employee_name: "Sara".to_string(),
        employee_number: "E-7".to_string(),
        salary: dec!(750000),
        currency: None,
        payment_date: NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
        is_paid: false,
        is_deleted: false,
        assigned_months: months.iter().map(|m| m.parse().unwrap()).collect(),
        created_by: "owner".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn template(kind: TemplateKind, name: &str, is_default: bool) -> Template {
    Template {
        id: Uuid::new_v4(),
        kind,
        name: name.to_string(),
        html_body: "<h1>{{company_name}}</h1><p>{{period}}</p>\
                    <table><thead><tr>{{table_headers}}</tr></thead>\
                    <tbody>{{table_rows}}{{total_rows}}</tbody></table>"
            .to_string(),
        css_text: ".total-row { font-weight: bold; }".to_string(),
        is_default,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A store with the test PIN configured and no records.
pub async fn pin_configured_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .set_setting(DELETE_PIN_KEY, hash_pin(TEST_PIN).unwrap())
        .await;
    store
}
