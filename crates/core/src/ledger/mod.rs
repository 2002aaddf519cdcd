//! Raw entities and their normalization into the unified ledger.
//!
//! Expense transactions and employee salary entries are structurally
//! different; the report view works over one normalized record shape
//! produced here. Normalization is pure and never persisted.

pub mod normalize;
pub mod types;

pub use normalize::{normalize_employee, normalize_expense};
pub use types::{HoursCell, LedgerRecord, RawEmployee, RawExpense, RecordKind};
