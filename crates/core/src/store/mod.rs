//! The data-access port.
//!
//! Persistence belongs to an external collaborator; this trait is the exact
//! surface the reporting core consumes from it. Every call is an async
//! round-trip that may fail independently. The core never retries silently
//! and never assumes a failed write went through.

use crate::ledger::{RawEmployee, RawExpense};
use crate::template::Template;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by the data-access collaborator.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The addressed record no longer exists.
    #[error("record not found: {0}")]
    NotFound(Uuid),

    /// The collaborator failed; the operation may or may not have happened.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The surface the core consumes from the data-access collaborator.
///
/// Collections are listed whole; pagination is the core's job, not the
/// store's. Mutations are per-record; bulk operations in the core issue one
/// call per id with no cross-id transaction.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Lists every expense transaction, active and soft-deleted.
    async fn list_expenses(&self) -> Result<Vec<RawExpense>, StoreError>;

    /// Lists every employee salary entry, active and soft-deleted.
    async fn list_employees(&self) -> Result<Vec<RawEmployee>, StoreError>;

    /// Sets the soft-deletion flag on an expense, touching nothing else.
    async fn set_expense_deleted(&self, id: Uuid, deleted: bool) -> Result<(), StoreError>;

    /// Sets the soft-deletion flag on an employee, touching nothing else.
    async fn set_employee_deleted(&self, id: Uuid, deleted: bool) -> Result<(), StoreError>;

    /// Unconditionally removes an expense. Irreversible.
    async fn remove_expense(&self, id: Uuid) -> Result<(), StoreError>;

    /// Unconditionally removes an employee. Irreversible.
    async fn remove_employee(&self, id: Uuid) -> Result<(), StoreError>;

    /// Removes every expense and employee record. Irreversible.
    async fn wipe_records(&self) -> Result<(), StoreError>;

    /// Lists every stored document template.
    async fn list_templates(&self) -> Result<Vec<Template>, StoreError>;

    /// Sets or clears a template's default flag.
    async fn update_template_default(&self, id: Uuid, is_default: bool) -> Result<(), StoreError>;

    /// Reads a settings value (company identity, stored PIN hash, ...).
    async fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError>;
}
