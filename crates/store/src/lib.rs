//! In-memory reference implementation of the data-access port.
//!
//! The real application persists records elsewhere; this crate implements
//! [`LedgerStore`] over in-memory maps so integration tests and the exporter
//! binary have a collaborator to run against. A serde [`Snapshot`] loads and
//! dumps the whole store, which is also the exporter's input format.

use async_trait::async_trait;
use sanad_core::ledger::{RawEmployee, RawExpense};
use sanad_core::store::{LedgerStore, StoreError};
use sanad_core::template::Template;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A full dump of the store's contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Expense transactions.
    #[serde(default)]
    pub expenses: Vec<RawExpense>,
    /// Employee salary entries.
    #[serde(default)]
    pub employees: Vec<RawEmployee>,
    /// Document templates.
    #[serde(default)]
    pub templates: Vec<Template>,
    /// Settings (company identity, stored PIN hash, ...).
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct Inner {
    expenses: BTreeMap<Uuid, RawExpense>,
    employees: BTreeMap<Uuid, RawEmployee>,
    templates: BTreeMap<Uuid, Template>,
    settings: BTreeMap<String, String>,
}

/// In-memory [`LedgerStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let inner = Inner {
            expenses: snapshot.expenses.into_iter().map(|e| (e.id, e)).collect(),
            employees: snapshot.employees.into_iter().map(|e| (e.id, e)).collect(),
            templates: snapshot.templates.into_iter().map(|t| (t.id, t)).collect(),
            settings: snapshot.settings,
        };
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Dumps the store's current contents.
    pub async fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read().await;
        Snapshot {
            expenses: inner.expenses.values().cloned().collect(),
            employees: inner.employees.values().cloned().collect(),
            templates: inner.templates.values().cloned().collect(),
            settings: inner.settings.clone(),
        }
    }

    /// Inserts or replaces an expense.
    pub async fn put_expense(&self, expense: RawExpense) {
        self.inner.write().await.expenses.insert(expense.id, expense);
    }

    /// Inserts or replaces an employee.
    pub async fn put_employee(&self, employee: RawEmployee) {
        self.inner
            .write()
            .await
            .employees
            .insert(employee.id, employee);
    }

    /// Inserts or replaces a template.
    pub async fn put_template(&self, template: Template) {
        self.inner
            .write()
            .await
            .templates
            .insert(template.id, template);
    }

    /// Sets a settings value.
    pub async fn set_setting(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .write()
            .await
            .settings
            .insert(key.into(), value.into());
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn list_expenses(&self) -> Result<Vec<RawExpense>, StoreError> {
        Ok(self.inner.read().await.expenses.values().cloned().collect())
    }

    async fn list_employees(&self) -> Result<Vec<RawEmployee>, StoreError> {
        Ok(self.inner.read().await.employees.values().cloned().collect())
    }

    async fn set_expense_deleted(&self, id: Uuid, deleted: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let expense = inner.expenses.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        expense.is_deleted = deleted;
        Ok(())
    }

    async fn set_employee_deleted(&self, id: Uuid, deleted: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let employee = inner.employees.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        employee.is_deleted = deleted;
        Ok(())
    }

    async fn remove_expense(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .expenses
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn remove_employee(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn wipe_records(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.expenses.clear();
        inner.employees.clear();
        Ok(())
    }

    async fn list_templates(&self) -> Result<Vec<Template>, StoreError> {
        Ok(self.inner.read().await.templates.values().cloned().collect())
    }

    async fn update_template_default(&self, id: Uuid, is_default: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let template = inner.templates.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        template.is_default = is_default;
        Ok(())
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().await.settings.get(key).cloned())
    }
}
