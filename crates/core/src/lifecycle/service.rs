//! Lifecycle state transitions over the data-access port.

use super::error::LifecycleError;
use super::types::{BulkOutcome, Confirmation, RESET_PHRASE, ResetRequest};
use crate::auth;
use crate::ledger::RecordKind;
use crate::store::LedgerStore;
use uuid::Uuid;

/// Settings key holding the Argon2id hash of the deletion PIN.
pub const DELETE_PIN_KEY: &str = "delete_pin";

/// Service driving lifecycle transitions.
///
/// Bulk variants issue one independent store round-trip per id; a failing id
/// never aborts its siblings, and there is no cross-id transaction; partial
/// failure is surfaced in the per-id outcome list.
pub struct LifecycleService;

impl LifecycleService {
    /// Soft-deletes a record: sets the deletion flag, touches nothing else.
    ///
    /// Soft-deleting an already-deleted record is a state no-op.
    ///
    /// # Errors
    ///
    /// `MissingConfirmation` without acknowledged consent; store failures
    /// are propagated per the shared taxonomy.
    pub async fn soft_delete<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        id: Uuid,
        confirm: &Confirmation,
    ) -> Result<(), LifecycleError> {
        if !confirm.acknowledged {
            return Err(LifecycleError::MissingConfirmation);
        }

        Self::set_deleted(store, kind, id, true).await?;
        tracing::info!(%kind, %id, "record soft-deleted");
        Ok(())
    }

    /// Recovers a soft-deleted record; symmetric inverse of soft deletion.
    ///
    /// Recovering an already-active record is a state no-op.
    pub async fn recover<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        id: Uuid,
    ) -> Result<(), LifecycleError> {
        Self::set_deleted(store, kind, id, false).await?;
        tracing::info!(%kind, %id, "record recovered");
        Ok(())
    }

    /// Permanently deletes a record. Irreversible.
    ///
    /// Requires acknowledged consent and a PIN matching the stored
    /// `delete_pin` hash; on mismatch nothing is mutated. The two-step
    /// soft-delete-first gate is view-layer policy; the core accepts any id.
    pub async fn permanent_delete<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        id: Uuid,
        confirm: &Confirmation,
    ) -> Result<(), LifecycleError> {
        if !confirm.acknowledged {
            return Err(LifecycleError::MissingConfirmation);
        }
        let pin = confirm
            .pin
            .as_deref()
            .ok_or(LifecycleError::MissingConfirmation)?;
        Self::verify_stored_pin(store, pin).await?;

        match kind {
            RecordKind::Expense => store.remove_expense(id).await?,
            RecordKind::Employee => store.remove_employee(id).await?,
        }
        tracing::warn!(%kind, %id, "record permanently deleted");
        Ok(())
    }

    /// Soft-deletes each id independently.
    pub async fn soft_delete_many<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        ids: &[Uuid],
        confirm: &Confirmation,
    ) -> Vec<BulkOutcome> {
        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            let result = Self::soft_delete(store, kind, id, confirm).await;
            outcomes.push(BulkOutcome::from_result(id, &result));
        }
        outcomes
    }

    /// Recovers each id independently.
    pub async fn recover_many<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        ids: &[Uuid],
    ) -> Vec<BulkOutcome> {
        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            let result = Self::recover(store, kind, id).await;
            outcomes.push(BulkOutcome::from_result(id, &result));
        }
        outcomes
    }

    /// Permanently deletes each id independently.
    ///
    /// The PIN is verified once, before any mutation: a mismatch fails the
    /// whole batch with no record removed. After that, ids are processed
    /// independently like every other bulk operation.
    pub async fn permanent_delete_many<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        ids: &[Uuid],
        confirm: &Confirmation,
    ) -> Vec<BulkOutcome> {
        let gate = Self::check_permanent_gate(store, confirm).await;
        if let Err(error) = gate {
            return ids
                .iter()
                .map(|&id| BulkOutcome::failed(id, &error))
                .collect();
        }

        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            let result = match kind {
                RecordKind::Expense => store.remove_expense(id).await,
                RecordKind::Employee => store.remove_employee(id).await,
            }
            .map_err(LifecycleError::from);
            if result.is_ok() {
                tracing::warn!(%kind, %id, "record permanently deleted");
            }
            outcomes.push(BulkOutcome::from_result(id, &result));
        }
        outcomes
    }

    /// Wipes every record. Irreversible.
    ///
    /// Requires the literal [`RESET_PHRASE`] and a matching PIN; refused
    /// otherwise with nothing mutated.
    pub async fn reset<S: LedgerStore + ?Sized>(
        store: &S,
        request: &ResetRequest,
    ) -> Result<(), LifecycleError> {
        if request.phrase != RESET_PHRASE {
            return Err(LifecycleError::PhraseMismatch);
        }
        Self::verify_stored_pin(store, &request.pin).await?;

        store.wipe_records().await?;
        tracing::warn!("all records wiped");
        Ok(())
    }

    async fn check_permanent_gate<S: LedgerStore + ?Sized>(
        store: &S,
        confirm: &Confirmation,
    ) -> Result<(), LifecycleError> {
        if !confirm.acknowledged {
            return Err(LifecycleError::MissingConfirmation);
        }
        let pin = confirm
            .pin
            .as_deref()
            .ok_or(LifecycleError::MissingConfirmation)?;
        Self::verify_stored_pin(store, pin).await
    }

    async fn verify_stored_pin<S: LedgerStore + ?Sized>(
        store: &S,
        pin: &str,
    ) -> Result<(), LifecycleError> {
        let stored = store
            .get_setting(DELETE_PIN_KEY)
            .await?
            .ok_or(LifecycleError::PinNotConfigured)?;

        match auth::verify_pin(pin, &stored) {
            Ok(true) => Ok(()),
            Ok(false) => Err(LifecycleError::PinMismatch),
            Err(_) => Err(LifecycleError::InvalidStoredPin),
        }
    }

    async fn set_deleted<S: LedgerStore + ?Sized>(
        store: &S,
        kind: RecordKind,
        id: Uuid,
        deleted: bool,
    ) -> Result<(), LifecycleError> {
        match kind {
            RecordKind::Expense => store.set_expense_deleted(id, deleted).await?,
            RecordKind::Employee => store.set_employee_deleted(id, deleted).await?,
        }
        Ok(())
    }
}
