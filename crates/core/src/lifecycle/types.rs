//! Lifecycle operation types.

use super::error::LifecycleError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confirmation phrase required by [`ResetRequest`].
pub const RESET_PHRASE: &str = "RESET";

/// Explicit caller consent for a destructive operation.
///
/// The core refuses destructive work without `acknowledged`; permanently
/// destructive operations additionally require the deletion PIN. UI-side
/// dialogs alone are never trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// The caller confirmed the operation.
    pub acknowledged: bool,
    /// The deletion PIN, required for permanent operations.
    pub pin: Option<String>,
}

impl Confirmation {
    /// Consent for a reversible destructive operation (soft delete).
    #[must_use]
    pub const fn acknowledged() -> Self {
        Self {
            acknowledged: true,
            pin: None,
        }
    }

    /// Consent plus the PIN for a permanent operation.
    #[must_use]
    pub fn with_pin(pin: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            pin: Some(pin.into()),
        }
    }
}

/// Request to wipe every record: phrase and PIN, both mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    /// Must equal [`RESET_PHRASE`].
    pub phrase: String,
    /// The deletion PIN.
    pub pin: String,
}

/// Outcome of one id within a bulk lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// The record the outcome belongs to.
    pub id: Uuid,
    /// What happened to it.
    pub status: OutcomeStatus,
}

/// Per-id result of a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "result")]
pub enum OutcomeStatus {
    /// The transition was applied.
    Applied,
    /// The transition failed; siblings were unaffected.
    Failed {
        /// Stable error code.
        code: String,
        /// Human-readable reason.
        message: String,
    },
}

impl BulkOutcome {
    /// A successful outcome.
    #[must_use]
    pub const fn applied(id: Uuid) -> Self {
        Self {
            id,
            status: OutcomeStatus::Applied,
        }
    }

    /// A failed outcome carrying the error's code and message.
    #[must_use]
    pub fn failed(id: Uuid, error: &LifecycleError) -> Self {
        Self {
            id,
            status: OutcomeStatus::Failed {
                code: error.error_code().to_string(),
                message: error.to_string(),
            },
        }
    }

    /// Whether the transition was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.status, OutcomeStatus::Applied)
    }

    /// Builds an outcome from a single-record operation result.
    #[must_use]
    pub fn from_result(id: Uuid, result: &Result<(), LifecycleError>) -> Self {
        match result {
            Ok(()) => Self::applied(id),
            Err(error) => Self::failed(id, error),
        }
    }
}
