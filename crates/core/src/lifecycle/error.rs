//! Lifecycle error types.

use crate::store::StoreError;
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle operation errors.
#[derive(Debug, Clone, Error)]
pub enum LifecycleError {
    /// The caller supplied no confirmation for a destructive operation.
    #[error("confirmation required for destructive operation")]
    MissingConfirmation,

    /// The confirmation phrase does not match.
    #[error("confirmation phrase does not match")]
    PhraseMismatch,

    /// No deletion PIN has been configured.
    #[error("deletion PIN is not configured")]
    PinNotConfigured,

    /// The supplied PIN does not match the stored one.
    #[error("deletion PIN does not match")]
    PinMismatch,

    /// The stored PIN hash is corrupt.
    #[error("stored PIN hash is invalid")]
    InvalidStoredPin,

    /// The addressed record no longer exists.
    #[error("record not found: {0}")]
    NotFound(Uuid),

    /// The data-access collaborator failed.
    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for LifecycleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Unavailable(msg) => Self::Store(msg),
        }
    }
}

impl LifecycleError {
    /// The stable error code surfaced to the UI.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingConfirmation | Self::PhraseMismatch => "VALIDATION_ERROR",
            Self::PinNotConfigured | Self::InvalidStoredPin => "CONFIGURATION_ERROR",
            Self::PinMismatch => "AUTHORIZATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "UPSTREAM_ERROR",
        }
    }
}

impl From<LifecycleError> for sanad_shared::AppError {
    fn from(err: LifecycleError) -> Self {
        let message = err.to_string();
        match err {
            LifecycleError::MissingConfirmation | LifecycleError::PhraseMismatch => {
                Self::Validation(message)
            }
            LifecycleError::PinNotConfigured | LifecycleError::InvalidStoredPin => {
                Self::Configuration(message)
            }
            LifecycleError::PinMismatch => Self::Authorization(message),
            LifecycleError::NotFound(_) => Self::NotFound(message),
            LifecycleError::Store(_) => Self::Upstream(message),
        }
    }
}
