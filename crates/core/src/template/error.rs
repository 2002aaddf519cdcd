//! Template error types.

use super::types::TemplateKind;
use crate::store::StoreError;
use thiserror::Error;
use uuid::Uuid;

/// Template management errors.
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// No default template is configured for the requested kind. Surfaced
    /// to the user as a configuration problem, never swallowed.
    #[error("no default template configured for {0}")]
    NoDefault(TemplateKind),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(Uuid),

    /// The data-access collaborator failed.
    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for TemplateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Unavailable(msg) => Self::Store(msg),
        }
    }
}

impl TemplateError {
    /// The stable error code surfaced to the UI.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoDefault(_) => "CONFIGURATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "UPSTREAM_ERROR",
        }
    }
}

impl From<TemplateError> for sanad_shared::AppError {
    fn from(err: TemplateError) -> Self {
        let message = err.to_string();
        match err {
            TemplateError::NoDefault(_) => Self::Configuration(message),
            TemplateError::NotFound(_) => Self::NotFound(message),
            TemplateError::Store(_) => Self::Upstream(message),
        }
    }
}
