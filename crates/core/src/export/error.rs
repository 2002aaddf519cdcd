//! Export error types.

use crate::store::StoreError;
use crate::template::TemplateError;
use thiserror::Error;

/// Export orchestration errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The caller selected no columns; nothing to render.
    #[error("no export columns selected")]
    NoColumns,

    /// CSV rendering failed.
    #[error("csv rendering failed: {0}")]
    Render(String),

    /// Template lookup or rendering failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The data-access collaborator failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ExportError {
    /// The stable error code surfaced to the UI.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoColumns => "VALIDATION_ERROR",
            Self::Render(_) => "INTERNAL_ERROR",
            Self::Template(err) => err.error_code(),
            Self::Store(StoreError::NotFound(_)) => "NOT_FOUND",
            Self::Store(StoreError::Unavailable(_)) => "UPSTREAM_ERROR",
        }
    }
}

impl From<ExportError> for sanad_shared::AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::NoColumns => Self::Validation(err.to_string()),
            ExportError::Render(msg) => Self::Upstream(msg),
            ExportError::Template(inner) => inner.into(),
            ExportError::Store(StoreError::NotFound(_)) => Self::NotFound(err.to_string()),
            ExportError::Store(StoreError::Unavailable(msg)) => Self::Upstream(msg),
        }
    }
}
