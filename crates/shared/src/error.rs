//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The reporting core maps its module errors onto this taxonomy before they
/// reach the surrounding UI. `Validation` and `Authorization` are recoverable
/// and never follow a mutation; `Upstream` means the data-access collaborator
/// failed and the write must not be assumed to have happened.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Missing or invalid caller input (filter, column set, confirmation).
    #[error("Validation error: {0}")]
    Validation(String),

    /// PIN mismatch on a permanently destructive operation.
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data-access collaborator failure.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Required configuration is missing (e.g. no default template).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Returns the stable error code surfaced to the UI.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Authorization(_) => "AUTHORIZATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Returns true when the caller can recover by correcting input and
    /// retrying (no state was mutated).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Authorization(_) | Self::Configuration(_)
        )
    }
}
