//! Record lifecycle: soft delete, recovery, and PIN-gated permanent deletion.
//!
//! States move `Active → SoftDeleted → PermanentlyDeleted`; recovery walks
//! back one step, permanent deletion is terminal. The view layer only offers
//! permanent deletion from the deleted view; the core exposes it as a
//! distinct operation and does not itself forbid calling it on an active
//! record.

pub mod error;
pub mod service;
pub mod types;

pub use error::LifecycleError;
pub use service::{DELETE_PIN_KEY, LifecycleService};
pub use types::{BulkOutcome, Confirmation, OutcomeStatus, RESET_PHRASE, ResetRequest};
