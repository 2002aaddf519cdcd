//! Placeholder-substitution document templates.
//!
//! Stored templates are HTML/CSS skeletons with `{{name}}` tokens; the
//! token syntax is the de-facto file format for templates already in the
//! store and is preserved exactly. Unknown tokens are left as literal text
//! so templates degrade gracefully when a field is omitted.

pub mod engine;
pub mod error;
pub mod service;
pub mod types;

pub use engine::{TemplateEngine, TokenValues};
pub use error::TemplateError;
pub use service::TemplateService;
pub use types::{DocumentMeta, ExportColumn, Template, TemplateKind, TotalRow};
