//! Template management over the data-access port.

use super::error::TemplateError;
use super::types::{Template, TemplateKind};
use crate::store::LedgerStore;
use uuid::Uuid;

/// Service for template lookup and default management.
pub struct TemplateService;

impl TemplateService {
    /// Returns the default template for a document kind.
    ///
    /// # Errors
    ///
    /// `NoDefault` when no template of the kind is marked default: a
    /// configuration error the caller surfaces to the user.
    pub async fn default_template<S: LedgerStore + ?Sized>(
        store: &S,
        kind: TemplateKind,
    ) -> Result<Template, TemplateError> {
        store
            .list_templates()
            .await?
            .into_iter()
            .find(|t| t.kind == kind && t.is_default)
            .ok_or(TemplateError::NoDefault(kind))
    }

    /// Marks a template as the default for its kind.
    ///
    /// Every sibling of the same kind is unset first so at most one default
    /// exists per kind at any time.
    pub async fn set_default<S: LedgerStore + ?Sized>(
        store: &S,
        id: Uuid,
    ) -> Result<(), TemplateError> {
        let templates = store.list_templates().await?;
        let target = templates
            .iter()
            .find(|t| t.id == id)
            .ok_or(TemplateError::NotFound(id))?;

        for sibling in templates
            .iter()
            .filter(|t| t.kind == target.kind && t.is_default && t.id != id)
        {
            store.update_template_default(sibling.id, false).await?;
        }
        store.update_template_default(id, true).await?;
        tracing::info!(%id, kind = %target.kind, "default template changed");
        Ok(())
    }
}
