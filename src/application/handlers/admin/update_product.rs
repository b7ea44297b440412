//! UpdateProductHandler - edits an existing catalog product.

use std::sync::Arc;

use crate::domain::catalog::{Product, ProductDraft};
use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::ports::{PreferenceStore, ProductReader, ProductRepository};

use super::ensure_admin;

/// Command carrying the edited product form.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub draft: ProductDraft,
}

/// Handler for product updates.
pub struct UpdateProductHandler {
    repository: Arc<dyn ProductRepository>,
    reader: Arc<dyn ProductReader>,
    store: Arc<dyn PreferenceStore>,
}

impl UpdateProductHandler {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        reader: Arc<dyn ProductReader>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            repository,
            reader,
            store,
        }
    }

    pub async fn handle(&self, cmd: UpdateProductCommand) -> Result<Vec<Product>, DomainError> {
        ensure_admin(self.store.as_ref()).await?;
        cmd.draft.validate()?;

        // created_at is preserved by the store; the value here is ignored by
        // the UPDATE statement.
        let product = Product::from_draft(cmd.id, cmd.draft, Timestamp::now());
        self.repository.update(&product).await?;

        tracing::info!(product_id = %product.id, "product updated");

        self.reader.list_all().await
    }
}
